//! Gacha and spinner configuration

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use mg_core::{Difficulty, Grade};

use crate::palette::Palette;

/// Spinner animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinnerConfig {
    /// Full ring revolutions before landing
    pub cycles: u32,
    /// Total spin duration; 0 derives the length from `cycles`
    pub duration_ms: u64,
    /// Frames per second at full speed
    pub fps: u32,
    /// Quadratic ease-out: start fast, slow into the landing
    pub ease_out: bool,
    /// Pass the target and rubber-band back onto it
    pub overshoot: bool,
    /// Focus window size in ring positions (odd)
    pub window: usize,
    /// Color palette for the ring
    pub palette: Palette,
    /// Landing blink repetitions
    pub final_blink_count: u32,
    /// Celebration glyph line after landing
    pub confetti: bool,
    /// Terminal bell after landing
    pub beep: bool,
    /// Seed for selection and celebration randomness
    pub seed: Option<u64>,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            cycles: 3,
            duration_ms: 0,
            fps: 30,
            ease_out: true,
            overshoot: true,
            window: 5,
            palette: Palette::Classic,
            final_blink_count: 3,
            confetti: true,
            beep: false,
            seed: None,
        }
    }
}

impl SpinnerConfig {
    /// Clamp degenerate values into the usable range. The window is forced
    /// odd so the focus stays centered.
    pub fn sanitized(&self) -> Self {
        let mut cfg = self.clone();
        cfg.cycles = cfg.cycles.max(1);
        cfg.fps = cfg.fps.max(1);
        if cfg.window == 0 {
            cfg.window = 1;
        }
        if cfg.window % 2 == 0 {
            cfg.window += 1;
        }
        cfg
    }
}

/// Top-level configuration file contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GachaConfig {
    /// Restrict drawable grades per mission difficulty
    pub use_difficulty_lock: bool,
    /// Difficulty → grades allowed while the lock is on
    pub grade_unlock_map: BTreeMap<Difficulty, BTreeSet<Grade>>,
    /// Spinner settings
    pub spinner: SpinnerConfig,
}

impl Default for GachaConfig {
    fn default() -> Self {
        let mut grade_unlock_map = BTreeMap::new();
        grade_unlock_map.insert(Difficulty::Easy, BTreeSet::from([Grade::Basic]));
        grade_unlock_map.insert(
            Difficulty::Medium,
            BTreeSet::from([Grade::Basic, Grade::Rare]),
        );
        grade_unlock_map.insert(
            Difficulty::Hard,
            BTreeSet::from([Grade::Basic, Grade::Rare, Grade::Epic]),
        );

        Self {
            use_difficulty_lock: false,
            grade_unlock_map,
            spinner: SpinnerConfig::default(),
        }
    }
}

impl GachaConfig {
    /// Grades drawable at `difficulty`; empty when the difficulty is not in
    /// the unlock map.
    pub fn unlocked_grades(&self, difficulty: Difficulty) -> BTreeSet<Grade> {
        self.grade_unlock_map
            .get(&difficulty)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_forces_odd_window() {
        let cfg = SpinnerConfig {
            window: 4,
            ..SpinnerConfig::default()
        };
        assert_eq!(cfg.sanitized().window, 5);

        let cfg = SpinnerConfig {
            window: 0,
            cycles: 0,
            fps: 0,
            ..SpinnerConfig::default()
        };
        let clean = cfg.sanitized();
        assert_eq!(clean.window, 1);
        assert_eq!(clean.cycles, 1);
        assert_eq!(clean.fps, 1);
    }

    #[test]
    fn test_partial_config_file_defaults_the_rest() {
        let cfg: GachaConfig =
            serde_json::from_str(r#"{"use_difficulty_lock": true}"#).unwrap();
        assert!(cfg.use_difficulty_lock);
        assert_eq!(cfg.spinner, SpinnerConfig::default());
        assert!(cfg
            .unlocked_grades(Difficulty::Hard)
            .contains(&Grade::Epic));
    }

    #[test]
    fn test_unmapped_difficulty_has_no_grades() {
        let mut cfg = GachaConfig::default();
        cfg.grade_unlock_map.remove(&Difficulty::Easy);
        assert!(cfg.unlocked_grades(Difficulty::Easy).is_empty());
    }

    #[test]
    fn test_spinner_config_roundtrip() {
        let cfg = SpinnerConfig {
            duration_ms: 2500,
            palette: Palette::Neon,
            seed: Some(42),
            ..SpinnerConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SpinnerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
