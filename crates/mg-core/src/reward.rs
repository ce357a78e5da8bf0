//! Reward and grade definitions

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Floor applied to weights during selection so zero or negative values
/// never produce a zero-probability entry.
pub const WEIGHT_FLOOR: f64 = 1e-6;

/// Reward rarity tier
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Grade {
    /// Everyday reward
    #[default]
    Basic,
    /// Uncommon reward
    Rare,
    /// Top-tier reward
    Epic,
    /// Grade name this build does not recognize. A hand-edited catalog
    /// still loads; validation flags the entry.
    #[serde(other)]
    Unknown,
}

impl Grade {
    /// Wire name of the grade
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Basic => "BASIC",
            Grade::Rare => "RARE",
            Grade::Epic => "EPIC",
            Grade::Unknown => "UNKNOWN",
        }
    }

    /// True for every grade except the catch-all
    pub fn is_known(&self) -> bool {
        !matches!(self, Grade::Unknown)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reward in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    /// Unique id within the catalog; backfilled on load when missing
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Rarity tier
    #[serde(default)]
    pub grade: Grade,
    /// Draw weight; selection probability is proportional to this
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Disabled rewards never enter a pool
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_weight() -> f64 {
    1.0
}

fn default_enabled() -> bool {
    true
}

impl Reward {
    /// Create a reward with a fresh id
    pub fn new(name: impl Into<String>, grade: Grade, weight: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            grade,
            weight,
            enabled: true,
        }
    }

    /// Weight as used by the selector, floored at [`WEIGHT_FLOOR`]
    pub fn effective_weight(&self) -> f64 {
        self.weight.max(WEIGHT_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_weight_floors_bad_values() {
        let mut reward = Reward::new("test", Grade::Basic, 2.0);
        assert_eq!(reward.effective_weight(), 2.0);

        reward.weight = 0.0;
        assert_eq!(reward.effective_weight(), WEIGHT_FLOOR);

        reward.weight = -3.0;
        assert_eq!(reward.effective_weight(), WEIGHT_FLOOR);

        reward.weight = f64::NAN;
        assert_eq!(reward.effective_weight(), WEIGHT_FLOOR);
    }

    #[test]
    fn test_reward_defaults_on_load() {
        let reward: Reward = serde_json::from_str(r#"{"name":"Tea"}"#).unwrap();
        assert!(reward.id.is_empty());
        assert_eq!(reward.grade, Grade::Basic);
        assert_eq!(reward.weight, 1.0);
        assert!(reward.enabled);
    }

    #[test]
    fn test_unknown_grade_still_loads() {
        let reward: Reward =
            serde_json::from_str(r#"{"name":"X","grade":"MYTHIC"}"#).unwrap();
        assert_eq!(reward.grade, Grade::Unknown);
        assert!(!reward.grade.is_known());
    }

    #[test]
    fn test_grade_wire_names() {
        assert_eq!(serde_json::to_string(&Grade::Basic).unwrap(), "\"BASIC\"");
        assert_eq!(serde_json::to_string(&Grade::Epic).unwrap(), "\"EPIC\"");
        assert_eq!(Grade::Rare.to_string(), "RARE");
    }
}
