//! Mission difficulty

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GachaError;

/// Mission difficulty, ordered easiest to hardest. The order only matters
/// for display; pool eligibility comes from the grade unlock map.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Wire name of the difficulty
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GachaError;

    /// Case-insensitive; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EASY" => Ok(Difficulty::Easy),
            "MEDIUM" => Ok(Difficulty::Medium),
            "HARD" => Ok(Difficulty::Hard),
            other => Err(GachaError::UnknownDifficulty(other.to_string())),
        }
    }
}
