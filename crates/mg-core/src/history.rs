//! History entries

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;

/// One recorded draw. Entries are append-only; past entries are never
/// mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Local time the reward was drawn, `%Y-%m-%dT%H:%M:%S`
    pub timestamp: String,
    /// Difficulty the mission was run at
    pub difficulty: Difficulty,
    /// Id of the drawn reward
    pub reward_id: String,
    /// Name at draw time (catalog may be edited later)
    pub reward_name: String,
}
