//! Append-only history store

use std::fs;
use std::path::Path;

use chrono::Local;

use mg_core::{Difficulty, GachaResult, HistoryEntry, Reward};

use crate::store::save_json;

/// Create the history file as an empty array when missing
pub fn ensure_history(path: &Path) -> GachaResult<()> {
    if !path.exists() {
        save_json(path, &Vec::<HistoryEntry>::new())?;
        log::info!("created history at {}", path.display());
    }
    Ok(())
}

/// Load all recorded entries; a missing file reads as empty.
pub fn load_history(path: &Path) -> GachaResult<Vec<HistoryEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

/// Append one entry, rewriting the flat file in full.
///
/// A history file that no longer parses is an error here rather than a
/// silent reset; entries are never discarded.
pub fn record(path: &Path, difficulty: Difficulty, reward: &Reward) -> GachaResult<()> {
    let mut entries = load_history(path)?;
    entries.push(HistoryEntry {
        timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        difficulty,
        reward_id: reward.id.clone(),
        reward_name: reward.name.clone(),
    });
    save_json(path, &entries)
}
