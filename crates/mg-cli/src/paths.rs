//! Data file locations

use std::path::{Path, PathBuf};

/// Locations of the three data files, resolved once at startup and passed
/// down explicitly instead of living in module-level state.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub config: PathBuf,
    pub rewards: PathBuf,
    pub history: PathBuf,
}

impl DataPaths {
    /// Conventional file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            config: dir.join("config.json"),
            rewards: dir.join("rewards.json"),
            history: dir.join("history.json"),
        }
    }
}
