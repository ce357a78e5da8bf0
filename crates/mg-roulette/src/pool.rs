//! Reward pool filtering

use mg_core::{Difficulty, Reward};

use crate::config::GachaConfig;

/// Filter the catalog down to the rewards drawable at `difficulty`.
///
/// Disabled rewards never qualify. With the difficulty lock off the whole
/// enabled set qualifies regardless of difficulty; with it on, only grades
/// in the unlock set for the requested difficulty remain. An empty pool is
/// a valid outcome, not an error.
pub fn build_pool(rewards: &[Reward], config: &GachaConfig, difficulty: Difficulty) -> Vec<Reward> {
    let enabled = rewards.iter().filter(|r| r.enabled);

    if !config.use_difficulty_lock {
        return enabled.cloned().collect();
    }

    let allowed = config.unlocked_grades(difficulty);
    enabled
        .filter(|r| allowed.contains(&r.grade))
        .cloned()
        .collect()
}
