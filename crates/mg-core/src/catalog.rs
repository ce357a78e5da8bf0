//! Reward catalog with normalization and validation passes

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reward::Reward;

/// The full reward catalog as stored on disk (a flat JSON array).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub rewards: Vec<Reward>,
}

/// Advisory finding from [`Catalog::validate`]. Reported to the user but
/// never halts a normal run.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIssue {
    DuplicateId { id: String },
    UnknownGrade { id: String },
    NonPositiveWeight { id: String, weight: f64 },
    EmptyName { id: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateId { id } => write!(f, "duplicate id: {id}"),
            CatalogIssue::UnknownGrade { id } => write!(f, "unknown grade on reward {id}"),
            CatalogIssue::NonPositiveWeight { id, weight } => {
                write!(f, "non-positive weight {weight} on reward {id}")
            }
            CatalogIssue::EmptyName { id } => write!(f, "empty name on reward {id}"),
        }
    }
}

impl Catalog {
    /// Create a catalog from a reward list
    pub fn new(rewards: Vec<Reward>) -> Self {
        Self { rewards }
    }

    /// Number of rewards, enabled or not
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    /// Backfill missing ids and replace duplicates with fresh ones.
    ///
    /// Returns true when anything changed, so the caller knows to persist
    /// the catalog. Ids assigned here are stable across subsequent loads.
    pub fn normalize_ids(&mut self) -> bool {
        let mut seen: HashSet<String> = HashSet::new();
        let mut changed = false;
        for reward in &mut self.rewards {
            if reward.id.is_empty() || seen.contains(&reward.id) {
                reward.id = Uuid::new_v4().to_string();
                changed = true;
                log::debug!("assigned id {} to reward '{}'", reward.id, reward.name);
            }
            seen.insert(reward.id.clone());
        }
        changed
    }

    /// Run advisory diagnostics over the catalog.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for reward in &self.rewards {
            if !seen.insert(&reward.id) {
                issues.push(CatalogIssue::DuplicateId {
                    id: reward.id.clone(),
                });
            }
            if !reward.grade.is_known() {
                issues.push(CatalogIssue::UnknownGrade {
                    id: reward.id.clone(),
                });
            }
            if !(reward.weight > 0.0) {
                issues.push(CatalogIssue::NonPositiveWeight {
                    id: reward.id.clone(),
                    weight: reward.weight,
                });
            }
            if reward.name.trim().is_empty() {
                issues.push(CatalogIssue::EmptyName {
                    id: reward.id.clone(),
                });
            }
        }
        issues
    }
}
