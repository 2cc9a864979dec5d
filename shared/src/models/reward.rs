//! Reward Catalog Model

use serde::{Deserialize, Serialize};

/// One redeemable reward
///
/// Independent of the level table: rewards are bought with points, level
/// progression is never consumed by redemption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub name: String,
    /// Point cost to redeem
    pub cost: i64,
    #[serde(default)]
    pub description: String,
}

/// Ordered reward catalog for one business
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardCatalog {
    rewards: Vec<Reward>,
}

impl RewardCatalog {
    pub fn new(rewards: Vec<Reward>) -> Self {
        Self { rewards }
    }

    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    /// Look up a reward by id.
    pub fn find(&self, id: &str) -> Option<&Reward> {
        self.rewards.iter().find(|r| r.id == id)
    }
}
