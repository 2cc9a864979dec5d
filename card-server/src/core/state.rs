use std::sync::Arc;

use shared::AppError;
use shared::models::{BusinessProfile, LevelTable, LevelTier, Reward, RewardCatalog};

use crate::core::Config;
use crate::store::{MemberStore, MemoryStore};

/// Server state - shared references for every handler
///
/// Built once in `main` from [`Config`] and passed into the router as
/// axum state; nothing in the process relies on ambient globals. Clones
/// are shallow (`Arc`).
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Immutable per-business configuration (levels, rewards, theme)
    pub profile: Arc<BusinessProfile>,
    /// Member persistence with atomic per-member deltas
    pub store: Arc<dyn MemberStore>,
}

impl ServerState {
    /// Build state from configuration: load (or default) the business
    /// profile and wire up the in-memory store.
    pub fn initialize(config: &Config) -> Result<Self, AppError> {
        let profile = Arc::new(load_profile(config)?);

        tracing::info!(
            business_id = %profile.business_id,
            levels = profile.levels.tiers().len(),
            rewards = profile.rewards.rewards().len(),
            "Business profile loaded"
        );

        let store = Arc::new(MemoryStore::new(profile.clone()));

        Ok(Self {
            config: config.clone(),
            profile,
            store,
        })
    }

    /// Build state around an existing store (tests, alternative backends).
    pub fn with_store(
        config: Config,
        profile: Arc<BusinessProfile>,
        store: Arc<dyn MemberStore>,
    ) -> Self {
        Self {
            config,
            profile,
            store,
        }
    }
}

/// Load the business profile from `BUSINESS_CONFIG`, falling back to the
/// built-in default when unset. A path that is set but unreadable or
/// invalid is a hard configuration error, not a silent fallback.
fn load_profile(config: &Config) -> Result<BusinessProfile, AppError> {
    match &config.business_config {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                AppError::configuration(format!("cannot read business profile {}: {}", path, e))
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                AppError::configuration(format!("invalid business profile {}: {}", path, e))
            })
        }
        None => Ok(default_profile()),
    }
}

/// Built-in single-shop profile, used when no BUSINESS_CONFIG is given.
fn default_profile() -> BusinessProfile {
    let tier = |threshold: i64, name: &str, reward: &str| LevelTier {
        threshold,
        name: name.to_string(),
        reward: reward.to_string(),
    };
    let reward = |id: &str, name: &str, cost: i64, description: &str| Reward {
        id: id.to_string(),
        name: name.to_string(),
        cost,
        description: description.to_string(),
    };

    BusinessProfile {
        business_id: "coffee-star-v1".to_string(),
        display_name: "Coffee Star".to_string(),
        currency_name: "Stars".to_string(),
        welcome_bonus: 50,
        welcome_title: "Welcome Gift".to_string(),
        // Validated static data; only a code change can break this
        levels: LevelTable::new(vec![
            tier(50, "Bronze", "Birthday drink"),
            tier(150, "Silver", "Free size upgrade"),
            tier(300, "Gold", "Monthly free drink"),
        ])
        .expect("default level table is valid"),
        rewards: RewardCatalog::new(vec![
            reward("extra-shot", "Extra Shot", 25, "Booster"),
            reward("pastry", "Pastry", 50, "Bakery"),
            reward("free-drink", "Free Drink", 100, "Any size"),
        ]),
        theme: Default::default(),
    }
}
