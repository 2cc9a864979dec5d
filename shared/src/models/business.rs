//! Business Profile Model

use serde::{Deserialize, Serialize};

use super::level::LevelTable;
use super::reward::RewardCatalog;

/// Display theme for a business (pure data, consumed by rendering layers)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "Theme::default_primary")]
    pub primary_color: String,
    #[serde(default = "Theme::default_accent")]
    pub accent_color: String,
}

impl Theme {
    fn default_primary() -> String {
        "#047857".to_string()
    }

    fn default_accent() -> String {
        "#10b981".to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: Self::default_primary(),
            accent_color: Self::default_accent(),
        }
    }
}

/// Per-business configuration record
///
/// Loaded once at startup and treated as immutable for the lifetime of
/// the process. Keyed by `business_id`; theming, currency naming, welcome
/// bonus, level table and reward catalog are all data here rather than
/// per-business branches in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub business_id: String,
    pub display_name: String,
    /// What this business calls its points, e.g. "Stars"
    #[serde(default = "BusinessProfile::default_currency")]
    pub currency_name: String,
    /// Points granted on first access (0 = no bonus)
    #[serde(default)]
    pub welcome_bonus: i64,
    /// Title for the synthetic welcome transaction
    #[serde(default = "BusinessProfile::default_welcome_title")]
    pub welcome_title: String,
    pub levels: LevelTable,
    #[serde(default)]
    pub rewards: RewardCatalog,
    #[serde(default)]
    pub theme: Theme,
}

impl BusinessProfile {
    fn default_currency() -> String {
        "Stars".to_string()
    }

    fn default_welcome_title() -> String {
        "Welcome Gift".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_json_with_defaults() {
        let profile: BusinessProfile = serde_json::from_str(
            r#"{
                "business_id": "coffee-star-v1",
                "display_name": "Coffee Star",
                "welcome_bonus": 50,
                "levels": [
                    {"threshold": 5, "name": "Bronze"},
                    {"threshold": 10, "name": "Silver"},
                    {"threshold": 20, "name": "Gold"}
                ],
                "rewards": [
                    {"id": "extra-shot", "name": "Extra Shot", "cost": 25}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(profile.currency_name, "Stars");
        assert_eq!(profile.welcome_title, "Welcome Gift");
        assert_eq!(profile.levels.max_threshold(), 20);
        assert_eq!(profile.rewards.find("extra-shot").unwrap().cost, 25);
        assert_eq!(profile.theme.primary_color, "#047857");
    }
}
