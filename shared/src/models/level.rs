//! Level Table Model

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One named tier of the loyalty program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelTier {
    /// Points required to unlock this tier
    pub threshold: i64,
    /// Display name, e.g. "Silver"
    pub name: String,
    /// Perk description unlocked at this tier
    #[serde(default)]
    pub reward: String,
}

/// Ordered set of level tiers for one business
///
/// Tiers are sorted ascending by threshold at construction, so lookups
/// never depend on configuration input order. Duplicate or negative
/// thresholds are rejected as configuration errors.
///
/// Serialized as a plain JSON array of tiers; deserialization runs the
/// same validation as [`LevelTable::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<LevelTier>", into = "Vec<LevelTier>")]
pub struct LevelTable {
    tiers: Vec<LevelTier>,
}

impl LevelTable {
    /// Build a validated table. Sorts ascending by threshold; rejects
    /// duplicate and negative thresholds.
    pub fn new(mut tiers: Vec<LevelTier>) -> Result<Self, AppError> {
        tiers.sort_by_key(|t| t.threshold);
        for pair in tiers.windows(2) {
            if pair[0].threshold == pair[1].threshold {
                return Err(AppError::configuration(format!(
                    "duplicate level threshold {} ({} / {})",
                    pair[0].threshold, pair[0].name, pair[1].name
                )));
            }
        }
        if let Some(t) = tiers.first()
            && t.threshold < 0
        {
            return Err(AppError::configuration(format!(
                "negative level threshold {} ({})",
                t.threshold, t.name
            )));
        }
        Ok(Self { tiers })
    }

    /// Empty table: every member sits at the sentinel tier.
    pub fn empty() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Tiers, ascending by threshold.
    pub fn tiers(&self) -> &[LevelTier] {
        &self.tiers
    }

    /// Highest configured threshold, or 0 for an empty table.
    pub fn max_threshold(&self) -> i64 {
        self.tiers.last().map(|t| t.threshold).unwrap_or(0)
    }

    /// Sentinel tier for members below every configured threshold.
    pub fn sentinel() -> LevelTier {
        LevelTier {
            threshold: 0,
            name: "Novice".to_string(),
            reward: String::new(),
        }
    }
}

impl TryFrom<Vec<LevelTier>> for LevelTable {
    type Error = AppError;

    fn try_from(tiers: Vec<LevelTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<LevelTable> for Vec<LevelTier> {
    fn from(table: LevelTable) -> Self {
        table.tiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(threshold: i64, name: &str) -> LevelTier {
        LevelTier {
            threshold,
            name: name.to_string(),
            reward: String::new(),
        }
    }

    #[test]
    fn test_table_sorts_input() {
        let table = LevelTable::new(vec![tier(20, "Gold"), tier(5, "Bronze"), tier(10, "Silver")])
            .unwrap();
        let thresholds: Vec<i64> = table.tiers().iter().map(|t| t.threshold).collect();
        assert_eq!(thresholds, vec![5, 10, 20]);
    }

    #[test]
    fn test_duplicate_threshold_rejected() {
        let err = LevelTable::new(vec![tier(5, "Bronze"), tier(5, "Copper")]).unwrap_err();
        assert!(matches!(err, AppError::Configuration { .. }));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err = LevelTable::new(vec![tier(-1, "Broke")]).unwrap_err();
        assert!(matches!(err, AppError::Configuration { .. }));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<LevelTable, _> =
            serde_json::from_str(r#"[{"threshold": 5, "name": "Bronze"}]"#);
        assert!(ok.is_ok());

        let dup: Result<LevelTable, _> = serde_json::from_str(
            r#"[{"threshold": 5, "name": "Bronze"}, {"threshold": 5, "name": "Copper"}]"#,
        );
        assert!(dup.is_err());
    }
}
