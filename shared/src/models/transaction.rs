//! Transaction Model

use serde::{Deserialize, Serialize};

/// Direction of a point movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Points awarded (purchase, welcome bonus)
    Earn,
    /// Points spent against a reward
    Spend,
}

/// A single entry in a member's point history
///
/// Every balance mutation is expressed as a signed delta plus one of
/// these records, never as an overwrite of the absolute total, so an
/// atomic-increment store primitive can apply it safely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Snowflake-style id; timestamp-derived, used as the sort tie-breaker
    pub id: i64,
    /// Human label, e.g. "Redeem: Free Drink"
    pub title: String,
    /// Signed point change: +N for earn, -N for spend
    pub delta: i64,
    /// Earn or spend
    pub kind: TransactionKind,
    /// Creation time (ms), used for display ordering
    pub timestamp: i64,
}

impl Transaction {
    /// Build an earn transaction for a positive amount.
    pub fn earn(title: impl Into<String>, amount: i64) -> Self {
        Self {
            id: crate::util::snowflake_id(),
            title: title.into(),
            delta: amount,
            kind: TransactionKind::Earn,
            timestamp: crate::util::now_millis(),
        }
    }

    /// Build a spend transaction for a positive amount (stored as -amount).
    pub fn spend(title: impl Into<String>, amount: i64) -> Self {
        Self {
            id: crate::util::snowflake_id(),
            title: title.into(),
            delta: -amount,
            kind: TransactionKind::Spend,
            timestamp: crate::util::now_millis(),
        }
    }
}
