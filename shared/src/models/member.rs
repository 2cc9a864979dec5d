//! Member Model

use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// Member entity
///
/// One end-user account within one business's loyalty program. `points`
/// never persists negative; the balance is only ever mutated through the
/// ledger's credit/debit, which validate before touching anything.
///
/// Level is deliberately NOT stored here: it is derived from `points` and
/// the active level table at read time. A stored level is a display cache
/// and must never be treated as a source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Opaque stable identifier, unique per member within a business scope
    pub id: String,
    /// Human-readable label
    pub display_name: Option<String>,
    /// 6-digit short id printed on the membership card
    pub card_number: String,
    /// Point balance, >= 0 at rest
    pub points: i64,
    /// Append-only transaction history
    pub transactions: Vec<Transaction>,
    /// Join timestamp (ms)
    pub joined_at: i64,
}

impl Member {
    /// Create a fresh member with an empty history and zero balance.
    ///
    /// The welcome bonus, when configured, is credited by the store at
    /// first access so it lands in the history as a real transaction.
    pub fn new(id: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            id: id.into(),
            display_name,
            card_number: crate::util::short_card_number(),
            points: 0,
            transactions: Vec::new(),
            joined_at: crate::util::now_millis(),
        }
    }
}
