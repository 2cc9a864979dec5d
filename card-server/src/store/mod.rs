//! Member persistence
//!
//! The ledger core is pure; everything stateful hides behind
//! [`MemberStore`]. The contract mirrors what a hosted document database
//! would offer: atomic per-member deltas and a push-based change feed.
//! Mutations are always expressed as a signed delta plus a transaction
//! record, never as an overwrite of the absolute balance.

mod memory;

use async_trait::async_trait;
use tokio::sync::broadcast;

use shared::AppResult;
use shared::models::{Member, Transaction};

pub use memory::MemoryStore;

/// Change notification pushed to subscribers after every applied delta
#[derive(Debug, Clone)]
pub struct MemberEvent {
    pub member_id: String,
    /// Balance after the delta
    pub points: i64,
    /// The transaction that was appended
    pub transaction: Transaction,
}

/// Member persistence interface
///
/// `apply_delta` must be atomic per member id: two racing debits may each
/// see the balance check pass or fail, but the stored balance can never
/// go negative and no update may be lost.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Fetch a member; `NotFound` when the id is unknown.
    async fn get(&self, member_id: &str) -> AppResult<Member>;

    /// Fetch a member by the 6-digit card number (manual operator entry).
    async fn find_by_card(&self, card_number: &str) -> AppResult<Member>;

    /// Fetch a member, lazily creating the record on first access with
    /// the business's welcome bonus and a synthetic welcome transaction.
    async fn get_or_create(
        &self,
        member_id: &str,
        display_name: Option<String>,
    ) -> AppResult<Member>;

    /// Apply a signed point delta with its transaction title, atomically
    /// for this member. Positive deltas credit, negative deltas debit;
    /// validation runs through the ledger so failures leave the member
    /// untouched. Returns the updated member.
    async fn apply_delta(&self, member_id: &str, delta: i64, title: &str) -> AppResult<Member>;

    /// Subscribe to the change feed. Lagging receivers miss events rather
    /// than block writers.
    fn subscribe(&self) -> broadcast::Receiver<MemberEvent>;
}
