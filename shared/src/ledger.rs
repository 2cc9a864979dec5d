//! Loyalty Ledger
//!
//! Derived state and mutation validation for one member's point balance.
//! Pure computation: no I/O, no clock beyond transaction stamping, no
//! retries. Persistence and concurrency control live behind the member
//! store; this module only guarantees that a failed mutation leaves the
//! member untouched.

use crate::error::AppError;
use crate::models::{LevelTable, LevelTier, Member, Transaction};

/// Result of a level lookup for a given point balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelInfo {
    /// Highest tier with threshold <= points; sentinel when none qualifies
    pub current: LevelTier,
    /// Lowest tier with threshold > points; None at the maximum level
    pub next: Option<LevelTier>,
    /// Points still needed for `next`; 0 at the maximum level
    pub points_to_next: i64,
}

/// Find the member's current and next tier for a point balance.
///
/// The table is sorted ascending at construction, so "highest threshold
/// <= points" is the last qualifying entry regardless of how the
/// configuration listed its tiers. Members below every threshold sit at
/// the sentinel tier (threshold 0).
pub fn current_level(points: i64, table: &LevelTable) -> LevelInfo {
    let mut current: Option<&LevelTier> = None;
    let mut next: Option<&LevelTier> = None;

    for tier in table.tiers() {
        if tier.threshold <= points {
            current = Some(tier);
        } else {
            next = Some(tier);
            break;
        }
    }

    let next = next.cloned();
    let points_to_next = next.as_ref().map(|t| t.threshold - points).unwrap_or(0);

    LevelInfo {
        current: current.cloned().unwrap_or_else(LevelTable::sentinel),
        next,
        points_to_next,
    }
}

/// Fraction of the way from the current tier's threshold to the next, in
/// [0, 1]. Exactly 1.0 once the maximum threshold is reached (or when the
/// table is empty). Non-decreasing in `points` within a tier; crossing a
/// threshold starts the next tier's bar at 0.
pub fn progress_fraction(points: i64, table: &LevelTable) -> f64 {
    let info = current_level(points, table);

    let Some(next) = info.next else {
        return 1.0;
    };

    let prev = info.current.threshold;
    let span = next.threshold - prev;
    if span <= 0 {
        // Thresholds are unique by construction; guard anyway rather than
        // divide by zero on a hand-built table.
        return 1.0;
    }

    (((points - prev) as f64) / (span as f64)).clamp(0.0, 1.0)
}

/// Award points. Requires `amount > 0` and a balance that can absorb it
/// without overflowing.
///
/// Appends an earn transaction with `delta = +amount` and raises the
/// balance. On failure the member is untouched. Returns the appended
/// transaction so the store can forward it to subscribers.
pub fn credit(member: &mut Member, amount: i64, title: &str) -> Result<Transaction, AppError> {
    if amount <= 0 {
        return Err(AppError::invalid_amount(amount));
    }
    let points = member
        .points
        .checked_add(amount)
        .ok_or_else(|| AppError::invalid_amount(amount))?;

    let tx = Transaction::earn(title, amount);
    member.points = points;
    member.transactions.push(tx.clone());
    Ok(tx)
}

/// Spend points. Requires `0 < amount <= member.points`.
///
/// Appends a spend transaction with `delta = -amount` and lowers the
/// balance. On failure the member is untouched, so a debit can never
/// drive the balance negative.
pub fn debit(member: &mut Member, amount: i64, title: &str) -> Result<Transaction, AppError> {
    if amount <= 0 {
        return Err(AppError::invalid_amount(amount));
    }
    if amount > member.points {
        return Err(AppError::insufficient_balance(amount, member.points));
    }
    // 0 < amount <= points, so the subtraction cannot wrap.
    let points = member
        .points
        .checked_sub(amount)
        .ok_or_else(|| AppError::invalid_amount(amount))?;

    let tx = Transaction::spend(title, amount);
    member.points = points;
    member.transactions.push(tx.clone());
    Ok(tx)
}

/// Whether the member can afford a reward.
pub fn can_redeem(member: &Member, cost: i64) -> bool {
    member.points >= cost
}

/// Transactions ordered newest first.
///
/// Timestamp descending; equal timestamps break ties by id ascending, so
/// the ordering is deterministic and re-sorting a sorted sequence is a
/// no-op.
pub fn sorted_history(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut out = transactions.to_vec();
    out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(a.id.cmp(&b.id)));
    out
}

/// Payload string for the membership card's QR code.
///
/// The literal `businessId/memberId` concatenation; turning it into a
/// scannable image is the rendering layer's job.
pub fn encode_card_payload(business_id: &str, member_id: &str) -> String {
    format!("{}/{}", business_id, member_id)
}
