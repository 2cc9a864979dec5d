//! API view types
//!
//! Presentation layers never re-derive levels from raw points; every view
//! of a member goes through the ledger here, so sort direction and
//! threshold search live in exactly one place.

use serde::Serialize;

use shared::ledger;
use shared::models::{BusinessProfile, LevelTier, Member, Reward};

/// Derived level state for display
#[derive(Debug, Serialize)]
pub struct LevelView {
    pub current: LevelTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<LevelTier>,
    pub points_to_next: i64,
    /// Fraction of the way to the next tier, in [0, 1]
    pub progress: f64,
}

/// One catalog reward with its affordability for this member
#[derive(Debug, Serialize)]
pub struct RewardView {
    #[serde(flatten)]
    pub reward: Reward,
    pub affordable: bool,
}

/// Full membership card view returned by card and operator endpoints
#[derive(Debug, Serialize)]
pub struct CardSnapshot {
    pub member_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub card_number: String,
    pub points: i64,
    /// What the business calls its points, e.g. "Stars"
    pub currency_name: String,
    pub level: LevelView,
    /// String for the QR renderer: `businessId/memberId`
    pub card_payload: String,
    /// Catalog rewards flagged with whether this member can afford them
    pub rewards: Vec<RewardView>,
    pub joined_at: i64,
}

impl CardSnapshot {
    pub fn build(profile: &BusinessProfile, member: &Member) -> Self {
        let info = ledger::current_level(member.points, &profile.levels);
        let progress = ledger::progress_fraction(member.points, &profile.levels);

        let rewards = profile
            .rewards
            .rewards()
            .iter()
            .map(|r| RewardView {
                reward: r.clone(),
                affordable: ledger::can_redeem(member, r.cost),
            })
            .collect();

        Self {
            member_id: member.id.clone(),
            display_name: member.display_name.clone(),
            card_number: member.card_number.clone(),
            points: member.points,
            currency_name: profile.currency_name.clone(),
            level: LevelView {
                current: info.current,
                next: info.next,
                points_to_next: info.points_to_next,
                progress,
            },
            card_payload: ledger::encode_card_payload(&profile.business_id, &member.id),
            rewards,
            joined_at: member.joined_at,
        }
    }
}
