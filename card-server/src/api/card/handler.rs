//! Self-service card handlers

use axum::{Json, extract::State};

use shared::models::Transaction;
use shared::{ApiResponse, AppResult, ledger};

use crate::api::convert::CardSnapshot;
use crate::auth::CurrentMember;
use crate::core::ServerState;

/// GET /api/card - the caller's own membership card
///
/// First access creates the member with the configured welcome bonus.
pub async fn get_card(
    State(state): State<ServerState>,
    member: CurrentMember,
) -> AppResult<Json<ApiResponse<CardSnapshot>>> {
    let record = state
        .store
        .get_or_create(&member.id, member.display_name)
        .await?;

    Ok(Json(ApiResponse::ok(CardSnapshot::build(
        &state.profile,
        &record,
    ))))
}

/// GET /api/card/history - the caller's transactions, newest first
pub async fn history(
    State(state): State<ServerState>,
    member: CurrentMember,
) -> AppResult<Json<ApiResponse<Vec<Transaction>>>> {
    let record = state
        .store
        .get_or_create(&member.id, member.display_name)
        .await?;

    Ok(Json(ApiResponse::ok(ledger::sorted_history(
        &record.transactions,
    ))))
}

#[derive(serde::Deserialize)]
pub struct RedeemRequest {
    pub reward_id: String,
}

/// POST /api/card/redeem - spend points on a catalog reward
///
/// The cost comes from the configured catalog, never from the client.
/// An unaffordable reward surfaces as `InsufficientBalance`.
pub async fn redeem(
    State(state): State<ServerState>,
    member: CurrentMember,
    Json(payload): Json<RedeemRequest>,
) -> AppResult<Json<ApiResponse<CardSnapshot>>> {
    let reward = state
        .profile
        .rewards
        .find(&payload.reward_id)
        .ok_or_else(|| shared::AppError::not_found(format!("reward {}", payload.reward_id)))?;

    // Ensure the record exists before debiting (first action may be a scan
    // at the register rather than a card view)
    state
        .store
        .get_or_create(&member.id, member.display_name)
        .await?;

    let record = state
        .store
        .apply_delta(
            &member.id,
            -reward.cost,
            &format!("Redeem: {}", reward.name),
        )
        .await?;

    tracing::info!(
        member_id = %member.id,
        reward_id = %reward.id,
        cost = reward.cost,
        "Reward redeemed"
    );

    Ok(Json(ApiResponse::ok(CardSnapshot::build(
        &state.profile,
        &record,
    ))))
}
