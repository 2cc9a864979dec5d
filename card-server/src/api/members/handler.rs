//! Operator member handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::{ApiResponse, AppError, AppResult};

use crate::api::convert::CardSnapshot;
use crate::core::ServerState;

/// Resolve a scanned or typed key: member id first (QR payload), then the
/// 6-digit card number (manual entry at the register).
async fn resolve(state: &ServerState, key: &str) -> AppResult<shared::models::Member> {
    match state.store.get(key).await {
        Ok(member) => Ok(member),
        Err(AppError::NotFound { .. }) => state.store.find_by_card(key).await,
        Err(e) => Err(e),
    }
}

/// GET /api/members/{id} - look up a scanned customer
pub async fn get_member(
    State(state): State<ServerState>,
    Path(key): Path<String>,
) -> AppResult<Json<ApiResponse<CardSnapshot>>> {
    let member = resolve(&state, &key).await?;
    Ok(Json(ApiResponse::ok(CardSnapshot::build(
        &state.profile,
        &member,
    ))))
}

#[derive(serde::Deserialize)]
pub struct AmountRequest {
    pub amount: i64,
    /// Transaction label; defaults per operation
    pub title: Option<String>,
}

/// POST /api/members/{id}/credit - award points after a purchase
pub async fn credit(
    State(state): State<ServerState>,
    Path(key): Path<String>,
    Json(payload): Json<AmountRequest>,
) -> AppResult<Json<ApiResponse<CardSnapshot>>> {
    // A negative amount here would flow through apply_delta as a debit;
    // reject it up front instead.
    if payload.amount <= 0 {
        return Err(AppError::invalid_amount(payload.amount));
    }

    let member = resolve(&state, &key).await?;
    let title = payload.title.as_deref().unwrap_or("Purchase");

    let updated = state
        .store
        .apply_delta(&member.id, payload.amount, title)
        .await?;

    tracing::info!(member_id = %member.id, amount = payload.amount, "Points credited");

    Ok(Json(ApiResponse::ok(CardSnapshot::build(
        &state.profile,
        &updated,
    ))))
}

/// POST /api/members/{id}/debit - manual deduction
pub async fn debit(
    State(state): State<ServerState>,
    Path(key): Path<String>,
    Json(payload): Json<AmountRequest>,
) -> AppResult<Json<ApiResponse<CardSnapshot>>> {
    // Reject non-positive amounts here: negating them below would turn a
    // bad request into a credit.
    if payload.amount <= 0 {
        return Err(AppError::invalid_amount(payload.amount));
    }

    let member = resolve(&state, &key).await?;
    let title = payload.title.as_deref().unwrap_or("Adjustment");

    let updated = state
        .store
        .apply_delta(&member.id, -payload.amount, title)
        .await?;

    tracing::info!(member_id = %member.id, amount = payload.amount, "Points debited");

    Ok(Json(ApiResponse::ok(CardSnapshot::build(
        &state.profile,
        &updated,
    ))))
}
