//! Public business profile route
//!
//! Rendering layers need the level table, reward catalog, currency name
//! and theme to draw anything; all of it is public configuration.

use axum::{Json, Router, extract::State, routing::get};

use shared::ApiResponse;
use shared::models::BusinessProfile;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/profile", get(get_profile))
}

/// GET /api/profile - business configuration for rendering
pub async fn get_profile(State(state): State<ServerState>) -> Json<ApiResponse<BusinessProfile>> {
    Json(ApiResponse::ok(state.profile.as_ref().clone()))
}
