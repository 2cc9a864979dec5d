//! Self-service card API
//!
//! All routes resolve the member from the caller's own identity; an
//! anonymous request gets 401 from the extractor.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/card", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get_card))
        .route("/history", get(handler::history))
        .route("/redeem", post(handler::redeem))
}
