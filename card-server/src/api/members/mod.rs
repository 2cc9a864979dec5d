//! Operator member API
//!
//! Register-side routes: look up a scanned customer, award points after a
//! purchase, or apply a manual deduction. Every route sits behind the
//! operator token middleware.

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_operator;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new().nest("/api/members", routes(state))
}

fn routes(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route("/{id}", get(handler::get_member))
        .route("/{id}/credit", post(handler::credit))
        .route("/{id}/debit", post(handler::debit))
        .layer(middleware::from_fn_with_state(state, require_operator))
}
