//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`profile`] - public business profile (levels, rewards, theme)
//! - [`card`] - self-service membership card (identity required)
//! - [`members`] - operator routes for the register (token required)

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::ServerState;

pub mod convert;

pub mod card;
pub mod health;
pub mod members;
pub mod profile;

// Re-export common types for handlers
pub use shared::{ApiResponse, AppResult};

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(profile::router())
        .merge(card::router())
        .merge(members::router(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
