//! Shared types for the LoyalTap platform
//!
//! Domain models, the pure loyalty ledger, error types, and the unified
//! API response structure used by the card server.

pub mod error;
pub mod ledger;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult};
pub use response::ApiResponse;
