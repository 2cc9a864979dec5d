//! Data models
//!
//! Shared between card-server and rendering layers (via API).
//! Member IDs are opaque strings issued by the identity provider;
//! transaction IDs are `i64` (snowflake-style, timestamp-derived).

pub mod business;
pub mod level;
pub mod member;
pub mod reward;
pub mod transaction;

// Re-exports
pub use business::*;
pub use level::*;
pub use member::*;
pub use reward::*;
pub use transaction::*;
