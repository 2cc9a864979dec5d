//! Core module - server configuration, state and the HTTP loop
//!
//! - [`Config`] - environment-driven configuration
//! - [`ServerState`] - shared state injected into handlers
//! - [`Server`] - HTTP server

pub mod config;
pub mod logger;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
