//! LoyalTap Card Server
//!
//! Thin HTTP layer over the pure loyalty ledger in `shared`. Everything
//! stateful sits behind the [`store::MemberStore`] trait; the default
//! in-memory store applies balance deltas atomically per member and
//! pushes change events to subscribers.
//!
//! # Module structure
//!
//! ```text
//! card-server/src/
//! ├── core/          # Config, state, server loop, logging
//! ├── auth/          # Member identity extractor, operator middleware
//! ├── store/         # MemberStore trait + in-memory implementation
//! └── api/           # HTTP routes and handlers
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod store;

// Re-export public types
pub use auth::CurrentMember;
pub use core::{Config, Server, ServerState};
pub use store::{MemberEvent, MemberStore, MemoryStore};

pub use shared::{ApiResponse, AppError, AppResult};

pub fn print_banner() {
    println!(
        r#"
    __                        __ ______
   / /   ____  __  ______ _  / //_  __/___ _____
  / /   / __ \/ / / / __ `/ / /  / / / __ `/ __ \
 / /___/ /_/ / /_/ / /_/ / / /  / / / /_/ / /_/ /
/_____/\____/\__, /\__,_/_/_/  /_/  \__,_/ .___/
            /____/                      /_/
    "#
    );
}

/// Load environment, working directory and logging before anything else.
pub fn setup_environment() -> anyhow::Result<()> {
    // .env is optional; real deployments use actual environment variables
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    core::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
