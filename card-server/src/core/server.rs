//! Server Implementation
//!
//! HTTP server startup and shutdown.

use shared::AppError;

use crate::api;
use crate::core::{Config, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (for sharing with tests)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<(), AppError> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config)?,
        };

        if state.config.admin_token.is_none() {
            tracing::warn!("ADMIN_TOKEN not set - operator routes are disabled");
        }

        let app = api::router(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("cannot bind {}: {}", addr, e)))?;

        tracing::info!("LoyalTap card server listening on {}", addr);

        // Signal the deadline watcher once ctrl-c arrives, so the drain
        // phase is bounded by shutdown_timeout_ms instead of open-ended.
        let (drain_tx, drain_rx) = tokio::sync::oneshot::channel::<()>();
        let shutdown = async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            let _ = drain_tx.send(());
        };

        let serve = async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown)
                .await
        };
        let timeout_ms = self.config.shutdown_timeout_ms;
        tokio::pin!(serve);
        tokio::select! {
            result = &mut serve => {
                result.map_err(|e| AppError::internal(format!("server error: {}", e)))?;
            }
            _ = async {
                let _ = drain_rx.await;
                tokio::time::sleep(std::time::Duration::from_millis(timeout_ms)).await;
            } => {
                tracing::warn!(
                    "connections still open after {}ms drain, closing them",
                    timeout_ms
                );
            }
        }

        Ok(())
    }
}
