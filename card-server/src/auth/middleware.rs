//! Operator authorization middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use shared::AppError;

use super::OPERATOR_TOKEN_HEADER;
use crate::core::ServerState;

/// Require the operator credential on admin routes
///
/// Compares `X-Operator-Token` against the configured `ADMIN_TOKEN`.
/// When no token is configured, operator routes are disabled outright.
///
/// | Failure | HTTP status |
/// |---------|-------------|
/// | No ADMIN_TOKEN configured | 403 Forbidden |
/// | Missing or wrong header | 403 Forbidden |
pub async fn require_operator(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = state.config.admin_token.as_deref() else {
        return Err(AppError::forbidden("operator routes are disabled"));
    };

    let supplied = req
        .headers()
        .get(OPERATOR_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok());

    match supplied {
        Some(token) if token == expected => Ok(next.run(req).await),
        Some(_) => {
            tracing::warn!(uri = %req.uri(), "Operator token rejected");
            Err(AppError::forbidden("invalid operator token"))
        }
        None => Err(AppError::forbidden("operator token required")),
    }
}
