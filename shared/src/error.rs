//! Error types for the loyalty platform
//!
//! The ledger reports every validation failure synchronously to its caller;
//! nothing is retried internally. The HTTP layer maps each error kind to a
//! stable code and status via [`axum::response::IntoResponse`].

use crate::{
    http::{Response, StatusCode},
    response::ApiResponse,
};
use thiserror::Error;

/// Standard API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Success
    Success,
    /// Non-positive amount passed to credit/debit (400)
    InvalidAmount,
    /// Debit exceeds the member's current balance (409)
    InsufficientBalance,
    /// Member or configuration missing (404)
    NotFound,
    /// Business configuration is invalid (500)
    Configuration,
    /// Member identity required (401)
    Unauthorized,
    /// Operator credential required or wrong (403)
    Forbidden,
    /// Invalid request (400)
    Invalid,
    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::InvalidAmount => StatusCode::BAD_REQUEST,
            Self::InsufficientBalance => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Invalid => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "E0000",
            Self::InvalidAmount => "E1001",
            Self::InsufficientBalance => "E1002",
            Self::NotFound => "E1003",
            Self::Configuration => "E1004",
            Self::Unauthorized => "E3001",
            Self::Forbidden => "E2001",
            Self::Invalid => "E0006",
            Self::Internal => "E9001",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Unified error type for the platform
///
/// The first four variants are the ledger's own taxonomy; the rest exist
/// for the HTTP layer (identity, operator checks, malformed requests).
#[derive(Debug, Error)]
pub enum AppError {
    /// Non-positive amount passed to credit/debit
    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: i64 },

    /// Debit exceeds current points
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: i64, available: i64 },

    /// Member or configuration missing
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Business configuration is invalid (duplicate thresholds, etc.)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Member identity required
    #[error("Member identity required")]
    Unauthorized,

    /// Operator credential required or wrong
    #[error("Permission denied: {message}")]
    Forbidden { message: String },

    /// Invalid request
    #[error("Invalid request: {message}")]
    Invalid { message: String },

    /// Internal server error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    // ========== Convenient constructors ==========

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: i64) -> Self {
        Self::InvalidAmount { amount }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(requested: i64, available: i64) -> Self {
        Self::InsufficientBalance {
            requested,
            available,
        }
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a Forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create an Invalid error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    // ========== Error inspection methods ==========

    /// Get the error code for this error
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidAmount { .. } => ErrorCode::InvalidAmount,
            Self::InsufficientBalance { .. } => ErrorCode::InsufficientBalance,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::Configuration { .. } => ErrorCode::Configuration,
            Self::Unauthorized => ErrorCode::Unauthorized,
            Self::Forbidden { .. } => ErrorCode::Forbidden,
            Self::Invalid { .. } => ErrorCode::Invalid,
            Self::Internal { .. } => ErrorCode::Internal,
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> Response<axum::body::Body> {
        let code = self.error_code();
        let status = code.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(code = %code, "{}", message);
        }

        let body = ApiResponse::<()>::error(code.code(), message);
        let json_body = serde_json::to_string(&body).unwrap_or_default();

        http::Response::builder()
            .status(status)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(json_body.into())
            .unwrap_or_else(|_| {
                http::Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body("Internal error".into())
                    .unwrap()
            })
    }
}

/// Result type for ledger and API operations
pub type AppResult<T> = Result<T, AppError>;
