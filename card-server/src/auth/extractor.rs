//! Member identity extractor
//!
//! The hosted identity provider in front of this server authenticates the
//! caller and forwards the resolved member id as a header. An absent
//! header is the anonymous case and rejects with 401 on self-service
//! routes.

use axum::{extract::FromRequestParts, http::request::Parts};

use shared::AppError;

use super::{MEMBER_ID_HEADER, MEMBER_NAME_HEADER};
use crate::core::ServerState;

/// The caller's own member identity
///
/// Use this extractor in self-service handlers; it resolves which member
/// the request is about, nothing more.
#[derive(Debug, Clone)]
pub struct CurrentMember {
    pub id: String,
    /// Display name forwarded on first access, if any
    pub display_name: Option<String>,
}

impl FromRequestParts<ServerState> for CurrentMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted
        if let Some(member) = parts.extensions.get::<CurrentMember>() {
            return Ok(member.clone());
        }

        let id = parts
            .headers
            .get(MEMBER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        let Some(id) = id else {
            tracing::warn!(uri = %parts.uri, "Anonymous request to member route");
            return Err(AppError::Unauthorized);
        };

        let display_name = parts
            .headers
            .get(MEMBER_NAME_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from);

        let member = CurrentMember {
            id: id.to_string(),
            display_name,
        };

        // Store in extensions for potential reuse
        parts.extensions.insert(member.clone());

        Ok(member)
    }
}
