//! Identity and operator authorization
//!
//! Member identity only resolves "which member" for self-service views;
//! it never grants operator rights. Operator routes check a shared token
//! configured at startup (see [`crate::core::Config::admin_token`]).

mod extractor;
mod middleware;

pub use extractor::CurrentMember;
pub use middleware::require_operator;

/// Header carrying the caller's member identity, supplied by the external
/// identity provider fronting this server.
pub const MEMBER_ID_HEADER: &str = "x-member-id";

/// Optional display name accompanying first access.
pub const MEMBER_NAME_HEADER: &str = "x-member-name";

/// Header carrying the operator credential for admin routes.
pub const OPERATOR_TOKEN_HEADER: &str = "x-operator-token";
