//! Cross-cutting error types for uchygiene.
//!
//! [`AccessError`] is what every [`MetadataAccessor`](crate::MetadataAccessor)
//! call fails with. Transport-specific errors (e.g. the REST client's) are
//! defined in their own crates and mapped into it.

use thiserror::Error;

/// Failure of a single metadata accessor call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The referenced object does not exist (or no longer exists).
    #[error("not found: {0}")]
    NotFound(String),

    /// Credentials were rejected or the principal lacks privileges.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The service throttled the request.
    #[error("rate limited (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    /// The service returned an unexpected non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never completed (connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

impl AccessError {
    /// Whether the failure means the object is gone rather than inaccessible.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Errors raised when parsing core identifiers.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown check: {0}")]
    UnknownCheck(String),

    #[error("unknown severity: {0}")]
    UnknownSeverity(String),
}
