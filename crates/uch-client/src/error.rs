//! Client error types.

use thiserror::Error;
use uch_core::AccessError;

/// Errors that can occur when talking to the Unity Catalog REST API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport or body decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The workspace is missing a required connection setting.
    #[error("workspace is not configured: missing {0}")]
    NotConfigured(&'static str),

    /// 404 from the API.
    #[error("not found: {0}")]
    NotFound(String),

    /// 401 or 403 from the API.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// 429 from the API.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying (from `Retry-After`, default 60).
        retry_after_secs: u64,
    },

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<ClientError> for AccessError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Http(e) if e.is_decode() => Self::Decode(e.to_string()),
            ClientError::Http(e) => Self::Transport(e.to_string()),
            ClientError::NotConfigured(field) => {
                Self::PermissionDenied(format!("workspace is not configured: missing {field}"))
            }
            ClientError::NotFound(message) => Self::NotFound(message),
            ClientError::PermissionDenied(message) => Self::PermissionDenied(message),
            ClientError::RateLimited { retry_after_secs } => {
                Self::RateLimited { retry_after_secs }
            }
            ClientError::Api { status, message } => Self::Api { status, message },
            ClientError::Parse(message) => Self::Decode(message),
        }
    }
}

/// Errors loading or saving a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}
