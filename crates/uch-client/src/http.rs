//! Shared HTTP response helpers.
//!
//! Centralizes status-code classification so the endpoint code in
//! [`unity`](crate::unity) stays focused on request construction and
//! response mapping.

use serde::Deserialize;

use crate::error::ClientError;

/// Error body returned by Databricks REST endpoints.
#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Return the response unchanged on success, or the classified error.
pub fn check_response(
    resp: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let retry_after = resp
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = resp.text().unwrap_or_default();
    Err(classify(status.as_u16(), retry_after.as_deref(), &body))
}

/// Map a non-success status and body onto a [`ClientError`].
///
/// - **404** → [`ClientError::NotFound`]
/// - **401 / 403** → [`ClientError::PermissionDenied`]
/// - **429** → [`ClientError::RateLimited`], `Retry-After` seconds or 60
/// - anything else → [`ClientError::Api`]
pub fn classify(status: u16, retry_after: Option<&str>, body: &str) -> ClientError {
    let message = error_message(body);
    match status {
        404 => ClientError::NotFound(message),
        401 | 403 => ClientError::PermissionDenied(message),
        429 => ClientError::RateLimited {
            retry_after_secs: retry_after
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(60),
        },
        _ => ClientError::Api { status, message },
    }
}

/// Prefer the structured `error_code: message` form; fall back to the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            error_code: Some(code),
            message: Some(message),
        }) => format!("{code}: {message}"),
        Ok(ApiErrorBody {
            message: Some(message),
            ..
        }) => message,
        _ => body.trim().to_string(),
    }
}
