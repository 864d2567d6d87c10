//! Report rendering error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The generated report schema could not be compiled.
    #[error("Schema compilation error: {0}")]
    Schema(String),

    /// A report document did not pass schema validation.
    #[error("Report validation failed: {errors:?}")]
    ValidationFailed { errors: Vec<String> },
}
