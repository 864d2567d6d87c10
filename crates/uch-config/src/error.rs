//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// The Databricks profile file could not be read.
    #[error("Failed to read profile file {path}: {source}")]
    ProfileFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

