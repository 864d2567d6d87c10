//! Databricks workspace connection settings.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::profile;

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

/// Profile consulted when none is named.
pub const DEFAULT_PROFILE: &str = "DEFAULT";

#[derive(Clone, Deserialize, Serialize)]
pub struct WorkspaceConfig {
    /// Workspace URL (e.g., `https://adb-123.4.azuredatabricks.net`).
    #[serde(default)]
    pub host: String,

    /// Personal access token sent as a bearer token.
    #[serde(default)]
    pub token: String,

    /// Databricks CLI profile to read host/token from when unset.
    #[serde(default)]
    pub profile: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `max_results` per listing page. 0 leaves it to the server.
    #[serde(default)]
    pub page_size: u32,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            token: String::new(),
            profile: String::new(),
            timeout_secs: default_timeout_secs(),
            page_size: 0,
        }
    }
}

impl fmt::Debug for WorkspaceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkspaceConfig")
            .field("host", &self.host)
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .field("profile", &self.profile)
            .field("timeout_secs", &self.timeout_secs)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl WorkspaceConfig {
    /// Check if host and token are both present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.host.trim().is_empty() && !self.token.is_empty()
    }

    /// Profile to consult, falling back to `DEFAULT`.
    #[must_use]
    pub fn profile_name(&self) -> &str {
        if self.profile.is_empty() {
            DEFAULT_PROFILE
        } else {
            &self.profile
        }
    }

    /// Normalized API base: scheme added when missing, trailing `/` removed.
    ///
    /// Returns `None` when no host is configured.
    #[must_use]
    pub fn api_base(&self) -> Option<String> {
        let host = self.host.trim().trim_end_matches('/');
        if host.is_empty() {
            return None;
        }
        if host.starts_with("https://") || host.starts_with("http://") {
            Some(host.to_string())
        } else {
            Some(format!("https://{host}"))
        }
    }

    /// Fill an empty host and/or token from the selected profile in a
    /// Databricks CLI config file. Values already set are kept.
    ///
    /// Returns `true` when the profile section was found.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ProfileFile`] if the file exists but cannot be
    /// read. A missing file is not an error.
    pub fn apply_profile_file(&mut self, path: &Path) -> Result<bool, ConfigError> {
        if !path.exists() {
            return Ok(false);
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ProfileFile {
            path: path.display().to_string(),
            source,
        })?;

        let Some(section) = profile::resolve(&contents, self.profile_name()) else {
            tracing::debug!(profile = self.profile_name(), path = %path.display(), "profile not found");
            return Ok(false);
        };

        if self.host.is_empty() {
            if let Some(host) = section.get("host") {
                self.host.clone_from(host);
            }
        }
        if self.token.is_empty() {
            if let Some(token) = section.get("token") {
                self.token.clone_from(token);
            }
        }
        Ok(true)
    }
}
