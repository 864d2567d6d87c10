//! # uch-config
//!
//! Layered configuration loading for uchygiene using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`UCHYGIENE_*` prefix, `__` as separator)
//! 2. Standard Databricks variables (`DATABRICKS_HOST`, `DATABRICKS_TOKEN`,
//!    `DATABRICKS_CONFIG_PROFILE`)
//! 3. Project-level `.uchygiene/config.toml`
//! 4. User-level `~/.config/uchygiene/config.toml`
//! 5. Built-in defaults
//!
//! Host and token still missing after extraction can be filled from a
//! Databricks CLI profile with [`WorkspaceConfig::apply_profile_file`].
//!
//! # Usage
//!
//! ```no_run
//! use uch_config::HygieneConfig;
//!
//! let mut config = HygieneConfig::load_with_dotenv().expect("config");
//! config.resolve_profile().expect("profile");
//!
//! if config.workspace.is_configured() {
//!     println!("Workspace: {}", config.workspace.host);
//! }
//! ```

mod error;
mod output;
pub mod profile;
mod scan;
mod workspace;

pub use error::ConfigError;
pub use output::{OutputConfig, ReportFormat};
pub use scan::ScanConfig;
pub use workspace::{DEFAULT_PROFILE, WorkspaceConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HygieneConfig {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl HygieneConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Load `.env` from the current directory or its ancestors into the
    /// process environment. Variables already set are left alone; a missing
    /// file is not an error.
    pub fn load_dotenv() {
        if let Err(error) = dotenvy::dotenv() {
            if !error.not_found() {
                tracing::debug!(%error, "ignoring unreadable .env file");
            }
        }
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".uchygiene/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(Self::databricks_env())
            .merge(Env::prefixed("UCHYGIENE_").split("__"))
    }

    /// Fill missing host/token from the Databricks CLI profile file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ProfileFile`] if the file exists but is unreadable.
    pub fn resolve_profile(&mut self) -> Result<(), ConfigError> {
        if self.workspace.is_configured() {
            return Ok(());
        }
        let Some(path) = profile::default_path() else {
            return Ok(());
        };
        if !self.workspace.apply_profile_file(&path)? && !self.workspace.profile.is_empty() {
            tracing::warn!(
                profile = %self.workspace.profile,
                path = %path.display(),
                "named profile not found in Databricks config file"
            );
        }
        Ok(())
    }

    /// `DATABRICKS_HOST` / `DATABRICKS_TOKEN` / `DATABRICKS_CONFIG_PROFILE`
    /// mapped onto the `workspace` section.
    fn databricks_env() -> Env {
        Env::raw()
            .only(&[
                "DATABRICKS_HOST",
                "DATABRICKS_TOKEN",
                "DATABRICKS_CONFIG_PROFILE",
            ])
            .map(|key| {
                match key.as_str().to_ascii_uppercase().as_str() {
                    "DATABRICKS_HOST" => "workspace.host",
                    "DATABRICKS_TOKEN" => "workspace.token",
                    _ => "workspace.profile",
                }
                .into()
            })
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("uchygiene").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = HygieneConfig::default();
        assert!(!config.workspace.is_configured());
        assert!(config.scan.catalog.is_none());
        assert!(config.scan.checks.is_empty());
        assert_eq!(config.output.format, ReportFormat::Console);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: HygieneConfig = HygieneConfig::figment().extract()?;
            assert!(!config.workspace.is_configured());
            assert_eq!(config.workspace.timeout_secs, 30);
            Ok(())
        });
    }
}
