use anyhow::Context;
use uch_config::HygieneConfig;

use crate::cli::GlobalFlags;

/// Load configuration. Expects `.env` to have been loaded already.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<HygieneConfig> {
    let mut config = HygieneConfig::load().context("failed to load configuration")?;
    apply_flags(&mut config, flags);
    config
        .resolve_profile()
        .context("failed to read Databricks config profile")?;
    Ok(config)
}

/// Layer global flags over loaded configuration.
///
/// An explicit `--profile` discards credentials from other sources so the
/// profile's own host and token are used; `--host` still wins over both.
fn apply_flags(config: &mut HygieneConfig, flags: &GlobalFlags) {
    if let Some(profile) = &flags.profile {
        config.workspace.profile.clone_from(profile);
        config.workspace.host.clear();
        config.workspace.token.clear();
    }
    if let Some(host) = &flags.host {
        config.workspace.host.clone_from(host);
    }
}
