//! Databricks CLI profile file (`~/.databrickscfg`).
//!
//! INI format: `[section]` headers, `key = value` lines, `#`/`;` comments.
//! Keys from `[DEFAULT]` apply to every profile unless the profile sets them.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::workspace::DEFAULT_PROFILE;

/// Location of the profile file: `DATABRICKS_CONFIG_FILE` or `~/.databrickscfg`.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("DATABRICKS_CONFIG_FILE") {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::home_dir().map(|home| home.join(".databrickscfg"))
}

/// Key/value pairs for `profile`, merged over `[DEFAULT]`.
///
/// Returns `None` when the profile has no section (for `DEFAULT`, when the
/// file has no `[DEFAULT]` section either).
#[must_use]
pub fn resolve(contents: &str, profile: &str) -> Option<HashMap<String, String>> {
    let sections = parse(contents);
    let defaults = sections.get(DEFAULT_PROFILE);
    let selected = sections.get(profile)?;

    let mut merged = defaults.cloned().unwrap_or_default();
    merged.extend(selected.iter().map(|(k, v)| (k.clone(), v.clone())));
    Some(merged)
}

fn parse(contents: &str) -> HashMap<String, HashMap<String, String>> {
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current: Option<String> = None;

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.trim().to_string();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }
        let (Some(section), Some((key, value))) = (current.as_ref(), line.split_once('=')) else {
            continue;
        };
        sections
            .entry(section.clone())
            .or_default()
            .insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
    }

    sections
}
