//! Default scan scope and check selection.

use serde::{Deserialize, Deserializer, Serialize};
use uch_core::CheckKind;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Restrict scans to this catalog (exact match).
    #[serde(default)]
    pub catalog: Option<String>,

    /// Restrict table traversal to schemas with this name (exact match).
    #[serde(default)]
    pub schema: Option<String>,

    /// Check identifiers to run. Empty runs every check.
    ///
    /// Accepts a list, or a single string holding one identifier or a
    /// comma-separated set (the form environment variables take).
    #[serde(default, deserialize_with = "one_or_many")]
    pub checks: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<String>),
    One(String),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(ids) => ids,
        OneOrMany::One(joined) => joined.split(',').map(str::to_string).collect(),
    };
    Ok(ids
        .into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect())
}

impl ScanConfig {
    /// Parse `checks` into check kinds. An empty list selects every check.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown identifier.
    pub fn selected_checks(&self) -> Result<Vec<CheckKind>, ConfigError> {
        if self.checks.is_empty() {
            return Ok(CheckKind::ALL.to_vec());
        }
        self.checks
            .iter()
            .map(|id| {
                id.parse::<CheckKind>()
                    .map_err(|error| ConfigError::InvalidValue {
                        field: "scan.checks".to_string(),
                        reason: error.to_string(),
                    })
            })
            .collect()
    }
}
