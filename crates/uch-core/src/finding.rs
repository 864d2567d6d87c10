use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CheckKind, ObjectKind, Severity};

/// One reported hygiene issue.
///
/// Severity and object kind are derived from the check that produced it.
/// `details` carries structured context, e.g. `{"columns": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    #[serde(rename = "check_name")]
    pub check: CheckKind,
    pub severity: Severity,
    #[serde(rename = "object_type")]
    pub object_kind: ObjectKind,
    pub object_name: String,
    pub message: String,
    #[serde(default)]
    pub details: BTreeMap<String, serde_json::Value>,
}

impl Finding {
    pub fn new(check: CheckKind, object_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check,
            severity: check.severity(),
            object_kind: check.object_kind(),
            object_name: object_name.into(),
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// First dotted segment of the object name.
    #[must_use]
    pub fn catalog(&self) -> &str {
        self.object_name
            .split('.')
            .next()
            .unwrap_or(&self.object_name)
    }
}
