//! Report output settings.

use serde::{Deserialize, Serialize};

/// How scan results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Grouped human-readable text.
    #[default]
    Console,
    /// Pretty-printed JSON document.
    Json,
    /// Single-line JSON document.
    Raw,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: ReportFormat,
}
