use serde::Serialize;
use uch_core::{CheckKind, ObjectKind, Severity};

use crate::cli::OutputFormat;
use crate::output::{self, TableRow};

#[derive(Debug, Serialize)]
struct CheckInfo {
    id: CheckKind,
    severity: Severity,
    object_type: ObjectKind,
    description: &'static str,
}

impl TableRow for CheckInfo {
    const HEADERS: &'static [&'static str] = &["id", "severity", "object", "description"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.severity.to_string(),
            self.object_type.to_string(),
            self.description.to_string(),
        ]
    }
}

fn catalog() -> Vec<CheckInfo> {
    CheckKind::ALL
        .into_iter()
        .map(|check| CheckInfo {
            id: check,
            severity: check.severity(),
            object_type: check.object_kind(),
            description: check.description(),
        })
        .collect()
}

/// Handle `uch checks`.
pub fn handle(format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", output::render_rows(&catalog(), format)?);
    Ok(())
}
