//! Human-readable report grouped by severity.

use std::io::{self, Write};

use serde_json::Value;
use uch_core::{Finding, Severity};

use crate::json::ReportSummary;

const RULE_WIDTH: usize = 60;
const GROUP_RULE_WIDTH: usize = 40;

/// Detail lists longer than this are cut with a `... (+N more)` suffix.
pub const MAX_LIST_ITEMS: usize = 5;

const fn symbol(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "✗",
        Severity::Warning => "⚠",
        Severity::Info => "ℹ",
    }
}

/// Writes findings as console text.
///
/// Groups are printed ERROR, WARNING, INFO; empty groups are omitted and
/// findings keep their input order within a group.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Write the report to `out`.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn report<W: Write>(&self, findings: &[Finding], out: &mut W) -> io::Result<()> {
        for line in report_lines(findings) {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }

    /// The report as a string, exactly as [`report`](Self::report) writes it.
    #[must_use]
    pub fn render(&self, findings: &[Finding]) -> String {
        report_lines(findings)
            .into_iter()
            .map(|line| line + "\n")
            .collect()
    }
}

fn report_lines(findings: &[Finding]) -> Vec<String> {
    let mut lines = vec![
        format!("\n{}", "=".repeat(RULE_WIDTH)),
        "UNITY CATALOG HYGIENE CHECK".to_string(),
        "=".repeat(RULE_WIDTH),
    ];

    if findings.is_empty() {
        lines.push("\n✓ All checks passed - no issues found!\n".to_string());
        return lines;
    }

    for severity in Severity::DISPLAY_ORDER {
        let group: Vec<&Finding> = findings.iter().filter(|f| f.severity == severity).collect();
        if group.is_empty() {
            continue;
        }

        lines.push(format!(
            "\n{} ({})",
            severity.as_str().to_ascii_uppercase(),
            group.len()
        ));
        lines.push("-".repeat(GROUP_RULE_WIDTH));

        for finding in group {
            lines.push(format!(
                "\n{} [{}] {}",
                symbol(severity),
                finding.object_kind,
                finding.object_name
            ));
            lines.push(format!("  {}", finding.message));
            for (key, value) in &finding.details {
                lines.push(format!("  {key}: {}", detail_text(value)));
            }
        }
    }

    let summary = ReportSummary::from_findings(findings);
    lines.push(format!("\n{}", "-".repeat(RULE_WIDTH)));
    lines.push(format!(
        "SUMMARY: {} errors, {} warnings, {} info",
        summary.errors, summary.warnings, summary.info
    ));
    lines.push(format!("{}\n", "=".repeat(RULE_WIDTH)));
    lines
}

fn detail_text(value: &Value) -> String {
    match value {
        Value::Array(items) if items.len() > MAX_LIST_ITEMS => {
            let shown = join_items(&items[..MAX_LIST_ITEMS]);
            format!("{shown}... (+{} more)", items.len() - MAX_LIST_ITEMS)
        }
        Value::Array(items) => join_items(items),
        scalar => scalar_text(scalar),
    }
}

fn join_items(items: &[Value]) -> String {
    items.iter().map(scalar_text).collect::<Vec<_>>().join(", ")
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use uch_core::CheckKind;

    #[test]
    fn short_list_is_joined() {
        assert_eq!(detail_text(&json!(["a", "b"])), "a, b");
    }

    #[test]
    fn exactly_five_items_are_not_truncated() {
        assert_eq!(detail_text(&json!(["a", "b", "c", "d", "e"])), "a, b, c, d, e");
    }

    #[test]
    fn long_list_is_truncated_after_five() {
        let value = json!(["c1", "c2", "c3", "c4", "c5", "c6", "c7"]);
        assert_eq!(detail_text(&value), "c1, c2, c3, c4, c5... (+2 more)");
    }

    #[test]
    fn scalars_render_plainly() {
        assert_eq!(detail_text(&json!("text")), "text");
        assert_eq!(detail_text(&json!(3)), "3");
        assert_eq!(detail_text(&json!(true)), "true");
    }

    #[test]
    fn report_matches_render() {
        let findings = vec![Finding::new(CheckKind::TableOwner, "c.s.t", "no owner")];
        let mut buffer = Vec::new();
        ConsoleReporter::new().report(&findings, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            ConsoleReporter::new().render(&findings)
        );
    }
}
