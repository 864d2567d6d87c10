//! JSON report document.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uch_core::{Finding, Severity};

use crate::error::ReportError;

/// Finding counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportSummary {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

impl ReportSummary {
    #[must_use]
    pub fn from_findings(findings: &[Finding]) -> Self {
        findings.iter().fold(Self::default(), |mut summary, finding| {
            summary.total += 1;
            match finding.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Info => summary.info += 1,
            }
            summary
        })
    }

    /// Findings at or above `threshold`.
    #[must_use]
    pub const fn at_least(&self, threshold: Severity) -> usize {
        match threshold {
            Severity::Error => self.errors,
            Severity::Warning => self.errors + self.warnings,
            Severity::Info => self.total,
        }
    }
}

/// Top-level JSON report: a summary plus every finding in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportDocument {
    pub summary: ReportSummary,
    pub results: Vec<Finding>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn to_document(&self, findings: &[Finding]) -> ReportDocument {
        ReportDocument {
            summary: ReportSummary::from_findings(findings),
            results: findings.to_vec(),
        }
    }

    /// Pretty-printed report (2-space indent).
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialize`] if serialization fails.
    pub fn report(&self, findings: &[Finding]) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(&self.to_document(findings))?)
    }

    /// Single-line report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialize`] if serialization fails.
    pub fn report_compact(&self, findings: &[Finding]) -> Result<String, ReportError> {
        Ok(serde_json::to_string(&self.to_document(findings))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use uch_core::CheckKind;

    fn findings() -> Vec<Finding> {
        vec![
            Finding::new(CheckKind::CatalogComment, "c1", "Catalog 'c1' has no description"),
            Finding::new(CheckKind::EmptySchema, "c1.s1", "Schema 'c1.s1' contains no tables"),
            Finding::new(CheckKind::TableOwner, "c1.s1.t1", "Table 'c1.s1.t1' has no owner assigned"),
        ]
    }

    #[test]
    fn summary_counts_by_severity() {
        let summary = ReportSummary::from_findings(&findings());
        assert_eq!(
            summary,
            ReportSummary {
                total: 3,
                errors: 0,
                warnings: 2,
                info: 1,
            }
        );
    }

    #[rstest]
    #[case(Severity::Info, 3)]
    #[case(Severity::Warning, 2)]
    #[case(Severity::Error, 0)]
    fn at_least_threshold(#[case] threshold: Severity, #[case] expected: usize) {
        let summary = ReportSummary::from_findings(&findings());
        assert_eq!(summary.at_least(threshold), expected);
    }

    #[test]
    fn document_preserves_input_order() {
        let document = JsonReporter::new().to_document(&findings());
        let names: Vec<_> = document.results.iter().map(|f| f.object_name.as_str()).collect();
        assert_eq!(names, vec!["c1", "c1.s1", "c1.s1.t1"]);
    }

    #[test]
    fn pretty_report_uses_two_space_indent() {
        let out = JsonReporter::new().report(&findings()).unwrap();
        assert!(out.starts_with("{\n  \"summary\": {\n    \"total\": 3,"));
    }

    #[test]
    fn compact_report_is_single_line() {
        let out = JsonReporter::new().report_compact(&findings()).unwrap();
        assert!(!out.contains('\n'));
        let parsed: ReportDocument = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.results, findings());
    }

    #[test]
    fn empty_report_has_zero_summary() {
        let value: serde_json::Value =
            serde_json::from_str(&JsonReporter::new().report(&[]).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "summary": {"total": 0, "errors": 0, "warnings": 0, "info": 0},
                "results": []
            })
        );
    }
}
