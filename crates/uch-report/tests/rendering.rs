//! Report rendering against the findings of a fully undocumented workspace.

use pretty_assertions::assert_eq;
use uch_core::{CheckKind, Finding, Severity};
use uch_report::{ConsoleReporter, JsonReporter, ReportError, report_schema, validate_report};

fn scan_findings() -> Vec<Finding> {
    vec![
        Finding::new(CheckKind::CatalogComment, "c1", "Catalog 'c1' has no description"),
        Finding::new(CheckKind::SchemaComment, "c1.s1", "Schema 'c1.s1' has no description"),
        Finding::new(CheckKind::TableComment, "c1.s1.t1", "Table 'c1.s1.t1' has no description"),
        Finding::new(
            CheckKind::ColumnComment,
            "c1.s1.t1",
            "Table 'c1.s1.t1' has 1 columns without descriptions",
        )
        .with_detail("columns", vec!["col_a"]),
        Finding::new(CheckKind::TableOwner, "c1.s1.t1", "Table 'c1.s1.t1' has no owner assigned"),
        Finding::new(CheckKind::EmptySchema, "c1.s1", "Schema 'c1.s1' contains no tables"),
    ]
}

fn header() -> String {
    let rule = "=".repeat(60);
    format!("\n{rule}\nUNITY CATALOG HYGIENE CHECK\n{rule}\n")
}

fn footer(errors: usize, warnings: usize, info: usize) -> String {
    format!(
        "\n{}\nSUMMARY: {errors} errors, {warnings} warnings, {info} info\n{}\n\n",
        "-".repeat(60),
        "=".repeat(60)
    )
}

#[test]
fn console_groups_warnings_before_info() {
    let group_rule = "-".repeat(40);
    let expected = [
        header(),
        format!("\nWARNING (4)\n{group_rule}\n"),
        "\n⚠ [catalog] c1\n  Catalog 'c1' has no description\n".to_string(),
        "\n⚠ [schema] c1.s1\n  Schema 'c1.s1' has no description\n".to_string(),
        "\n⚠ [table] c1.s1.t1\n  Table 'c1.s1.t1' has no description\n".to_string(),
        "\n⚠ [table] c1.s1.t1\n  Table 'c1.s1.t1' has no owner assigned\n".to_string(),
        format!("\nINFO (2)\n{group_rule}\n"),
        "\nℹ [table] c1.s1.t1\n  Table 'c1.s1.t1' has 1 columns without descriptions\n  columns: col_a\n"
            .to_string(),
        "\nℹ [schema] c1.s1\n  Schema 'c1.s1' contains no tables\n".to_string(),
        footer(0, 4, 2),
    ]
    .concat();

    assert_eq!(ConsoleReporter::new().render(&scan_findings()), expected);
}

#[test]
fn console_empty_report_passes() {
    let expected = format!("{}\n✓ All checks passed - no issues found!\n\n", header());
    assert_eq!(ConsoleReporter::new().render(&[]), expected);
}

#[test]
fn console_prints_error_group_first() {
    let mut error = Finding::new(CheckKind::TableOwner, "c.s.t", "escalated");
    error.severity = Severity::Error;
    let findings = vec![
        Finding::new(CheckKind::EmptySchema, "c.s", "empty"),
        error,
    ];

    let out = ConsoleReporter::new().render(&findings);
    let error_at = out.find("ERROR (1)").unwrap();
    let info_at = out.find("INFO (1)").unwrap();
    assert!(error_at < info_at);
    assert!(out.contains("\n✗ [table] c.s.t\n"));
    assert!(!out.contains("WARNING ("));
    assert!(out.ends_with(&footer(1, 0, 1)));
}

#[test]
fn console_truncates_long_column_lists() {
    let columns: Vec<String> = (1..=7).map(|i| format!("col_{i}")).collect();
    let finding = Finding::new(
        CheckKind::ColumnComment,
        "c.s.wide",
        "Table 'c.s.wide' has 7 columns without descriptions",
    )
    .with_detail("columns", columns);

    let out = ConsoleReporter::new().render(&[finding]);
    assert!(out.contains("\n  columns: col_1, col_2, col_3, col_4, col_5... (+2 more)\n"));
}

#[test]
fn json_report_conforms_to_schema() {
    let out = JsonReporter::new().report(&scan_findings()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    validate_report(&value).unwrap();
    assert_eq!(value["summary"]["total"], 6);
    assert_eq!(value["summary"]["warnings"], 4);
    assert_eq!(value["summary"]["info"], 2);
    assert_eq!(value["results"][3]["check_name"], "column_comment");
    assert_eq!(value["results"][3]["details"]["columns"][0], "col_a");
    assert_eq!(value["results"][0]["details"], serde_json::json!({}));
}

#[test]
fn schema_rejects_unknown_severity() {
    let mut value = serde_json::to_value(JsonReporter::new().to_document(&scan_findings())).unwrap();
    value["results"][0]["severity"] = serde_json::json!("critical");

    let err = validate_report(&value).unwrap_err();
    assert!(matches!(err, ReportError::ValidationFailed { .. }));
}

#[test]
fn schema_describes_document_fields() {
    let schema = report_schema().unwrap();
    let properties = schema["properties"].as_object().unwrap();
    assert!(properties.contains_key("summary"));
    assert!(properties.contains_key("results"));
}
