use std::io::Write;

use serde::Serialize;
use uch_core::Finding;
use uch_report::{ConsoleReporter, JsonReporter};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A record that can be shown as one table row in console output.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Render a list of records in the requested format.
pub fn render_rows<T: Serialize + TableRow>(rows: &[T], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Console => {
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            let cells = rows.iter().map(TableRow::cells).collect::<Vec<_>>();
            Ok(table::render_table(T::HEADERS, &cells, options))
        }
        OutputFormat::Json | OutputFormat::Raw => render_json(rows, format),
    }
}

/// JSON for both JSON formats; console output of a JSON-only value is pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Console | OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Write a scan report to `out`.
pub fn write_report<W: Write>(findings: &[Finding], format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Console => ConsoleReporter::new().report(findings, out)?,
        OutputFormat::Json => writeln!(out, "{}", JsonReporter::new().report(findings)?)?,
        OutputFormat::Raw => writeln!(out, "{}", JsonReporter::new().report_compact(findings)?)?,
    }
    Ok(())
}
