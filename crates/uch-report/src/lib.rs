//! # uch-report
//!
//! Renders hygiene findings for people and for machines.
//!
//! - [`ConsoleReporter`]: text grouped by severity with a summary line
//! - [`JsonReporter`]: a [`ReportDocument`] with per-severity counts
//! - [`report_schema`]: the JSON Schema the JSON report conforms to

mod console;
pub mod error;
mod json;
mod schema;

pub use console::{ConsoleReporter, MAX_LIST_ITEMS};
pub use error::ReportError;
pub use json::{JsonReporter, ReportDocument, ReportSummary};
pub use schema::{report_schema, validate_report};
