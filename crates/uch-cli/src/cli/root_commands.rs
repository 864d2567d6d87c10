use std::path::PathBuf;

use clap::{Args, Subcommand};
use uch_core::Severity;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Scan catalog metadata and report hygiene findings.
    Scan(ScanArgs),
    /// List the available checks.
    Checks,
    /// Print the JSON Schema of the JSON report.
    Schema,
}

#[derive(Clone, Debug, Default, Args)]
pub struct ScanArgs {
    /// Only scan this catalog.
    #[arg(long)]
    pub catalog: Option<String>,

    /// Only scan schemas with this name.
    #[arg(long)]
    pub schema: Option<String>,

    /// Check to run (repeatable). Defaults to every check.
    #[arg(long = "check", value_name = "ID")]
    pub checks: Vec<String>,

    /// Scan a JSON snapshot file instead of the live workspace.
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Exit with status 2 when any finding is at or above this severity.
    #[arg(long, value_name = "SEVERITY")]
    pub fail_on: Option<Severity>,
}
