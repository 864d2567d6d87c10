use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, ScanArgs};

/// Top-level CLI parser for the `uch` binary.
#[derive(Debug, Parser)]
#[command(
    name = "uch",
    version,
    about = "uchygiene - Unity Catalog metadata hygiene checks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: console, json, raw (defaults to the configured format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Databricks config profile to authenticate with
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Workspace URL (overrides configuration)
    #[arg(long, global = true)]
    pub host: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            profile: self.profile.clone(),
            host: self.host.clone(),
        }
    }
}
