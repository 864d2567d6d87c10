use std::process::ExitCode;

use uch_config::HygieneConfig;

use crate::cli::{Commands, OutputFormat};

pub mod checks;
pub mod scan;
pub mod schema;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    config: HygieneConfig,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Scan(args) => scan::handle(&args, config, format),
        Commands::Checks => checks::handle(format).map(|()| ExitCode::SUCCESS),
        Commands::Schema => schema::handle(format).map(|()| ExitCode::SUCCESS),
    }
}
