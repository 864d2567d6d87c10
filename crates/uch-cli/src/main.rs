use std::process::ExitCode;

use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;
mod progress;
mod ui;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("uch error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    uch_config::HygieneConfig::load_dotenv();
    init_tracing(flags.quiet, flags.verbose)?;

    let config = bootstrap::load_config(&flags)?;
    let format = flags.resolve_format(config.output.format);
    ui::init(&flags, format);

    commands::dispatch(cli.command, config, format)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let directive = filter_directive(quiet, verbose, std::env::var("UCHYGIENE_LOG").ok());
    let filter = tracing_subscriber::EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// `--quiet` and `--verbose` beat `UCHYGIENE_LOG`, which beats the `warn` default.
fn filter_directive(quiet: bool, verbose: bool, env: Option<String>) -> String {
    if quiet {
        "error".to_string()
    } else if verbose {
        "debug".to_string()
    } else {
        env.filter(|directive| !directive.trim().is_empty())
            .unwrap_or_else(|| "warn".to_string())
    }
}
