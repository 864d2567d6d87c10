use clap::ValueEnum;
use uch_config::ReportFormat;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Console,
    Json,
    Raw,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Console => Self::Console,
            ReportFormat::Json => Self::Json,
            ReportFormat::Raw => Self::Raw,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug, Default)]
pub struct GlobalFlags {
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub verbose: bool,
    pub profile: Option<String>,
    pub host: Option<String>,
}

impl GlobalFlags {
    /// `--format` when given, otherwise the configured format.
    #[must_use]
    pub fn resolve_format(&self, configured: ReportFormat) -> OutputFormat {
        self.format.unwrap_or_else(|| configured.into())
    }
}
