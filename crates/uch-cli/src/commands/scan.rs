use std::process::ExitCode;

use anyhow::Context;
use uch_checks::{Scope, run_checks_with};
use uch_client::{SnapshotCatalog, UnityCatalogClient};
use uch_config::HygieneConfig;
use uch_core::{Finding, MetadataAccessor, Severity};
use uch_report::ReportSummary;

use crate::cli::{OutputFormat, ScanArgs};
use crate::output;
use crate::progress::Progress;

/// Exit status when findings reach the `--fail-on` threshold.
const FINDINGS_EXIT_CODE: u8 = 2;

/// Handle `uch scan`.
pub fn handle(args: &ScanArgs, mut config: HygieneConfig, format: OutputFormat) -> anyhow::Result<ExitCode> {
    apply_args(&mut config, args);

    let selection = config.scan.selected_checks()?;
    let scope = Scope::new(config.scan.catalog.as_deref(), config.scan.schema.as_deref());
    let accessor = build_accessor(args, &config)?;

    tracing::debug!(
        catalog = ?scope.catalog_filter(),
        schema = ?scope.schema_filter(),
        checks = selection.len(),
        "starting scan"
    );

    let progress = Progress::spinner("scanning catalog metadata");
    let findings = match run_checks_with(accessor.as_ref(), &scope, &selection, |check| {
        progress.set_message(&format!("running {check}"));
    }) {
        Ok(findings) => {
            progress.finish_clear();
            findings
        }
        Err(error) => {
            progress.finish_err("scan failed");
            return Err(error).context("failed to list catalogs");
        }
    };

    let mut stdout = std::io::stdout().lock();
    output::write_report(&findings, format, &mut stdout)?;

    if exceeds_threshold(&findings, args.fail_on) {
        return Ok(ExitCode::from(FINDINGS_EXIT_CODE));
    }
    Ok(ExitCode::SUCCESS)
}

/// Scan flags override the configured scope and check selection.
fn apply_args(config: &mut HygieneConfig, args: &ScanArgs) {
    if args.catalog.is_some() {
        config.scan.catalog.clone_from(&args.catalog);
    }
    if args.schema.is_some() {
        config.scan.schema.clone_from(&args.schema);
    }
    if !args.checks.is_empty() {
        config.scan.checks.clone_from(&args.checks);
    }
}

fn build_accessor(args: &ScanArgs, config: &HygieneConfig) -> anyhow::Result<Box<dyn MetadataAccessor>> {
    if let Some(path) = &args.snapshot {
        let snapshot = SnapshotCatalog::from_path(path)
            .with_context(|| format!("failed to load snapshot {}", path.display()))?;
        return Ok(Box::new(snapshot));
    }

    let client = UnityCatalogClient::from_config(&config.workspace).context(
        "no workspace connection: set DATABRICKS_HOST and DATABRICKS_TOKEN, \
         pass --host/--profile, or scan a file with --snapshot",
    )?;
    Ok(Box::new(client))
}

fn exceeds_threshold(findings: &[Finding], threshold: Option<Severity>) -> bool {
    threshold.is_some_and(|threshold| ReportSummary::from_findings(findings).at_least(threshold) > 0)
}
