use uch_core::{AccessError, CheckKind, Finding, MetadataAccessor};

use crate::Scope;
use crate::checks::{
    check_catalog_comments, check_column_comments, check_empty_schemas, check_schema_comments,
    check_table_comments, check_table_owners,
};

/// Run a single check.
///
/// # Errors
///
/// Propagates a failure of the catalog listing.
pub fn run_check<A>(accessor: &A, scope: &Scope, check: CheckKind) -> Result<Vec<Finding>, AccessError>
where
    A: MetadataAccessor + ?Sized,
{
    let findings = match check {
        CheckKind::CatalogComment => check_catalog_comments(accessor),
        CheckKind::SchemaComment => check_schema_comments(accessor, scope),
        CheckKind::TableComment => check_table_comments(accessor, scope),
        CheckKind::ColumnComment => check_column_comments(accessor, scope),
        CheckKind::TableOwner => check_table_owners(accessor, scope),
        CheckKind::EmptySchema => check_empty_schemas(accessor, scope),
    }?;
    tracing::debug!(check = %check, count = findings.len(), "check complete");
    Ok(findings)
}

/// Run the selected checks and concatenate their findings.
///
/// Checks always run in [`CheckKind::ALL`] order, whatever order `selection`
/// lists them in; each selected check runs once.
///
/// # Errors
///
/// Propagates the first catalog listing failure; no partial result is returned.
pub fn run_checks<A>(
    accessor: &A,
    scope: &Scope,
    selection: &[CheckKind],
) -> Result<Vec<Finding>, AccessError>
where
    A: MetadataAccessor + ?Sized,
{
    run_checks_with(accessor, scope, selection, |_| {})
}

/// [`run_checks`], calling `on_start` before each check runs.
///
/// # Errors
///
/// See [`run_checks`].
pub fn run_checks_with<A, F>(
    accessor: &A,
    scope: &Scope,
    selection: &[CheckKind],
    mut on_start: F,
) -> Result<Vec<Finding>, AccessError>
where
    A: MetadataAccessor + ?Sized,
    F: FnMut(CheckKind),
{
    let mut findings = Vec::new();
    for check in CheckKind::ALL {
        if !selection.contains(&check) {
            continue;
        }
        on_start(check);
        findings.extend(run_check(accessor, scope, check)?);
    }
    Ok(findings)
}

/// Run every check in fixed order and concatenate their findings.
///
/// # Errors
///
/// Propagates a failure of the catalog listing.
pub fn run_all_checks<A>(accessor: &A, scope: &Scope) -> Result<Vec<Finding>, AccessError>
where
    A: MetadataAccessor + ?Sized,
{
    run_checks(accessor, scope, &CheckKind::ALL)
}
