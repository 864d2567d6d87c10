//! The six hygiene checks.
//!
//! Each check takes the accessor and a [`Scope`] and returns its findings in
//! traversal order. `Err` only ever carries a failure of the top-level
//! catalog listing; narrower failures skip the affected branch.

use uch_core::{AccessError, CheckKind, Finding, MetadataAccessor};

use crate::Scope;
use crate::traverse::{scoped_catalogs, scoped_schemas, scoped_tables};

/// Schemas with this name prefix are system schemas and never flagged as empty.
pub const SYSTEM_SCHEMA_PREFIX: &str = "information_schema";

/// WARNING for every catalog without a description. Not scoped.
///
/// # Errors
///
/// Propagates a failure of the catalog listing.
pub fn check_catalog_comments<A>(accessor: &A) -> Result<Vec<Finding>, AccessError>
where
    A: MetadataAccessor + ?Sized,
{
    Ok(scoped_catalogs(accessor, &Scope::all())?
        .into_iter()
        .filter(|catalog| !catalog.has_comment())
        .map(|catalog| {
            let message = format!("Catalog '{}' has no description", catalog.name);
            Finding::new(CheckKind::CatalogComment, catalog.name, message)
        })
        .collect())
}

/// WARNING for every schema without a description. Uses the catalog filter only.
///
/// # Errors
///
/// Propagates a failure of the catalog listing.
pub fn check_schema_comments<A>(accessor: &A, scope: &Scope) -> Result<Vec<Finding>, AccessError>
where
    A: MetadataAccessor + ?Sized,
{
    Ok(scoped_schemas(accessor, scope)?
        .into_iter()
        .filter(|scoped| !scoped.schema.has_comment())
        .map(|scoped| {
            let full_name = scoped.full_name();
            let message = format!("Schema '{full_name}' has no description");
            Finding::new(CheckKind::SchemaComment, full_name, message)
        })
        .collect())
}

/// WARNING for every table without a description.
///
/// # Errors
///
/// Propagates a failure of the catalog listing.
pub fn check_table_comments<A>(accessor: &A, scope: &Scope) -> Result<Vec<Finding>, AccessError>
where
    A: MetadataAccessor + ?Sized,
{
    Ok(scoped_tables(accessor, scope)?
        .into_iter()
        .filter(|scoped| !scoped.table.has_comment())
        .map(|scoped| {
            let full_name = scoped.full_name();
            let message = format!("Table '{full_name}' has no description");
            Finding::new(CheckKind::TableComment, full_name, message)
        })
        .collect())
}

/// One INFO per table that has uncommented columns, listing them under
/// `details.columns`. Tables that cannot be fetched are skipped.
///
/// # Errors
///
/// Propagates a failure of the catalog listing.
pub fn check_column_comments<A>(accessor: &A, scope: &Scope) -> Result<Vec<Finding>, AccessError>
where
    A: MetadataAccessor + ?Sized,
{
    let mut findings = Vec::new();
    for scoped in scoped_tables(accessor, scope)? {
        let full_name = scoped.full_name();
        let table = match accessor.get_table(&full_name) {
            Ok(table) => table,
            Err(error) => {
                tracing::debug!(table = %full_name, %error, "skipping table: fetch failed");
                continue;
            }
        };

        let missing = table.uncommented_columns();
        if missing.is_empty() {
            continue;
        }
        let message = format!(
            "Table '{full_name}' has {} columns without descriptions",
            missing.len()
        );
        findings.push(
            Finding::new(CheckKind::ColumnComment, full_name, message).with_detail("columns", missing),
        );
    }
    Ok(findings)
}

/// WARNING for every table without an owner.
///
/// # Errors
///
/// Propagates a failure of the catalog listing.
pub fn check_table_owners<A>(accessor: &A, scope: &Scope) -> Result<Vec<Finding>, AccessError>
where
    A: MetadataAccessor + ?Sized,
{
    Ok(scoped_tables(accessor, scope)?
        .into_iter()
        .filter(|scoped| !scoped.table.has_owner())
        .map(|scoped| {
            let full_name = scoped.full_name();
            let message = format!("Table '{full_name}' has no owner assigned");
            Finding::new(CheckKind::TableOwner, full_name, message)
        })
        .collect())
}

/// INFO for every non-system schema with no tables. Uses the catalog filter
/// only; schemas whose tables cannot be listed are skipped.
///
/// # Errors
///
/// Propagates a failure of the catalog listing.
pub fn check_empty_schemas<A>(accessor: &A, scope: &Scope) -> Result<Vec<Finding>, AccessError>
where
    A: MetadataAccessor + ?Sized,
{
    let mut findings = Vec::new();
    for scoped in scoped_schemas(accessor, scope)? {
        if scoped.schema.name.starts_with(SYSTEM_SCHEMA_PREFIX) {
            continue;
        }
        let full_name = scoped.full_name();
        match accessor.list_tables(&scoped.catalog, &scoped.schema.name) {
            Ok(tables) if tables.is_empty() => {
                let message = format!("Schema '{full_name}' contains no tables");
                findings.push(Finding::new(CheckKind::EmptySchema, full_name, message));
            }
            Ok(_) => {}
            Err(error) => {
                tracing::debug!(schema = %full_name, %error, "skipping schema: table listing failed");
            }
        }
    }
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uch_client::SnapshotCatalog;
    use uch_core::{CatalogRef, ColumnRef, ObjectKind, SchemaRef, Severity, TableRef};

    fn object_names(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.object_name.as_str()).collect()
    }

    #[test]
    fn no_catalog_findings_when_all_commented() {
        let accessor = SnapshotCatalog::new()
            .with_catalog(CatalogRef::new("my_catalog").with_comment("well documented"));
        assert!(check_catalog_comments(&accessor).unwrap().is_empty());
    }

    #[test]
    fn flags_catalog_without_or_with_empty_comment() {
        let accessor = SnapshotCatalog::new()
            .with_catalog(CatalogRef::new("undocumented"))
            .with_catalog(CatalogRef::new("empty").with_comment(""))
            .with_catalog(CatalogRef::new("documented").with_comment("ok"));
        let findings = check_catalog_comments(&accessor).unwrap();

        assert_eq!(object_names(&findings), vec!["undocumented", "empty"]);
        let first = &findings[0];
        assert_eq!(first.check, CheckKind::CatalogComment);
        assert_eq!(first.severity, Severity::Warning);
        assert_eq!(first.object_kind, ObjectKind::Catalog);
        assert_eq!(first.message, "Catalog 'undocumented' has no description");
    }

    #[test]
    fn flags_schema_without_comment() {
        let accessor = SnapshotCatalog::new()
            .with_catalog(CatalogRef::new("my_catalog").with_comment("c"))
            .with_schema("my_catalog", SchemaRef::new("documented").with_comment("s"))
            .with_schema("my_catalog", SchemaRef::new("undocumented_schema"));
        let findings = check_schema_comments(&accessor, &Scope::all()).unwrap();
        assert_eq!(object_names(&findings), vec!["my_catalog.undocumented_schema"]);
        assert_eq!(findings[0].object_kind, ObjectKind::Schema);
    }

    #[test]
    fn schema_comments_respect_catalog_filter() {
        let accessor = SnapshotCatalog::new()
            .with_schema("catalog_1", SchemaRef::new("undocumented_schema"))
            .with_schema("catalog_2", SchemaRef::new("undocumented_schema"));
        let findings = check_schema_comments(&accessor, &Scope::catalog("catalog_1")).unwrap();
        assert_eq!(object_names(&findings), vec!["catalog_1.undocumented_schema"]);
    }

    #[test]
    fn flags_table_without_comment() {
        let accessor = SnapshotCatalog::new()
            .with_table("my_catalog", "my_schema", TableRef::new("undocumented_table"))
            .with_table(
                "my_catalog",
                "my_schema",
                TableRef::new("documented").with_comment("ok"),
            );
        let findings = check_table_comments(&accessor, &Scope::all()).unwrap();
        assert_eq!(
            object_names(&findings),
            vec!["my_catalog.my_schema.undocumented_table"]
        );
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn column_finding_lists_only_uncommented_columns() {
        let accessor = SnapshotCatalog::new().with_table(
            "my_catalog",
            "my_schema",
            TableRef::new("my_table")
                .with_comment("Table has comment")
                .with_columns(vec![
                    ColumnRef::new("documented_col").with_comment("documented"),
                    ColumnRef::new("undocumented_col"),
                ]),
        );
        let findings = check_column_comments(&accessor, &Scope::all()).unwrap();

        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.check, CheckKind::ColumnComment);
        assert_eq!(finding.severity, Severity::Info);
        assert_eq!(
            finding.details["columns"],
            serde_json::json!(["undocumented_col"])
        );
        assert_eq!(
            finding.message,
            "Table 'my_catalog.my_schema.my_table' has 1 columns without descriptions"
        );
    }

    #[test]
    fn column_check_skips_unfetchable_tables() {
        let accessor = SnapshotCatalog::new()
            .with_table("c", "s", TableRef::new("locked").with_columns(vec![ColumnRef::new("a")]))
            .with_table("c", "s", TableRef::new("open").with_columns(vec![ColumnRef::new("b")]))
            .deny_table("c.s.locked");
        let findings = check_column_comments(&accessor, &Scope::all()).unwrap();
        assert_eq!(object_names(&findings), vec!["c.s.open"]);
    }

    #[test]
    fn column_check_ignores_tables_without_columns() {
        let accessor = SnapshotCatalog::new()
            .with_table("c", "s", TableRef::new("no_columns"))
            .with_table("c", "s", TableRef::new("empty_columns").with_columns(vec![]));
        assert!(check_column_comments(&accessor, &Scope::all()).unwrap().is_empty());
    }

    #[test]
    fn no_owner_findings_when_assigned() {
        let accessor = SnapshotCatalog::new().with_table(
            "my_catalog",
            "my_schema",
            TableRef::new("my_table").with_owner("data_team@company.com"),
        );
        assert!(check_table_owners(&accessor, &Scope::all()).unwrap().is_empty());
    }

    #[test]
    fn flags_table_without_owner() {
        let accessor = SnapshotCatalog::new()
            .with_table("my_catalog", "my_schema", TableRef::new("orphan_table"))
            .with_table("my_catalog", "my_schema", TableRef::new("blank_owner").with_owner(""));
        let findings = check_table_owners(&accessor, &Scope::all()).unwrap();
        assert_eq!(
            object_names(&findings),
            vec!["my_catalog.my_schema.orphan_table", "my_catalog.my_schema.blank_owner"]
        );
        assert_eq!(findings[0].check, CheckKind::TableOwner);
        assert_eq!(
            findings[0].message,
            "Table 'my_catalog.my_schema.orphan_table' has no owner assigned"
        );
    }

    #[test]
    fn flags_empty_schema() {
        let accessor = SnapshotCatalog::new()
            .with_schema("my_catalog", SchemaRef::new("empty_schema"))
            .with_table("my_catalog", "full_schema", TableRef::new("t"));
        let findings = check_empty_schemas(&accessor, &Scope::all()).unwrap();
        assert_eq!(object_names(&findings), vec!["my_catalog.empty_schema"]);
        assert_eq!(findings[0].check, CheckKind::EmptySchema);
        assert_eq!(findings[0].severity, Severity::Info);
        assert_eq!(findings[0].message, "Schema 'my_catalog.empty_schema' contains no tables");
    }

    #[test]
    fn skips_information_schema_prefix() {
        let accessor = SnapshotCatalog::new()
            .with_schema("my_catalog", SchemaRef::new("information_schema"))
            .with_schema("my_catalog", SchemaRef::new("information_schema_backup"));
        assert!(check_empty_schemas(&accessor, &Scope::all()).unwrap().is_empty());
    }

    #[test]
    fn empty_schema_check_ignores_schema_filter() {
        let accessor = SnapshotCatalog::new()
            .with_schema("c", SchemaRef::new("a"))
            .with_schema("c", SchemaRef::new("b"));
        let findings = check_empty_schemas(&accessor, &Scope::catalog("c").with_schema("a")).unwrap();
        assert_eq!(object_names(&findings), vec!["c.a", "c.b"]);
    }

    #[test]
    fn empty_schema_check_skips_unlistable_schema() {
        let accessor = SnapshotCatalog::new()
            .with_schema("c", SchemaRef::new("locked"))
            .with_schema("c", SchemaRef::new("empty"))
            .deny_tables("c", "locked");
        let findings = check_empty_schemas(&accessor, &Scope::all()).unwrap();
        assert_eq!(object_names(&findings), vec!["c.empty"]);
    }
}
