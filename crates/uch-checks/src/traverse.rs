//! Catalog → schema → table traversal shared by the checks.
//!
//! Only the top-level catalog listing can fail a traversal. A failed schema or
//! table listing skips that one branch and the walk continues with its
//! siblings. Output order is the accessor's listing order.

use uch_core::{AccessError, CatalogRef, MetadataAccessor, SchemaRef, TableRef};

/// A schema together with the catalog it was listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedSchema {
    pub catalog: String,
    pub schema: SchemaRef,
}

impl ScopedSchema {
    /// `catalog.schema`
    #[must_use]
    pub fn full_name(&self) -> String {
        self.schema.full_name(&self.catalog)
    }
}

/// A listed table together with its catalog and schema names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedTable {
    pub catalog: String,
    pub schema: String,
    pub table: TableRef,
}

impl ScopedTable {
    /// `catalog.schema.table`
    #[must_use]
    pub fn full_name(&self) -> String {
        self.table.full_name(&self.catalog, &self.schema)
    }
}

/// Catalogs matching the scope's catalog filter.
///
/// # Errors
///
/// Propagates a failure of the top-level catalog listing.
pub fn scoped_catalogs<A>(accessor: &A, scope: &crate::Scope) -> Result<Vec<CatalogRef>, AccessError>
where
    A: MetadataAccessor + ?Sized,
{
    Ok(accessor
        .list_catalogs()?
        .into_iter()
        .filter(|catalog| scope.matches_catalog(&catalog.name))
        .collect())
}

/// Schemas of every catalog matching the catalog filter.
///
/// The schema filter is not applied here. Catalogs whose schemas cannot be
/// listed are skipped.
///
/// # Errors
///
/// Propagates a failure of the top-level catalog listing.
pub fn scoped_schemas<A>(accessor: &A, scope: &crate::Scope) -> Result<Vec<ScopedSchema>, AccessError>
where
    A: MetadataAccessor + ?Sized,
{
    let mut out = Vec::new();
    for catalog in scoped_catalogs(accessor, scope)? {
        let schemas = match accessor.list_schemas(&catalog.name) {
            Ok(schemas) => schemas,
            Err(error) => {
                tracing::debug!(catalog = %catalog.name, %error, "skipping catalog: schema listing failed");
                continue;
            }
        };
        out.extend(schemas.into_iter().map(|schema| ScopedSchema {
            catalog: catalog.name.clone(),
            schema,
        }));
    }
    Ok(out)
}

/// Every table under the scope, with both filters applied.
///
/// Catalogs and schemas that cannot be listed are skipped.
///
/// # Errors
///
/// Propagates a failure of the top-level catalog listing.
pub fn scoped_tables<A>(accessor: &A, scope: &crate::Scope) -> Result<Vec<ScopedTable>, AccessError>
where
    A: MetadataAccessor + ?Sized,
{
    let mut out = Vec::new();
    for scoped in scoped_schemas(accessor, scope)? {
        if !scope.matches_schema(&scoped.schema.name) {
            continue;
        }
        let tables = match accessor.list_tables(&scoped.catalog, &scoped.schema.name) {
            Ok(tables) => tables,
            Err(error) => {
                tracing::debug!(schema = %scoped.full_name(), %error, "skipping schema: table listing failed");
                continue;
            }
        };
        out.extend(tables.into_iter().map(|table| ScopedTable {
            catalog: scoped.catalog.clone(),
            schema: scoped.schema.name.clone(),
            table,
        }));
    }
    Ok(out)
}
