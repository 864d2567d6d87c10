//! The read-only metadata contract the check engine traverses.

use crate::errors::AccessError;
use crate::model::{CatalogRef, SchemaRef, TableRef};

/// Blocking, read-only access to a hierarchical metadata catalog.
///
/// Each call returns the complete listing in the service's order, or fails
/// with an [`AccessError`]. Implementations own credentials, endpoints and
/// timeouts.
pub trait MetadataAccessor {
    /// All catalogs visible to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when the listing cannot be fetched.
    fn list_catalogs(&self) -> Result<Vec<CatalogRef>, AccessError>;

    /// Schemas within `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when the catalog is missing or inaccessible.
    fn list_schemas(&self, catalog: &str) -> Result<Vec<SchemaRef>, AccessError>;

    /// Tables within `catalog.schema`, without columns.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when the schema is missing or inaccessible.
    fn list_tables(&self, catalog: &str, schema: &str) -> Result<Vec<TableRef>, AccessError>;

    /// A single table by its `catalog.schema.table` name, with columns.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when the table is missing or inaccessible.
    fn get_table(&self, full_name: &str) -> Result<TableRef, AccessError>;
}

impl<A: MetadataAccessor + ?Sized> MetadataAccessor for &A {
    fn list_catalogs(&self) -> Result<Vec<CatalogRef>, AccessError> {
        (**self).list_catalogs()
    }

    fn list_schemas(&self, catalog: &str) -> Result<Vec<SchemaRef>, AccessError> {
        (**self).list_schemas(catalog)
    }

    fn list_tables(&self, catalog: &str, schema: &str) -> Result<Vec<TableRef>, AccessError> {
        (**self).list_tables(catalog, schema)
    }

    fn get_table(&self, full_name: &str) -> Result<TableRef, AccessError> {
        (**self).get_table(full_name)
    }
}

impl<A: MetadataAccessor + ?Sized> MetadataAccessor for Box<A> {
    fn list_catalogs(&self) -> Result<Vec<CatalogRef>, AccessError> {
        (**self).list_catalogs()
    }

    fn list_schemas(&self, catalog: &str) -> Result<Vec<SchemaRef>, AccessError> {
        (**self).list_schemas(catalog)
    }

    fn list_tables(&self, catalog: &str, schema: &str) -> Result<Vec<TableRef>, AccessError> {
        (**self).list_tables(catalog, schema)
    }

    fn get_table(&self, full_name: &str) -> Result<TableRef, AccessError> {
        (**self).get_table(full_name)
    }
}
