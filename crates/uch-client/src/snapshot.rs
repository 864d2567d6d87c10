//! In-memory catalog accessor.
//!
//! A [`SnapshotCatalog`] holds a full catalog tree and answers accessor calls
//! from it. It is loaded from a JSON export for offline scans, or built in
//! code for tests. Access failures can be injected at every traversal level.
//!
//! ```json
//! {
//!   "catalogs": [
//!     {
//!       "name": "prod",
//!       "comment": "Production",
//!       "schemas": [
//!         {
//!           "name": "sales",
//!           "tables": [
//!             { "name": "orders", "owner": "data-eng",
//!               "columns": [{ "name": "id", "comment": "Order id" }] }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uch_core::{AccessError, CatalogRef, MetadataAccessor, SchemaRef, TableRef};

use crate::error::SnapshotError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CatalogNode {
    #[serde(flatten)]
    catalog: CatalogRef,
    #[serde(default)]
    schemas: Vec<SchemaNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SchemaNode {
    #[serde(flatten)]
    schema: SchemaRef,
    #[serde(default)]
    tables: Vec<TableRef>,
}

/// Injected failures, keyed by the scope that fails.
#[derive(Debug, Clone, Default)]
struct Denials {
    catalog_listing: bool,
    schema_listings: HashSet<String>,
    table_listings: HashSet<(String, String)>,
    table_fetches: HashSet<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotCatalog {
    #[serde(default)]
    catalogs: Vec<CatalogNode>,
    #[serde(skip)]
    denials: Denials,
}

impl SnapshotCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the file cannot be read, or
    /// [`SnapshotError::Json`] if it is malformed.
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Serialize the catalog tree (injected failures are not part of it).
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a catalog. Replaces the record of an existing catalog of the same
    /// name, keeping its schemas.
    #[must_use]
    pub fn with_catalog(mut self, catalog: CatalogRef) -> Self {
        match self.catalogs.iter_mut().find(|n| n.catalog.name == catalog.name) {
            Some(node) => node.catalog = catalog,
            None => self.catalogs.push(CatalogNode {
                catalog,
                schemas: Vec::new(),
            }),
        }
        self
    }

    /// Add a schema under `catalog`, creating an uncommented catalog if needed.
    #[must_use]
    pub fn with_schema(mut self, catalog: &str, schema: SchemaRef) -> Self {
        let node = self.catalog_node_mut(catalog);
        match node.schemas.iter_mut().find(|n| n.schema.name == schema.name) {
            Some(existing) => existing.schema = schema,
            None => node.schemas.push(SchemaNode {
                schema,
                tables: Vec::new(),
            }),
        }
        self
    }

    /// Add a table under `catalog.schema`, creating uncommented parents if needed.
    #[must_use]
    pub fn with_table(mut self, catalog: &str, schema: &str, table: TableRef) -> Self {
        let node = self.schema_node_mut(catalog, schema);
        match node.tables.iter_mut().find(|t| t.name == table.name) {
            Some(existing) => *existing = table,
            None => node.tables.push(table),
        }
        self
    }

    /// Make `list_catalogs` fail.
    #[must_use]
    pub fn deny_catalog_listing(mut self) -> Self {
        self.denials.catalog_listing = true;
        self
    }

    /// Make `list_schemas(catalog)` fail.
    #[must_use]
    pub fn deny_schemas(mut self, catalog: &str) -> Self {
        self.denials.schema_listings.insert(catalog.to_string());
        self
    }

    /// Make `list_tables(catalog, schema)` fail.
    #[must_use]
    pub fn deny_tables(mut self, catalog: &str, schema: &str) -> Self {
        self.denials
            .table_listings
            .insert((catalog.to_string(), schema.to_string()));
        self
    }

    /// Make `get_table(full_name)` fail.
    #[must_use]
    pub fn deny_table(mut self, full_name: &str) -> Self {
        self.denials.table_fetches.insert(full_name.to_string());
        self
    }

    fn catalog_node_mut(&mut self, catalog: &str) -> &mut CatalogNode {
        let index = match self.catalogs.iter().position(|n| n.catalog.name == catalog) {
            Some(index) => index,
            None => {
                self.catalogs.push(CatalogNode {
                    catalog: CatalogRef::new(catalog),
                    schemas: Vec::new(),
                });
                self.catalogs.len() - 1
            }
        };
        &mut self.catalogs[index]
    }

    fn schema_node_mut(&mut self, catalog: &str, schema: &str) -> &mut SchemaNode {
        let node = self.catalog_node_mut(catalog);
        let index = match node.schemas.iter().position(|n| n.schema.name == schema) {
            Some(index) => index,
            None => {
                node.schemas.push(SchemaNode {
                    schema: SchemaRef::new(schema),
                    tables: Vec::new(),
                });
                node.schemas.len() - 1
            }
        };
        &mut node.schemas[index]
    }

    fn catalog_node(&self, catalog: &str) -> Option<&CatalogNode> {
        self.catalogs.iter().find(|n| n.catalog.name == catalog)
    }

    fn schema_node(&self, catalog: &str, schema: &str) -> Option<&SchemaNode> {
        self.catalog_node(catalog)?
            .schemas
            .iter()
            .find(|n| n.schema.name == schema)
    }
}

impl MetadataAccessor for SnapshotCatalog {
    fn list_catalogs(&self) -> Result<Vec<CatalogRef>, AccessError> {
        if self.denials.catalog_listing {
            return Err(AccessError::PermissionDenied(
                "catalog listing denied".to_string(),
            ));
        }
        Ok(self.catalogs.iter().map(|n| n.catalog.clone()).collect())
    }

    fn list_schemas(&self, catalog: &str) -> Result<Vec<SchemaRef>, AccessError> {
        if self.denials.schema_listings.contains(catalog) {
            return Err(AccessError::PermissionDenied(format!(
                "no USE CATALOG on {catalog}"
            )));
        }
        let node = self
            .catalog_node(catalog)
            .ok_or_else(|| AccessError::NotFound(catalog.to_string()))?;
        Ok(node.schemas.iter().map(|n| n.schema.clone()).collect())
    }

    fn list_tables(&self, catalog: &str, schema: &str) -> Result<Vec<TableRef>, AccessError> {
        if self
            .denials
            .table_listings
            .contains(&(catalog.to_string(), schema.to_string()))
        {
            return Err(AccessError::PermissionDenied(format!(
                "no USE SCHEMA on {catalog}.{schema}"
            )));
        }
        let node = self
            .schema_node(catalog, schema)
            .ok_or_else(|| AccessError::NotFound(format!("{catalog}.{schema}")))?;
        Ok(node.tables.iter().map(TableRef::without_columns).collect())
    }

    fn get_table(&self, full_name: &str) -> Result<TableRef, AccessError> {
        if self.denials.table_fetches.contains(full_name) {
            return Err(AccessError::PermissionDenied(format!(
                "no SELECT on {full_name}"
            )));
        }
        let not_found = || AccessError::NotFound(full_name.to_string());
        let mut parts = full_name.splitn(3, '.');
        let (Some(catalog), Some(schema), Some(table)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(not_found());
        };
        self.schema_node(catalog, schema)
            .and_then(|n| n.tables.iter().find(|t| t.name == table))
            .cloned()
            .ok_or_else(not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uch_core::ColumnRef;

    fn sample() -> SnapshotCatalog {
        SnapshotCatalog::new()
            .with_catalog(CatalogRef::new("prod").with_comment("Production"))
            .with_schema("prod", SchemaRef::new("sales"))
            .with_table(
                "prod",
                "sales",
                TableRef::new("orders").with_columns(vec![ColumnRef::new("id")]),
            )
    }

    #[test]
    fn listings_follow_insertion_order() {
        let snapshot = sample()
            .with_catalog(CatalogRef::new("dev"))
            .with_schema("prod", SchemaRef::new("finance"));
        let catalogs: Vec<_> = snapshot
            .list_catalogs()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(catalogs, vec!["prod", "dev"]);

        let schemas: Vec<_> = snapshot
            .list_schemas("prod")
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(schemas, vec!["sales", "finance"]);
    }

    #[test]
    fn listed_tables_have_no_columns_but_fetched_ones_do() {
        let snapshot = sample();
        let listed = snapshot.list_tables("prod", "sales").unwrap();
        assert!(listed[0].columns.is_none());

        let fetched = snapshot.get_table("prod.sales.orders").unwrap();
        assert_eq!(fetched.columns.map(|c| c.len()), Some(1));
    }

    #[test]
    fn implicit_parents_are_uncommented() {
        let snapshot = SnapshotCatalog::new().with_table("c", "s", TableRef::new("t"));
        assert_eq!(snapshot.list_catalogs().unwrap(), vec![CatalogRef::new("c")]);
        assert_eq!(snapshot.list_schemas("c").unwrap(), vec![SchemaRef::new("s")]);
    }

    #[test]
    fn unknown_objects_are_not_found() {
        let snapshot = sample();
        assert!(snapshot.list_schemas("nope").unwrap_err().is_not_found());
        assert!(snapshot.list_tables("prod", "nope").unwrap_err().is_not_found());
        assert!(snapshot.get_table("prod.sales.nope").unwrap_err().is_not_found());
        assert!(snapshot.get_table("prod.sales").unwrap_err().is_not_found());
    }

    #[test]
    fn denials_fail_with_permission_denied() {
        let snapshot = sample()
            .deny_schemas("prod")
            .deny_tables("prod", "sales")
            .deny_table("prod.sales.orders");
        assert!(matches!(
            snapshot.list_schemas("prod"),
            Err(AccessError::PermissionDenied(_))
        ));
        assert!(matches!(
            snapshot.list_tables("prod", "sales"),
            Err(AccessError::PermissionDenied(_))
        ));
        assert!(matches!(
            snapshot.get_table("prod.sales.orders"),
            Err(AccessError::PermissionDenied(_))
        ));
        assert!(snapshot.deny_catalog_listing().list_catalogs().is_err());
    }

    #[test]
    fn with_table_replaces_same_name() {
        let snapshot = sample().with_table("prod", "sales", TableRef::new("orders").with_owner("x"));
        let tables = snapshot.list_tables("prod", "sales").unwrap();
        assert_eq!(tables.len(), 1);
        assert!(tables[0].has_owner());
    }

    #[test]
    fn with_table_replacement_keeps_listing_position() {
        let snapshot = SnapshotCatalog::new()
            .with_table("c", "s", TableRef::new("a"))
            .with_table("c", "s", TableRef::new("b"))
            .with_table("c", "s", TableRef::new("a").with_owner("x"));
        let tables = snapshot.list_tables("c", "s").unwrap();
        let names: Vec<_> = tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(tables[0].has_owner());
    }
}
