//! # uch-checks
//!
//! Metadata hygiene checks over a [`MetadataAccessor`](uch_core::MetadataAccessor).
//!
//! The traversal walks catalogs → schemas → tables sequentially, applying the
//! optional [`Scope`] filters. Inaccessible branches are skipped, so coverage
//! shrinks rather than the scan failing; only the top-level catalog listing
//! can fail a check.
//!
//! Checks, in aggregator order:
//! - `catalog_comment`: catalogs without a description (WARNING)
//! - `schema_comment`: schemas without a description (WARNING)
//! - `table_comment`: tables without a description (WARNING)
//! - `column_comment`: tables with undocumented columns (INFO)
//! - `table_owner`: tables without an owner (WARNING)
//! - `empty_schema`: non-system schemas with no tables (INFO)

mod aggregate;
pub mod checks;
mod scope;
pub mod traverse;

pub use aggregate::{run_all_checks, run_check, run_checks, run_checks_with};
pub use checks::{
    check_catalog_comments, check_column_comments, check_empty_schemas, check_schema_comments,
    check_table_comments, check_table_owners,
};
pub use scope::Scope;
