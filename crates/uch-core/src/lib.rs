//! # uch-core
//!
//! Core types shared by every uchygiene crate.
//!
//! - Metadata records for catalogs, schemas, tables and columns
//! - Findings and the enums that classify them (severity, object kind, check)
//! - The [`MetadataAccessor`] contract the check engine traverses
//! - [`AccessError`], the failure type every accessor call returns

pub mod accessor;
pub mod enums;
pub mod errors;
pub mod finding;
pub mod model;

pub use accessor::MetadataAccessor;
pub use enums::{CheckKind, ObjectKind, Severity};
pub use errors::{AccessError, CoreError};
pub use finding::Finding;
pub use model::{CatalogRef, ColumnRef, SchemaRef, TableRef, is_missing};
