//! # uch-client
//!
//! [`MetadataAccessor`](uch_core::MetadataAccessor) implementations:
//! - [`UnityCatalogClient`]: live Databricks Unity Catalog REST API (blocking)
//! - [`SnapshotCatalog`]: in-memory catalog, built in code or loaded from a
//!   JSON snapshot file

mod error;
mod http;
pub mod snapshot;
pub mod unity;

pub use error::{ClientError, SnapshotError};
pub use snapshot::SnapshotCatalog;
pub use unity::UnityCatalogClient;
