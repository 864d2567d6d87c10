//! Metadata records returned by a [`MetadataAccessor`](crate::MetadataAccessor).
//!
//! Records are immutable snapshots of the remote catalog at scan time. Every
//! optional attribute is an explicit `Option`; an empty string and `None` are
//! treated identically by [`is_missing`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Whether an optional text attribute counts as absent.
///
/// `None` and `Some("")` are both missing. Whitespace is content.
#[must_use]
pub fn is_missing(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Join name segments into a fully qualified dotted identity.
#[must_use]
pub fn qualified_name(parts: &[&str]) -> String {
    parts.join(".")
}

/// Top-level namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogRef {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
}

impl CatalogRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn has_comment(&self) -> bool {
        !is_missing(self.comment.as_deref())
    }
}

/// Namespace within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SchemaRef {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
}

impl SchemaRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn has_comment(&self) -> bool {
        !is_missing(self.comment.as_deref())
    }

    /// `catalog.schema`
    #[must_use]
    pub fn full_name(&self, catalog: &str) -> String {
        qualified_name(&[catalog, &self.name])
    }
}

/// A table as listed within a schema.
///
/// `columns` is only populated by [`get_table`](crate::MetadataAccessor::get_table);
/// listings leave it `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TableRef {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub columns: Option<Vec<ColumnRef>>,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            owner: None,
            columns: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    #[must_use]
    pub fn with_columns(mut self, columns: Vec<ColumnRef>) -> Self {
        self.columns = Some(columns);
        self
    }

    #[must_use]
    pub fn has_comment(&self) -> bool {
        !is_missing(self.comment.as_deref())
    }

    #[must_use]
    pub fn has_owner(&self) -> bool {
        !is_missing(self.owner.as_deref())
    }

    /// `catalog.schema.table`
    #[must_use]
    pub fn full_name(&self, catalog: &str, schema: &str) -> String {
        qualified_name(&[catalog, schema, &self.name])
    }

    /// Names of columns without a comment, in column order.
    ///
    /// A table whose column list was never populated has none.
    #[must_use]
    pub fn uncommented_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .flatten()
            .filter(|column| !column.has_comment())
            .map(|column| column.name.clone())
            .collect()
    }

    /// Copy without the column list, as a schema listing returns it.
    #[must_use]
    pub fn without_columns(&self) -> Self {
        Self {
            columns: None,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnRef {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn has_comment(&self) -> bool {
        !is_missing(self.comment.as_deref())
    }
}
