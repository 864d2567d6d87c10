//! Severity, object kind, and check identifiers.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// How serious a finding is.
///
/// Variant order is the comparison order: `Info < Warning < Error`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Report display order, most severe first.
    pub const DISPLAY_ORDER: [Self; 3] = [Self::Error, Self::Warning, Self::Info];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(CoreError::UnknownSeverity(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ObjectKind
// ---------------------------------------------------------------------------

/// Kind of catalog object a finding is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Catalog,
    Schema,
    Table,
}

impl ObjectKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Schema => "schema",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CheckKind
// ---------------------------------------------------------------------------

/// Identifier of a hygiene check.
///
/// Each check has a fixed severity and reports on a fixed object kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    CatalogComment,
    SchemaComment,
    TableComment,
    ColumnComment,
    TableOwner,
    EmptySchema,
}

impl CheckKind {
    /// Every check, in the order the aggregator runs them.
    pub const ALL: [Self; 6] = [
        Self::CatalogComment,
        Self::SchemaComment,
        Self::TableComment,
        Self::ColumnComment,
        Self::TableOwner,
        Self::EmptySchema,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CatalogComment => "catalog_comment",
            Self::SchemaComment => "schema_comment",
            Self::TableComment => "table_comment",
            Self::ColumnComment => "column_comment",
            Self::TableOwner => "table_owner",
            Self::EmptySchema => "empty_schema",
        }
    }

    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::CatalogComment | Self::SchemaComment | Self::TableComment | Self::TableOwner => {
                Severity::Warning
            }
            Self::ColumnComment | Self::EmptySchema => Severity::Info,
        }
    }

    #[must_use]
    pub const fn object_kind(self) -> ObjectKind {
        match self {
            Self::CatalogComment => ObjectKind::Catalog,
            Self::SchemaComment | Self::EmptySchema => ObjectKind::Schema,
            Self::TableComment | Self::ColumnComment | Self::TableOwner => ObjectKind::Table,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CatalogComment => "Catalogs must have a description",
            Self::SchemaComment => "Schemas must have a description",
            Self::TableComment => "Tables must have a description",
            Self::ColumnComment => "Columns should have descriptions",
            Self::TableOwner => "Tables must have an owner assigned",
            Self::EmptySchema => "Schemas should contain at least one table",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckKind {
    type Err = CoreError;

    /// Accepts the snake_case identifier or its kebab-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|check| check.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownCheck(s.to_string()))
    }
}
