/// Exact-match restriction on which catalog and schema a scan traverses.
///
/// Both filters are optional. An empty filter string counts as unset. A
/// schema filter without a catalog filter matches that schema name in every
/// catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    catalog: Option<String>,
    schema: Option<String>,
}

impl Scope {
    /// No restriction.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(catalog: Option<&str>, schema: Option<&str>) -> Self {
        Self {
            catalog: non_empty(catalog),
            schema: non_empty(schema),
        }
    }

    #[must_use]
    pub fn catalog(catalog: &str) -> Self {
        Self::new(Some(catalog), None)
    }

    #[must_use]
    pub fn with_schema(self, schema: &str) -> Self {
        Self {
            schema: non_empty(Some(schema)),
            ..self
        }
    }

    #[must_use]
    pub fn catalog_filter(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    #[must_use]
    pub fn schema_filter(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    #[must_use]
    pub fn matches_catalog(&self, name: &str) -> bool {
        self.catalog.as_deref().is_none_or(|filter| filter == name)
    }

    #[must_use]
    pub fn matches_schema(&self, name: &str) -> bool {
        self.schema.as_deref().is_none_or(|filter| filter == name)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}
