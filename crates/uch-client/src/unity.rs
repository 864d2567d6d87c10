//! Databricks Unity Catalog REST client.
//!
//! Talks to `/api/2.1/unity-catalog/*` with a bearer token. Listings follow
//! `next_page_token` until exhausted, so each accessor call returns the full
//! sequence in service order. Calls block; there is no retry.

use std::time::Duration;

use serde::Deserialize;
use uch_config::WorkspaceConfig;
use uch_core::{AccessError, CatalogRef, MetadataAccessor, SchemaRef, TableRef};

use crate::error::ClientError;
use crate::http::check_response;

const API_PREFIX: &str = "/api/2.1/unity-catalog";

/// One page of a listing endpoint.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

#[derive(Deserialize)]
struct CatalogsResponse {
    #[serde(default)]
    catalogs: Vec<CatalogRef>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
struct SchemasResponse {
    #[serde(default)]
    schemas: Vec<SchemaRef>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
struct TablesResponse {
    #[serde(default)]
    tables: Vec<TableRef>,
    #[serde(default)]
    next_page_token: Option<String>,
}

/// Blocking HTTP client for one Databricks workspace.
pub struct UnityCatalogClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
    page_size: u32,
}

impl UnityCatalogClient {
    /// Build a client from workspace settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotConfigured`] when host or token is missing,
    /// or [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &WorkspaceConfig) -> Result<Self, ClientError> {
        let base_url = config.api_base().ok_or(ClientError::NotConfigured("host"))?;
        if config.token.is_empty() {
            return Err(ClientError::NotConfigured("token"));
        }

        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("uchygiene/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            token: config.token.clone(),
            page_size: config.page_size,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, ClientError> {
        tracing::debug!(url, "GET");
        let resp = self.http.get(url).bearer_auth(&self.token).send()?;
        check_response(resp)
    }

    fn fetch_catalogs(&self) -> Result<Vec<CatalogRef>, ClientError> {
        collect_pages(|token| {
            let url = listing_url(&self.base_url, "catalogs", &[], self.page_size, token);
            let data: CatalogsResponse = self.get(&url)?.json()?;
            Ok(Page {
                items: data.catalogs,
                next_page_token: data.next_page_token,
            })
        })
    }

    fn fetch_schemas(&self, catalog: &str) -> Result<Vec<SchemaRef>, ClientError> {
        collect_pages(|token| {
            let url = listing_url(
                &self.base_url,
                "schemas",
                &[("catalog_name", catalog)],
                self.page_size,
                token,
            );
            let data: SchemasResponse = self.get(&url)?.json()?;
            Ok(Page {
                items: data.schemas,
                next_page_token: data.next_page_token,
            })
        })
    }

    fn fetch_tables(&self, catalog: &str, schema: &str) -> Result<Vec<TableRef>, ClientError> {
        collect_pages(|token| {
            let url = listing_url(
                &self.base_url,
                "tables",
                &[
                    ("catalog_name", catalog),
                    ("schema_name", schema),
                    ("omit_columns", "true"),
                ],
                self.page_size,
                token,
            );
            let data: TablesResponse = self.get(&url)?.json()?;
            Ok(Page {
                items: data.tables.iter().map(TableRef::without_columns).collect(),
                next_page_token: data.next_page_token,
            })
        })
    }

    fn fetch_table(&self, full_name: &str) -> Result<TableRef, ClientError> {
        let url = format!(
            "{}{API_PREFIX}/tables/{}",
            self.base_url,
            urlencoding::encode(full_name)
        );
        Ok(self.get(&url)?.json()?)
    }
}

impl MetadataAccessor for UnityCatalogClient {
    fn list_catalogs(&self) -> Result<Vec<CatalogRef>, AccessError> {
        Ok(self.fetch_catalogs()?)
    }

    fn list_schemas(&self, catalog: &str) -> Result<Vec<SchemaRef>, AccessError> {
        Ok(self.fetch_schemas(catalog)?)
    }

    fn list_tables(&self, catalog: &str, schema: &str) -> Result<Vec<TableRef>, AccessError> {
        Ok(self.fetch_tables(catalog, schema)?)
    }

    fn get_table(&self, full_name: &str) -> Result<TableRef, AccessError> {
        Ok(self.fetch_table(full_name)?)
    }
}

/// Build a listing URL with encoded query parameters and paging controls.
fn listing_url(
    base_url: &str,
    resource: &str,
    params: &[(&str, &str)],
    page_size: u32,
    page_token: Option<&str>,
) -> String {
    let mut query: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    if page_size > 0 {
        query.push(format!("max_results={page_size}"));
    }
    if let Some(token) = page_token {
        query.push(format!("page_token={}", urlencoding::encode(token)));
    }

    let mut url = format!("{base_url}{API_PREFIX}/{resource}");
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.join("&"));
    }
    url
}

/// Drain a paginated endpoint. An absent or empty token ends the listing.
fn collect_pages<T, F>(mut fetch: F) -> Result<Vec<T>, ClientError>
where
    F: FnMut(Option<&str>) -> Result<Page<T>, ClientError>,
{
    let mut items = Vec::new();
    let mut token: Option<String> = None;
    loop {
        let page = fetch(token.as_deref())?;
        items.extend(page.items);
        match page.next_page_token.filter(|next| !next.is_empty()) {
            Some(next) if token.as_deref() == Some(next.as_str()) => {
                return Err(ClientError::Parse(format!(
                    "listing returned the same page token twice: {next}"
                )));
            }
            Some(next) => token = Some(next),
            None => return Ok(items),
        }
    }
}
