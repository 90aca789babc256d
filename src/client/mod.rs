//! HTTP client for the Enhetsregisteret API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking` (see [`AsyncBrregClient`]). The client performs
//! exactly one request per call: no retries, no caching.

mod async_wrapper;
pub use async_wrapper::{AsyncBrregClient, AsyncBrregClientImpl};

use crate::config::Config;
use crate::domain::Organisasjonsnummer;
use crate::error::{BrregError, BrregResult};
use crate::models::{Enhet, Underenhet};
use crate::query::{Page, SearchQuery};
use crate::validation::Record;
use anyhow::Context;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

const METHOD_GET: &str = "GET";

/// HTTP client for the Enhetsregisteret API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`. It holds no
/// mutable state and is cheap to clone.
#[derive(Clone)]
pub struct BrregClient {
    /// Base URL for the API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl BrregClient {
    /// Create a new BrregClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a BrregClient with a custom base URL (useful for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let config = Config {
            api_base_url: base_url.into(),
            ..Config::default()
        };
        Self::new(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request and return the response body.
    fn get(&self, url: &str) -> BrregResult<String> {
        let start = Instant::now();
        tracing::debug!("GET {}", url);

        let response = self
            .agent
            .get(url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| Self::map_error(url, e))?;

        let status = response.status();
        if !(200..300).contains(&status) {
            tracing::warn!("GET {} - Unexpected status {}", url, status);
            return Err(rest_error(url, Some(status), format!("status code {}", status)));
        }

        let body = response.into_string().map_err(|e| {
            tracing::error!("GET {} - Failed to read body: {}", url, e);
            rest_error(url, Some(status), format!("Failed to read response body: {}", e))
        })?;

        tracing::debug!(
            "GET {} - Success (status: {}, {} ms)",
            url,
            status,
            start.elapsed().as_millis()
        );
        Ok(body)
    }

    /// Map a ureq error to a BrregError.
    fn map_error(url: &str, error: ureq::Error) -> BrregError {
        match error {
            ureq::Error::Status(code, response) => {
                if is_gone(code) {
                    tracing::debug!("GET {} - Status {}", url, code);
                } else {
                    tracing::warn!("GET {} - Error status {}", url, code);
                }
                let message = match response.status_text() {
                    "" => format!("status code {}", code),
                    text => format!("status code {} {}", code, text),
                };
                rest_error(url, Some(code), message)
            }
            ureq::Error::Transport(transport) => {
                tracing::error!("GET {} - Transport error: {}", url, transport);
                rest_error(url, None, transport.to_string())
            }
        }
    }

    /// Fetch and decode a JSON body.
    fn get_json(&self, url: &str) -> BrregResult<Value> {
        let body = self.get(url)?;
        let value = serde_json::from_str(&body)
            .with_context(|| format!("Malformed JSON in response from {}", url))?;
        Ok(value)
    }

    /// Look up a single record, treating 404 and 410 as absent.
    fn lookup<T: Record>(&self, path: &str) -> BrregResult<Option<T>> {
        let url = self.build_url(path);

        let value = match self.get_json(&url) {
            Ok(value) => value,
            Err(BrregError::Rest {
                status: Some(code), ..
            }) if is_gone(code) => {
                tracing::info!("{} not found at {} (status {})", T::NAME, url, code);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let record = T::from_json(value)
            .with_context(|| format!("Invalid {} payload from {}", T::NAME, url))?;
        Ok(Some(record))
    }

    // ========================= Lookups =========================

    /// Get an entity by organization number.
    ///
    /// Returns `Ok(None)` if the entity does not exist or has been removed
    /// (HTTP 404 or 410).
    ///
    /// # Errors
    ///
    /// - `BrregError::Rest` for any other non-2xx status or a transport failure
    /// - `BrregError::Other` if the body is not JSON or fails validation
    pub fn get_enhet(
        &self,
        organisasjonsnummer: &Organisasjonsnummer,
    ) -> BrregResult<Option<Enhet>> {
        self.lookup(&format!("/enheter/{}", organisasjonsnummer))
    }

    /// Get a sub-entity by organization number.
    ///
    /// Same outcomes as [`BrregClient::get_enhet`].
    pub fn get_underenhet(
        &self,
        organisasjonsnummer: &Organisasjonsnummer,
    ) -> BrregResult<Option<Underenhet>> {
        self.lookup(&format!("/underenheter/{}", organisasjonsnummer))
    }

    // ========================= Search =========================

    /// Fetch the page of results a query asks for.
    pub fn search<Q: SearchQuery>(&self, query: &Q) -> BrregResult<Page<Q>> {
        let url = format!("{}?{}", self.build_url(Q::PATH), query.to_params().encode());
        let value = self.get_json(&url)?;

        let page = Page::from_json(value, query.clone())
            .with_context(|| format!("Invalid search response from {}", url))?;

        tracing::debug!(
            "GET {} - {} of {} records (page {} of {})",
            url,
            page.items.len(),
            page.info.total_elements,
            page.info.number.saturating_add(1),
            page.info.total_pages
        );
        Ok(page)
    }

    /// Fetch the page after `page`, or `None` if it was the last one.
    pub fn next_page<Q: SearchQuery>(&self, page: &Page<Q>) -> BrregResult<Option<Page<Q>>> {
        match page.next_query() {
            Some(query) => self.search(&query).map(Some),
            None => Ok(None),
        }
    }

    /// Iterate over every page of a query, starting at `query.page()`.
    pub fn pages<Q: SearchQuery>(&self, query: Q) -> Pages<'_, Q> {
        Pages {
            client: self,
            next: Some(query),
        }
    }
}

impl Default for BrregClient {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Iterator over the pages of a search.
///
/// Stops after the last page, or after yielding the first error.
pub struct Pages<'a, Q: SearchQuery> {
    client: &'a BrregClient,
    next: Option<Q>,
}

impl<Q: SearchQuery> Iterator for Pages<'_, Q> {
    type Item = BrregResult<Page<Q>>;

    fn next(&mut self) -> Option<Self::Item> {
        let query = self.next.take()?;
        let result = self.client.search(&query);
        if let Ok(page) = &result {
            self.next = page.next_query();
        }
        Some(result)
    }
}

/// 404 and 410 mean the record does not exist or was removed.
fn is_gone(status: u16) -> bool {
    matches!(status, 404 | 410)
}

fn rest_error(url: &str, status: Option<u16>, message: String) -> BrregError {
    BrregError::Rest {
        method: METHOD_GET.to_string(),
        url: url.to_string(),
        status,
        message,
    }
}
