//! Search queries and paged results.
//!
//! A query is a plain struct of optional filters plus a page index. The
//! client turns it into `GET /enheter?...` or `GET /underenheter?...` and
//! returns a [`Page`], which remembers its query so the next page can be
//! requested.

pub mod enhet_query;
pub mod params;
pub mod underenhet_query;

pub use enhet_query::EnhetQuery;
pub use params::QueryParams;
pub use underenhet_query::UnderenhetQuery;

use crate::models::PageInfo;
use crate::validation::{self, FieldViolation, Record, SchemaError};
use serde_json::Value;
use std::fmt::Debug;

/// A search query against one of the registry's collection endpoints.
pub trait SearchQuery: Clone + Debug + Send + Sync + 'static {
    /// Record type returned by the endpoint.
    type Record: Record + Debug + Clone + PartialEq + Send + 'static;

    /// Endpoint path below the base URL.
    const PATH: &'static str;

    /// Key of the record list inside `_embedded`.
    const EMBEDDED_KEY: &'static str;

    fn to_params(&self) -> QueryParams;

    /// Zero-based page index requested by this query.
    fn page(&self) -> u32;

    /// The same query for another page.
    fn with_page(&self, page: u32) -> Self;
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<Q: SearchQuery> {
    pub items: Vec<Q::Record>,
    pub info: PageInfo,
    query: Q,
}

impl<Q: SearchQuery> Page<Q> {
    /// The query that produced this page.
    pub fn query(&self) -> &Q {
        &self.query
    }

    /// Whether a page after the requested one exists.
    ///
    /// Counts from the page index that was asked for, not the one the server
    /// echoes in `info.number`, so walking pages always moves forward.
    pub fn has_next_page(&self) -> bool {
        self.query.page().saturating_add(1) < self.info.total_pages
    }

    /// Query for the following page, if there is one.
    pub fn next_query(&self) -> Option<Q> {
        if self.has_next_page() {
            Some(self.query.with_page(self.query.page() + 1))
        } else {
            None
        }
    }

    /// Build a page from a search response body.
    ///
    /// A response without `_embedded` is an empty page. Every record is
    /// validated; violations from all records are reported together.
    pub fn from_json(mut value: Value, query: Q) -> Result<Self, SchemaError> {
        let record = <Q::Record as Record>::NAME;
        let mut violations = Vec::new();

        let info = match value.get_mut("page").map(Value::take) {
            None | Some(Value::Null) => PageInfo::default(),
            Some(raw) => serde_json::from_value(raw).unwrap_or_else(|e| {
                violations.push(FieldViolation::new("page", e.to_string()));
                PageInfo::default()
            }),
        };

        let embedded_path = format!("_embedded.{}", Q::EMBEDDED_KEY);
        let raw_items = value
            .pointer_mut(&format!("/_embedded/{}", Q::EMBEDDED_KEY))
            .map(Value::take);

        let mut items = Vec::new();
        match raw_items {
            None | Some(Value::Null) => {}
            Some(Value::Array(raw_items)) => {
                for (index, raw) in raw_items.into_iter().enumerate() {
                    let path = format!("{}[{}]", embedded_path, index);
                    match validation::parse_at::<Q::Record>(raw, &path) {
                        Ok(item) => items.push(item),
                        Err(e) => violations.extend(e.violations),
                    }
                }
            }
            Some(_) => violations.push(FieldViolation::new(embedded_path, "expected a list")),
        }

        if !violations.is_empty() {
            return Err(SchemaError { record, violations });
        }

        Ok(Self { items, info, query })
    }
}
