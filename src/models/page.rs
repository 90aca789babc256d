//! Paging metadata returned by the search endpoints.

use serde::{Deserialize, Serialize};

/// The `page` object of a search response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Requested page size
    #[serde(default)]
    pub size: u32,

    /// Total number of matching records across all pages
    #[serde(default)]
    pub total_elements: u64,

    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,

    /// Zero-based index of this page
    #[serde(default)]
    pub number: u32,
}

impl PageInfo {
    /// Whether a page exists after this one.
    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }
}
