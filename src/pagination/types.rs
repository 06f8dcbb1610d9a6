//! Pagination types
//!
//! Page cursor, page result metadata and parsed Link header entries.

use crate::error::{Error, Result};
use crate::types::Application;
use serde::{Deserialize, Serialize};

/// Page size used when the caller does not pick one
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Query parameter carrying the 1-based page number
pub const PAGE_PARAM: &str = "_page";

/// Query parameter carrying the page size
pub const LIMIT_PARAM: &str = "_limit";

/// Request for one page of the list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    /// Number of items per page
    pub limit: u32,
}

impl PageRequest {
    /// Request `page` with the default page size
    pub fn new(page: u32) -> Self {
        Self {
            page,
            limit: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the page size
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Reject zero page numbers and sizes before they reach the wire
    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(Error::config("page number must be at least 1"));
        }
        if self.limit == 0 {
            return Err(Error::config("page size must be at least 1"));
        }
        Ok(())
    }

    /// Query parameters for this request, in wire order
    pub fn query_params(&self) -> [(&'static str, String); 2] {
        [
            (PAGE_PARAM, self.page.to_string()),
            (LIMIT_PARAM, self.limit.to_string()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Next-page availability derived from a response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub has_next_page: bool,
}

/// One bounded batch of items plus its next-page flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    pub items: Vec<Application>,
    pub pagination: PaginationMetadata,
}

impl PageResponse {
    /// Create a page response
    pub fn new(items: Vec<Application>, has_next_page: bool) -> Self {
        Self {
            items,
            pagination: PaginationMetadata { has_next_page },
        }
    }

    /// Whether a further page exists
    pub fn has_next_page(&self) -> bool {
        self.pagination.has_next_page
    }
}

/// A single entry of an RFC 8288 Link header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Target URI, if the entry carried one in angle brackets
    pub url: Option<String>,
    /// Relation type, lowercased with quotes stripped
    pub rel: Option<String>,
}
