//! Infinite list state types

use crate::pagination::PageResponse;
use crate::types::Application;
use serde::Serialize;

/// Observable status of the infinite list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListStatus {
    /// Created, nothing requested yet
    IdleInitial,
    /// First page in flight
    LoadingInitial,
    /// A later page in flight
    LoadingMore,
    /// Last fetch succeeded
    Ready,
    /// Last fetch failed; earlier pages are kept
    Error,
}

impl ListStatus {
    /// Whether a request is outstanding
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::LoadingInitial | Self::LoadingMore)
    }
}

/// Result of a single `fetch_next` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A page was appended
    Appended {
        /// Page number that was fetched
        page: u32,
        /// Items on that page
        items: usize,
        /// Whether another page exists after it
        has_next_page: bool,
    },
    /// The fetch failed; the list moved to `Error`
    Failed(String),
    /// Nothing requested: already loading or no further page
    Skipped,
    /// The fetch finished after the list was dropped
    Discarded,
}

impl FetchOutcome {
    /// Whether a page was appended
    pub fn is_appended(&self) -> bool {
        matches!(self, Self::Appended { .. })
    }
}

/// Mutable state owned by the controller
#[derive(Debug)]
pub(crate) struct ListState {
    pub(crate) pages: Vec<PageResponse>,
    pub(crate) status: ListStatus,
    pub(crate) error: Option<String>,
}

impl ListState {
    pub(crate) fn new() -> Self {
        Self {
            pages: Vec::new(),
            status: ListStatus::IdleInitial,
            error: None,
        }
    }

    /// Flag from the most recently fetched page only
    pub(crate) fn has_next_page(&self) -> bool {
        self.pages.last().is_some_and(PageResponse::has_next_page)
    }

    pub(crate) fn items(&self) -> Vec<Application> {
        self.pages
            .iter()
            .flat_map(|page| page.items.iter().cloned())
            .collect()
    }

    pub(crate) fn append(&mut self, page: PageResponse) {
        self.pages.push(page);
        self.status = ListStatus::Ready;
        self.error = None;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.status = ListStatus::Error;
        self.error = Some(message);
    }

    pub(crate) fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            status: self.status,
            items: self.items(),
            has_next_page: self.has_next_page(),
            page_count: self.pages.len(),
            error: self.error.clone(),
        }
    }
}

/// Consistent copy of the list state at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSnapshot {
    pub status: ListStatus,
    /// All items, pages concatenated in fetch order
    pub items: Vec<Application>,
    pub has_next_page: bool,
    pub page_count: usize,
    pub error: Option<String>,
}
