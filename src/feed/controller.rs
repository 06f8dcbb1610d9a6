//! Infinite list accumulation controller
//!
//! Drives repeated page fetches and keeps the accumulated pages in fetch
//! order. At most one request is outstanding per list: the switch to a
//! loading status happens under the write lock before the request is
//! issued, so a concurrent `fetch_next` observes it and skips.

use super::types::{FetchOutcome, ListSnapshot, ListState, ListStatus};
use crate::api::PageFetcher;
use crate::error::Result;
use crate::pagination::{PageRequest, PageResponse, DEFAULT_PAGE_SIZE};
use crate::types::Application;
use std::sync::{Arc, Weak};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Growing, ordered list of applications built from successive pages
pub struct InfiniteList {
    fetcher: Arc<dyn PageFetcher>,
    page_size: u32,
    state: Arc<RwLock<ListState>>,
}

impl InfiniteList {
    /// Create an idle list; nothing is requested until `fetch_next`
    pub fn new(fetcher: Arc<dyn PageFetcher>, page_size: u32) -> Self {
        Self {
            fetcher,
            page_size,
            state: Arc::new(RwLock::new(ListState::new())),
        }
    }

    /// Create a list with the default page size
    pub fn with_default_page_size(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::new(fetcher, DEFAULT_PAGE_SIZE)
    }

    /// Create a list and wait for the first page
    pub async fn start(fetcher: Arc<dyn PageFetcher>, page_size: u32) -> Self {
        let list = Self::new(fetcher, page_size);
        list.fetch_next().await;
        list
    }

    /// Create a list with the first page requested in the background
    pub async fn spawn(fetcher: Arc<dyn PageFetcher>, page_size: u32) -> Self {
        let list = Self::new(fetcher, page_size);
        list.spawn_fetch_next().await;
        list
    }

    /// Page size used for every request
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetch the next page and wait for it to be applied.
    ///
    /// The request runs on its own task: dropping this future does not
    /// abandon it, and the result is still applied when it settles.
    pub async fn fetch_next(&self) -> FetchOutcome {
        let Some(handle) = self.spawn_fetch_next().await else {
            return FetchOutcome::Skipped;
        };

        match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                let message = format!("fetch task failed: {e}");
                warn!("{message}");
                self.state.write().await.fail(message.clone());
                FetchOutcome::Failed(message)
            }
        }
    }

    /// Start fetching the next page on a background task.
    ///
    /// Returns `None` when the fetch is skipped. The task holds only a weak
    /// reference to the list state; if the list is gone by the time the
    /// response arrives, the completion is a no-op.
    pub async fn spawn_fetch_next(&self) -> Option<JoinHandle<FetchOutcome>> {
        let request = self.begin().await?;
        let fetcher = Arc::clone(&self.fetcher);
        let state = Arc::downgrade(&self.state);

        Some(tokio::spawn(async move {
            let result = fetcher.fetch_page(request).await;
            complete(&state, request, result).await
        }))
    }

    /// Keep fetching until there is no next page, a fetch fails, or
    /// `max_pages` pages have been appended by this call.
    ///
    /// Returns the number of pages appended.
    pub async fn drain(&self, max_pages: Option<usize>) -> usize {
        let mut appended = 0;
        while max_pages.map_or(true, |max| appended < max) {
            match self.fetch_next().await {
                FetchOutcome::Appended { .. } => appended += 1,
                _ => break,
            }
        }
        appended
    }

    /// Consistent copy of the current state
    pub async fn snapshot(&self) -> ListSnapshot {
        self.state.read().await.snapshot()
    }

    /// All items fetched so far, in fetch order
    pub async fn items(&self) -> Vec<Application> {
        self.state.read().await.items()
    }

    /// Whether the most recently fetched page has a successor
    pub async fn has_next_page(&self) -> bool {
        self.state.read().await.has_next_page()
    }

    /// Current status
    pub async fn status(&self) -> ListStatus {
        self.state.read().await.status
    }

    /// Number of pages fetched so far
    pub async fn page_count(&self) -> usize {
        self.state.read().await.pages.len()
    }

    /// Enter a loading status and pick the page to request, or skip
    async fn begin(&self) -> Option<PageRequest> {
        let mut state = self.state.write().await;

        if state.status.is_loading() {
            debug!("Fetch already in flight, skipping");
            return None;
        }
        if !state.pages.is_empty() && !state.has_next_page() {
            debug!("No next page, skipping");
            return None;
        }

        let page = state.pages.len() as u32 + 1;
        state.status = if state.pages.is_empty() {
            ListStatus::LoadingInitial
        } else {
            ListStatus::LoadingMore
        };

        Some(PageRequest::new(page).with_limit(self.page_size))
    }
}

/// Apply a settled fetch to the list, if it still exists
async fn complete(
    state: &Weak<RwLock<ListState>>,
    request: PageRequest,
    result: Result<PageResponse>,
) -> FetchOutcome {
    let Some(state) = state.upgrade() else {
        debug!(page = request.page, "List dropped before fetch settled");
        return FetchOutcome::Discarded;
    };

    let mut state = state.write().await;
    match result {
        Ok(page) => {
            let outcome = FetchOutcome::Appended {
                page: request.page,
                items: page.items.len(),
                has_next_page: page.has_next_page(),
            };
            info!(
                page = request.page,
                items = page.items.len(),
                has_next_page = page.has_next_page(),
                "Appended page"
            );
            state.append(page);
            outcome
        }
        Err(e) => {
            let message = e.to_string();
            warn!(page = request.page, "Fetch failed: {message}");
            state.fail(message.clone());
            FetchOutcome::Failed(message)
        }
    }
}

impl std::fmt::Debug for InfiniteList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfiniteList")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
