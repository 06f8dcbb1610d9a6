//! Page stream
//!
//! Walks the list endpoint page by page as a `Stream`, stopping after the
//! first page without a `next` link or the first error.

use crate::api::PageFetcher;
use crate::error::{Error, Result};
use crate::pagination::{PageRequest, PageResponse};
use futures::stream::{self, Stream};
use std::sync::Arc;

/// Stream every page starting at page 1
pub fn page_stream(
    fetcher: Arc<dyn PageFetcher>,
    page_size: u32,
) -> impl Stream<Item = Result<PageResponse>> {
    stream::try_unfold(Some(1u32), move |next| {
        let fetcher = Arc::clone(&fetcher);
        async move {
            let Some(page) = next else {
                return Ok::<_, Error>(None);
            };
            let response = fetcher
                .fetch_page(PageRequest::new(page).with_limit(page_size))
                .await?;
            let next = response.has_next_page().then_some(page + 1);
            Ok::<_, Error>(Some((response, next)))
        }
    })
}
