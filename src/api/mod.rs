//! Applications API module
//!
//! Fetches single pages from the list endpoint and derives whether a
//! further page exists from the response's `Link` header.

mod fetcher;

pub use fetcher::{
    decode_items, ApplicationsApi, PageFetcher, APPLICATIONS_PATH, DEFAULT_BASE_URL,
};
