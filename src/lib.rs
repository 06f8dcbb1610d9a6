//! # applications-feed
//!
//! Client for a paginated loan applications REST endpoint.
//!
//! ## Features
//!
//! - **Page Fetching**: `GET {base_url}/applications?_page=N&_limit=M`
//! - **Link Header Pagination**: Next-page detection from RFC 8288 `Link` headers
//! - **Infinite List**: Ordered accumulation of pages with a single in-flight fetch
//! - **Formatting**: GBP amounts and `DD-MM-YYYY` dates for display
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use applications_feed::{ApplicationsApi, InfiniteList, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let api = Arc::new(ApplicationsApi::new("http://localhost:3001/api")?);
//!
//!     // First page is requested on start
//!     let list = InfiniteList::start(api, 5).await;
//!
//!     while list.has_next_page().await {
//!         list.fetch_next().await;
//!     }
//!
//!     for app in list.items().await {
//!         println!("{} {}", app.company, app.loan_amount);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │        InfiniteList (fetch_next, snapshot, drain)       │
//! └───────────────────────────┬────────────────────────────┘
//!                             │ PageFetcher
//! ┌──────────────┬────────────┴───────────┬────────────────┐
//! │    HTTP      │      Pagination        │     Format     │
//! ├──────────────┼────────────────────────┼────────────────┤
//! │ Base URL     │ _page / _limit         │ £ currency     │
//! │ Status map   │ Link rel="next"        │ DD-MM-YYYY     │
//! │ Rate limit   │                        │                │
//! └──────────────┴────────────────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Application record types
pub mod types;

/// HTTP client with optional throttling
pub mod http;

/// Page cursors and Link header parsing
pub mod pagination;

/// Page fetcher for the applications endpoint
pub mod api;

/// Infinite list accumulation
pub mod feed;

/// Currency and date formatting
pub mod format;

/// Text rendering of applications
pub mod render;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{ApplicationsApi, PageFetcher};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use feed::{FetchOutcome, InfiniteList, ListSnapshot, ListStatus};
pub use format::{format_currency, format_date};
pub use pagination::{parse_link_header, PageRequest, PageResponse, PaginationMetadata};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
