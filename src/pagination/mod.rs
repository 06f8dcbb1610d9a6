//! Pagination module
//!
//! Page-number cursors (`_page` / `_limit`) and Link header parsing.
//!
//! # Overview
//!
//! The list endpoint is paged by a 1-based page number. Whether a further
//! page exists is signalled only through an RFC 8288 `Link` header carrying
//! a `rel="next"` entry.

mod link;
mod types;

pub use link::{next_link, parse_link_header, parse_links};
pub use types::{
    Link, PageRequest, PageResponse, PaginationMetadata, DEFAULT_PAGE_SIZE, LIMIT_PARAM,
    PAGE_PARAM,
};
