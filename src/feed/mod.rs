//! Infinite list module
//!
//! Accumulates successive pages into one ordered list.
//!
//! # Overview
//!
//! - `InfiniteList` - Stateful controller with `fetch_next`, loading/error
//!   tracking and a flattened view of all items
//! - `page_stream` - Stateless stream over every page, for bulk export
//!
//! ```text
//! IdleInitial ──▶ LoadingInitial ──▶ Ready ──fetch_next──▶ LoadingMore ──▶ Ready
//!                        │                                      │
//!                        └────────────▶ Error ◀─────────────────┘
//! ```

mod controller;
mod stream;
mod types;

pub use controller::InfiniteList;
pub use stream::page_stream;
pub use types::{FetchOutcome, ListSnapshot, ListStatus};
