//! CLI module
//!
//! Command-line interface over the applications client.
//!
//! # Commands
//!
//! - `page` - Fetch a single page
//! - `list` - Fetch pages in sequence and print every application
//! - `browse` - Interactive infinite list, one page per confirmation

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
