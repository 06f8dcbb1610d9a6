//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse loan applications from a paginated REST endpoint
#[derive(Parser, Debug)]
#[command(name = "applications-feed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the API (overrides the config file)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a single page
    Page {
        /// 1-based page number
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Items per page
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Fetch pages in sequence and print every application
    List {
        /// Items per page
        #[arg(short, long)]
        limit: Option<u32>,

        /// Number of pages to fetch
        #[arg(long, default_value = "1", conflicts_with = "all")]
        pages: usize,

        /// Follow next links until the last page
        #[arg(long)]
        all: bool,
    },

    /// Interactively load one page at a time
    Browse {
        /// Items per page
        #[arg(short, long)]
        limit: Option<u32>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one application per line)
    Json,
    /// Human-readable cards
    Pretty,
}
