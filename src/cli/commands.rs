//! CLI commands and argument parsing

use crate::config::{DEFAULT_BASE_URL, DEFAULT_COIN, DEFAULT_PAGE_LIMIT};
use clap::{Parser, Subcommand};

/// Block header traversal for blockchain explorer APIs
#[derive(Parser, Debug)]
#[command(name = "header-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Coin identifier
    #[arg(short, long, global = true, default_value = DEFAULT_COIN)]
    pub coin: String,

    /// Base URL of the explorer API
    #[arg(short, long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Records requested per page
    #[arg(short, long, global = true, default_value_t = DEFAULT_PAGE_LIMIT)]
    pub limit: u32,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Traverse all headers for the coin, page by page
    Sync,

    /// Fetch a single page of headers and print it as JSON
    Page {
        /// Cursor to resume from (hash of the last seen header)
        #[arg(long)]
        last_seen_hash: Option<String>,
    },
}
