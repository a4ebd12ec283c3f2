//! # header-sync
//!
//! Traverses all block headers for one coin by paging through a blockchain
//! explorer's REST API with a `lastSeenHash` cursor until the API returns
//! an empty page.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use header_sync::{HeaderSync, SyncConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let sync = HeaderSync::new(SyncConfig::new("ltc"))?;
//!     let report = sync.run().await?;
//!     println!("{} headers in {} pages", report.headers, report.pages);
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior
//!
//! - `GET {base}/{coin}/blocks/headers?limit=1000` fetches the first page;
//!   subsequent requests append `&lastSeenHash={hash}` with the hash of the
//!   previous page's last record.
//! - An empty `data` array ends the traversal.
//! - Failures are fatal: no retries, no rate limiting, no partial recovery.
//!   The run either finishes or returns the first error it hits.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types
pub mod error;

/// Wire types returned by the explorer API
pub mod types;

/// Traversal configuration
pub mod config;

/// HTTP access to the explorer API
pub mod http;

/// Cursor-driven header traversal
pub mod sync;

/// Command-line interface
pub mod cli;

pub use config::SyncConfig;
pub use error::{Error, Result};
pub use http::ExplorerClient;
pub use sync::{HeaderSync, SyncReport};
pub use types::{BlockHeader, HeadersPage};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
