//! Cursor-driven header traversal

mod paginator;
mod types;

pub use paginator::HeaderSync;
pub use types::{NextPage, SyncReport, SyncState, CURSOR_SENTINEL};

#[cfg(test)]
mod tests;
