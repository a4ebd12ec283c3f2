//! Traversal state and page-advance logic

use crate::types::HeadersPage;

/// Trace label shown before the first fetch, when no page has been seen yet
pub const CURSOR_SENTINEL: &str = "0";

/// Result of examining a fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages: request the next one with this cursor
    Continue {
        /// Hash of the page's last record, the next `lastSeenHash` value
        last_seen_hash: String,
        /// Height of the page's last record, shown in the progress trace
        last_height: u64,
    },
    /// Empty page: the traversal is complete
    Done,
}

impl NextPage {
    /// Decide how to continue after a page.
    ///
    /// An empty `data` array terminates; otherwise the cursor advances to
    /// the last record's hash.
    pub fn from_page(page: &HeadersPage) -> Self {
        match page.last() {
            Some(last) => Self::Continue {
                last_seen_hash: last.hash.clone(),
                last_height: last.height,
            },
            None => Self::Done,
        }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Tracks traversal state across pages
#[derive(Debug, Clone, Default)]
pub struct SyncState {
    /// Current cursor; `None` until the first non-empty page, so the first
    /// request carries no `lastSeenHash` parameter
    pub cursor: Option<String>,
    /// Height of the last header seen
    pub last_height: Option<u64>,
    /// Pages fetched so far (empty terminal page included)
    pub pages: u64,
    /// Headers seen so far
    pub headers: u64,
    /// Is the traversal complete?
    pub done: bool,
}

impl SyncState {
    /// Create a fresh state positioned at genesis
    pub fn new() -> Self {
        Self::default()
    }

    /// Label for the progress trace: the sentinel before any page has been
    /// fetched, afterwards the last seen height.
    pub fn trace_label(&self) -> String {
        self.last_height
            .map_or_else(|| CURSOR_SENTINEL.to_string(), |h| h.to_string())
    }

    /// Account for a fetched page and apply its advance decision
    pub fn apply(&mut self, page: &HeadersPage, next: NextPage) {
        self.pages += 1;
        self.headers += page.data.len() as u64;
        match next {
            NextPage::Continue {
                last_seen_hash,
                last_height,
            } => {
                self.cursor = Some(last_seen_hash);
                self.last_height = Some(last_height);
            }
            NextPage::Done => self.done = true,
        }
    }
}

/// Summary of a completed traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Total fetches performed, terminal empty page included
    pub pages: u64,
    /// Total headers seen
    pub headers: u64,
    /// Height of the last header, if any page was non-empty
    pub last_height: Option<u64>,
}
