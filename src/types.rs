//! Wire types returned by the explorer API

use serde::{Deserialize, Serialize};

/// A block header as returned by the explorer.
///
/// The API returns more fields than these, but only `height` and `hash`
/// participate in the traversal; everything else is ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block height
    pub height: u64,
    /// Block hash, used as the pagination cursor
    pub hash: String,
}

/// One page of headers.
///
/// A missing `data` field is a decode error; an empty `data` array signals
/// the end of pagination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadersPage {
    /// Ordered header records, oldest first
    pub data: Vec<BlockHeader>,
}

impl HeadersPage {
    /// Whether this page terminates the traversal
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The last record of the page, if any
    pub fn last(&self) -> Option<&BlockHeader> {
        self.data.last()
    }
}
