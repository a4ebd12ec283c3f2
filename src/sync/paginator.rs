//! The traversal loop

use super::types::{NextPage, SyncReport, SyncState};
use crate::config::SyncConfig;
use crate::error::Result;
use crate::http::ExplorerClient;
use tracing::info;

/// Walks all header pages for one coin, advancing the cursor after every
/// page until the API returns an empty one.
///
/// Requests are strictly sequential: one in flight at a time, each awaited
/// to completion before the next is issued. Any failure aborts the run.
pub struct HeaderSync {
    client: ExplorerClient,
    config: SyncConfig,
}

impl HeaderSync {
    /// Create a traversal from a config
    pub fn new(config: SyncConfig) -> Result<Self> {
        let client = ExplorerClient::new(&config.base_url)?;
        Ok(Self { client, config })
    }

    /// Create a traversal reusing an existing client
    pub fn with_client(client: ExplorerClient, config: SyncConfig) -> Self {
        Self { client, config }
    }

    /// Fetch every page in sequence.
    ///
    /// A plain loop rather than recursion: the traversal can span millions
    /// of pages and must not grow the call stack per page.
    pub async fn run(&self) -> Result<SyncReport> {
        let mut state = SyncState::new();

        while !state.done {
            info!(
                coin = %self.config.coin,
                last_seen = %state.trace_label(),
                "getting headers"
            );
            let page = self
                .client
                .fetch_page(
                    &self.config.coin,
                    self.config.page_limit,
                    state.cursor.as_deref(),
                )
                .await?;
            let next = NextPage::from_page(&page);
            state.apply(&page, next);
        }

        info!(
            coin = %self.config.coin,
            pages = state.pages,
            headers = state.headers,
            "done"
        );

        Ok(SyncReport {
            pages: state.pages,
            headers: state.headers,
            last_height: state.last_height,
        })
    }

    /// The config this traversal runs with
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }
}
