//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::SyncConfig;
use crate::error::Result;
use crate::http::ExplorerClient;
use crate::sync::HeaderSync;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Sync => self.sync().await,
            Commands::Page { last_seen_hash } => self.page(last_seen_hash.as_deref()).await,
        }
    }

    fn config(&self) -> SyncConfig {
        SyncConfig::new(&self.cli.coin)
            .base_url(&self.cli.base_url)
            .page_limit(self.cli.limit)
    }

    /// Traverse all header pages for the coin
    async fn sync(&self) -> Result<()> {
        let sync = HeaderSync::new(self.config())?;
        sync.run().await?;
        Ok(())
    }

    /// Fetch one page and print it as JSON
    async fn page(&self, last_seen_hash: Option<&str>) -> Result<()> {
        let config = self.config();
        let client = ExplorerClient::new(&config.base_url)?;
        let page = client
            .fetch_page(&config.coin, config.page_limit, last_seen_hash)
            .await?;
        println!("{}", serde_json::to_string_pretty(&page)?);
        Ok(())
    }
}
