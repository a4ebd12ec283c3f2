//! Traversal configuration
//!
//! The original tool hardcoded the coin, endpoint, and page size; here they
//! are explicit knobs with defaults matching the original literals, so the
//! default run behaves identically.

/// Default explorer endpoint
pub const DEFAULT_BASE_URL: &str = "https://xsnexplorer.io/api";

/// Default coin identifier
pub const DEFAULT_COIN: &str = "ltc";

/// Default page size
pub const DEFAULT_PAGE_LIMIT: u32 = 1000;

/// Configuration for a header traversal
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Coin identifier (e.g., "ltc", "xsn")
    pub coin: String,
    /// Base URL of the explorer API
    pub base_url: String,
    /// Records requested per page
    pub page_limit: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            coin: DEFAULT_COIN.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl SyncConfig {
    /// Create a config for a coin with default endpoint and page size
    pub fn new(coin: impl Into<String>) -> Self {
        Self {
            coin: coin.into(),
            ..Default::default()
        }
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the page limit
    #[must_use]
    pub fn page_limit(mut self, limit: u32) -> Self {
        self.page_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original() {
        let config = SyncConfig::default();
        assert_eq!(config.coin, "ltc");
        assert_eq!(config.base_url, "https://xsnexplorer.io/api");
        assert_eq!(config.page_limit, 1000);
    }

    #[test]
    fn test_builder() {
        let config = SyncConfig::new("xsn")
            .base_url("http://localhost:9000/api")
            .page_limit(50);
        assert_eq!(config.coin, "xsn");
        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.page_limit, 50);
    }
}
