//! Explorer API client
//!
//! One GET per call, no retries, no rate limiting, no configured timeout:
//! a transport failure, a non-2xx status, or a malformed body is returned
//! as an error and ends the traversal.

use crate::error::{Error, Result};
use crate::types::HeadersPage;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Query parameter carrying the pagination cursor
const LAST_SEEN_HASH_PARAM: &str = "lastSeenHash";

/// Client for a block explorer's REST API
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    client: Client,
    base_url: Url,
}

impl ExplorerClient {
    /// Create a client for the given explorer endpoint.
    ///
    /// The base URL is validated up front so a typo fails before the first
    /// request rather than on every page.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { client, base_url })
    }

    /// Build the headers endpoint URL for one page.
    ///
    /// `{base}/{coin}/blocks/headers?limit={limit}`, plus `lastSeenHash`
    /// only when a cursor is present. The very first request sends no
    /// cursor at all.
    pub fn headers_url(&self, coin: &str, limit: u32, last_seen_hash: Option<&str>) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{coin}/blocks/headers"))?;
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        if let Some(hash) = last_seen_hash {
            url.query_pairs_mut().append_pair(LAST_SEEN_HASH_PARAM, hash);
        }
        Ok(url)
    }

    /// Fetch one page of headers.
    ///
    /// Non-2xx responses become `Error::HttpStatus` with the body captured;
    /// a body that is not valid JSON or lacks the `data` field becomes
    /// `Error::JsonParse`.
    pub async fn fetch_page(
        &self,
        coin: &str,
        limit: u32,
        last_seen_hash: Option<&str>,
    ) -> Result<HeadersPage> {
        let url = self.headers_url(coin, limit, last_seen_hash)?;
        debug!(%url, "fetching header page");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        let page: HeadersPage = serde_json::from_str(&body)?;
        Ok(page)
    }
}
