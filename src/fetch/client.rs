//! Post-fetch client for the to-do collection

use super::types::PageFetch;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::types::Todo;
use async_trait::async_trait;
use tracing::debug;

/// Public demo API the screen reads from
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Response header carrying the full collection size
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// A source of to-do pages
///
/// The pagination controller depends only on this trait. Production code
/// uses [`TodoClient`]; tests substitute scripted fetchers.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one page of the collection
    ///
    /// `page` is 1-indexed. Each call issues exactly one request.
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<PageFetch>;
}

/// HTTP-backed [`PageFetcher`] for the `/todos` endpoint
pub struct TodoClient {
    http: HttpClient,
}

impl TodoClient {
    /// Create a client against the public demo endpoint
    pub fn new() -> Self {
        let config = HttpClientConfig::builder()
            .base_url(DEFAULT_BASE_URL)
            .build();
        Self {
            http: HttpClient::with_config(config),
        }
    }

    /// Create a client against a custom endpoint, e.g. a local mock
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        // Reject garbage before the first request goes out
        url::Url::parse(base_url)?;
        let config = HttpClientConfig::builder().base_url(base_url).build();
        Ok(Self {
            http: HttpClient::with_config(config),
        })
    }

    /// Create a client over a pre-configured HTTP transport
    pub fn with_http(http: HttpClient) -> Self {
        Self { http }
    }
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for TodoClient {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<PageFetch> {
        let request = RequestConfig::new()
            .query("_page", page.to_string())
            .query("_limit", page_size.to_string());

        let response = self.http.get_with_config("/todos", request).await?;

        // Absent or unparseable headers both mean "no total available"
        let total_count = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());

        let body = response.text().await?;
        let records: Vec<Todo> = serde_json::from_str(&body)
            .map_err(|e| Error::malformed(format!("expected a JSON array of to-dos: {e}")))?;

        debug!(
            page,
            count = records.len(),
            total = ?total_count,
            "fetched to-do page"
        );

        Ok(PageFetch {
            records,
            total_count,
        })
    }
}

impl std::fmt::Debug for TodoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoClient")
            .field("http", &self.http)
            .finish()
    }
}
