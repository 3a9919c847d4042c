//! Page fetching seam.
//!
//! The crawler consumes pages through the [`PageFetcher`] trait so the
//! traversal logic stays independent of the transport. Production code
//! uses [`HttpFetcher`]; tests substitute an in-memory implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::CrawlerConfig;

/// Retrieves raw page content for a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the document at `url` as text.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP-backed fetcher wrapping a configured [`reqwest::Client`].
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the configured user agent and timeout.
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(url, format!("HTTP status {status}")));
        }

        response.text().await.map_err(|e| AppError::fetch(url, e))
    }
}
