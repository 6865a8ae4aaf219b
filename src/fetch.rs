//! Page fetching
//!
//! Retrieves raw HTML for a single page with a fixed timeout and a
//! browser-like user agent. No retries, no crawling, single page only.

use std::time::Duration;

use tracing::{debug, info};

use crate::error::FetchError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default user agent; plain browser marker, as servers commonly reject
/// blank or obviously robotic agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Page fetching functionality
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Build a fetcher with the given timeout and user agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }

    /// Build a fetcher with the default timeout and user agent.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            DEFAULT_USER_AGENT,
        )
    }

    /// Fetch the page body as text.
    ///
    /// A non-success status is an error; the body is never inspected for
    /// content type, the structural parse downstream is best-effort anyway.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        info!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
