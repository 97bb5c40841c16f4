//! HTTP client for the timed-missions page.

use std::time::Duration;

use reqwest::Client;

use vbwatch_core::MissionRecord;

use crate::error::ScrapeError;
use crate::extract::parse_missions;
use crate::retry::retry_with_backoff;

/// Fetches the missions page and runs the extraction pipeline over it.
///
/// Transient failures (network errors, 429, 5xx) are retried with
/// exponential backoff up to `max_retries` additional attempts; a timeout
/// surfaces as a plain [`ScrapeError::Http`] like any other fetch failure.
pub struct MissionsClient {
    client: Client,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl MissionsClient {
    /// Creates a `MissionsClient` with configured timeout, `User-Agent`,
    /// and retry policy. `max_retries = 0` disables retries.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches `url` and returns the parsed mission records in page order.
    ///
    /// Fragments that fail the filter or the field extractor are dropped
    /// silently; an empty vec on a well-formed page simply means no
    /// missions are listed today.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`ScrapeError::UnexpectedStatus`] — any other non-2xx status
    ///   (5xx retried, 4xx not).
    /// - [`ScrapeError::Http`] — network or TLS failure after all retries
    ///   exhausted.
    pub async fn fetch_missions(&self, url: &str) -> Result<Vec<MissionRecord>, ScrapeError> {
        let html = self.fetch_page(url).await?;
        let missions = parse_missions(&html);
        tracing::debug!(count = missions.len(), url, "parsed missions from page");
        Ok(missions)
    }

    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.to_owned();
            async move {
                let response = self.client.get(&url).send().await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(ScrapeError::RateLimited { retry_after_secs });
                }

                if !status.is_success() {
                    return Err(ScrapeError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                Ok(response.text().await?)
            }
        })
        .await
    }
}
