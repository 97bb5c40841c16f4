//! Retry with exponential backoff for transient fetch failures.

use std::future::Future;
use std::time::Duration;

use crate::error::ScrapeError;

/// Returns `true` if `err` represents a transient condition worth retrying.
///
/// Retriable: network-level failures (timeouts included), HTTP 429, and
/// 5xx responses. Everything else (4xx) is propagated immediately since a
/// retry would return the same result.
fn is_retriable(err: &ScrapeError) -> bool {
    match err {
        ScrapeError::Http(_) | ScrapeError::RateLimited { .. } => true,
        ScrapeError::UnexpectedStatus { status, .. } => (500..600).contains(status),
    }
}

/// Executes `operation`, sleeping `backoff_base_secs * 2^attempt` seconds
/// between tries, up to `max_retries` additional attempts after the first.
/// Non-retriable errors and the final retriable error are returned as-is.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ScrapeError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScrapeError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                err
            }
        };

        // Cap the shift so extreme configs cannot overflow the multiply.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient fetch error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
