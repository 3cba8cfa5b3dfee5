//! Shared HTTP plumbing for the provider clients

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::GenerationError;
use super::error::is_retryable_status;

/// Maximum number of retries for transient errors
pub(crate) const MAX_RETRIES: u32 = 3;

/// Initial backoff delay for retries
pub(crate) const INITIAL_BACKOFF_MS: u64 = 1000;

/// Seconds to wait on a 429 without a usable `retry-after` header
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Build the HTTP client used by every provider
pub(crate) fn build_client(timeout: Duration) -> Result<Client, GenerationError> {
    Client::builder().timeout(timeout).build().map_err(GenerationError::Network)
}

/// Backoff before the given retry attempt (1-based)
pub(crate) fn backoff_for(attempt: u32) -> Duration {
    Duration::from_millis(INITIAL_BACKOFF_MS * 2u64.pow(attempt.saturating_sub(1)))
}

/// POST a JSON body, retrying network failures and retryable statuses
///
/// Returns the first successful response. A 429 is returned immediately as
/// `RateLimited`; other non-success statuses become `ApiError`.
pub(crate) async fn post_json(
    http: &Client,
    url: &str,
    body: &serde_json::Value,
    bearer: Option<&str>,
    timeout: Duration,
) -> Result<Response, GenerationError> {
    debug!(%url, "post_json: called");
    let mut last_error = None;

    for attempt in 0..=MAX_RETRIES {
        if attempt > 0 {
            let backoff = backoff_for(attempt);
            warn!(
                attempt,
                backoff_ms = backoff.as_millis() as u64,
                "post_json: retrying after transient error"
            );
            tokio::time::sleep(backoff).await;
        }

        let mut request = http.post(url).header("content-type", "application/json").json(body);
        if let Some(key) = bearer {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) if e.is_timeout() => {
                debug!(attempt, "post_json: request timed out");
                last_error = Some(GenerationError::Timeout(timeout));
                continue;
            }
            Err(e) => {
                debug!(attempt, error = %e, "post_json: network error");
                last_error = Some(GenerationError::Network(e));
                continue;
            }
        };

        let status = response.status().as_u16();

        if status == 429 {
            debug!("post_json: rate limited (429)");
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

            return Err(GenerationError::RateLimited {
                retry_after: Duration::from_secs(retry_after),
            });
        }

        if is_retryable_status(status) && attempt < MAX_RETRIES {
            let text = response.text().await.unwrap_or_default();
            debug!(attempt, status, "post_json: retryable error");
            last_error = Some(GenerationError::ApiError { status, message: text });
            continue;
        }

        if !response.status().is_success() {
            debug!(%status, "post_json: API error");
            let text = response.text().await.unwrap_or_default();
            return Err(GenerationError::ApiError { status, message: text });
        }

        debug!("post_json: success");
        return Ok(response);
    }

    Err(last_error.unwrap_or_else(|| GenerationError::InvalidResponse("Max retries exceeded".to_string())))
}

/// Read a successful response body as JSON
///
/// A body that does not decode is a malformed reply, not a transport failure.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, GenerationError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        debug!(error = %e, body_len = text.len(), "decode_json: malformed body");
        GenerationError::InvalidResponse(format!("Malformed response body: {}", e))
    })
}
