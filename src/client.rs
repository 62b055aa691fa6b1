//! Snapshot fetch round trip.
//!
//! [`SnapshotFetcher`] owns the HTTP client and provider configuration
//! and performs exactly one `generateContent` call per
//! [`fetch_market_snapshot`](SnapshotFetcher::fetch_market_snapshot)
//! invocation: no retries, no caching, no shared state between calls.
//! Callers that want a timeout wrap the future themselves.

use tracing::{debug, error, info};

use crate::config::GeminiConfig;
use crate::models::snapshot::MarketSnapshot;
use crate::prompt;
use crate::provider::{GenerateContentRequest, GenerateContentResponse};
use crate::{HarshadError, Result};

/// Client for the market snapshot endpoint.
///
/// Cheap to clone; concurrent fetches are independent of each other.
#[derive(Debug, Clone)]
pub struct SnapshotFetcher {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl SnapshotFetcher {
    /// Builds a fetcher around one provider configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HarshadError::Http`] if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// Fetches one market snapshot from the provider.
    ///
    /// Interpolates today's date into the instruction prompt, performs a
    /// single `generateContent` round trip with web search and the
    /// response schema enabled, parses the returned JSON payload, and
    /// attaches grounding citations as [`MarketSnapshot::sources`].
    ///
    /// # Errors
    ///
    /// - [`HarshadError::Http`] if the round trip fails
    /// - [`HarshadError::Provider`] if the provider rejects the request
    /// - [`HarshadError::EmptyResponse`] if the answer carries no text
    /// - [`HarshadError::Json`] if the text is not a valid snapshot
    pub async fn fetch_market_snapshot(&self) -> Result<MarketSnapshot> {
        let prompt = prompt::snapshot_prompt(&prompt::current_date_display());
        let request = GenerateContentRequest::market_snapshot(prompt);
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_url, self.config.model
        );

        debug!(model = %self.config.model, "requesting market snapshot");

        let mut call = self.http.post(&url).json(&request);
        if let Some(key) = &self.config.api_key {
            call = call.header("x-goog-api-key", key.as_str());
        }
        let response = call.send().await.map_err(|e| {
            error!(error = %e, "snapshot request failed to reach the provider");
            HarshadError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = provider_error_message(&body).unwrap_or(body);
            error!(%status, "snapshot request rejected by provider");
            return Err(HarshadError::Provider(format!("{status}: {message}")));
        }

        let body: GenerateContentResponse = response.json().await?;
        let snapshot = parse_snapshot(&body)?;

        info!(
            date = %snapshot.date,
            sources = snapshot.sources.len(),
            "fetched market snapshot"
        );
        Ok(snapshot)
    }
}

/// Extracts and validates the snapshot carried by a provider response.
///
/// This is the pure half of the fetch: everything after the HTTP round
/// trip happens here. Empty text fails with
/// [`HarshadError::EmptyResponse`]; malformed JSON or a missing required
/// section fails with [`HarshadError::Json`]. No field is ever defaulted.
pub fn parse_snapshot(response: &GenerateContentResponse) -> Result<MarketSnapshot> {
    let text = response
        .text()
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| {
            error!("provider response carried no snapshot text");
            HarshadError::EmptyResponse("provider response carried no text".to_string())
        })?;

    let mut snapshot: MarketSnapshot = serde_json::from_str(&text).map_err(|e| {
        error!(error = %e, "provider returned a malformed snapshot payload");
        HarshadError::Json(e)
    })?;

    snapshot.sources = response.sources();
    Ok(snapshot)
}

/// Pulls `error.message` out of a provider error body, if present.
fn provider_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value["error"]["message"].as_str().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_message_extracts_the_reason() {
        let body = r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
        assert_eq!(
            provider_error_message(body).as_deref(),
            Some("API key not valid")
        );
    }

    #[test]
    fn provider_error_message_tolerates_non_json_bodies() {
        assert_eq!(provider_error_message("<html>502</html>"), None);
        assert_eq!(provider_error_message(""), None);
        assert_eq!(provider_error_message(r#"{"unrelated":true}"#), None);
    }
}
