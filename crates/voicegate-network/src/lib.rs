//! ElevenLabs Conversational AI client for signed session URLs.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

const SIGNED_URL_PATH: &str = "/v1/convai/conversation/get_signed_url";
const API_KEY_HEADER: &str = "xi-api-key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

/// Failures of the outbound signed-URL call. None of these are retried;
/// the caller surfaces a generic message and the detail stays in the logs.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(reqwest::Error),

    #[error("upstream returned status {status}")]
    Status { status: u16 },

    #[error("upstream response missing signed_url")]
    MalformedBody,
}

// ─────────────────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SignedUrlBody {
    signed_url: String,
}

/// Client for the ElevenLabs signed-URL endpoint.
///
/// Holds one pooled `reqwest::Client` with a bounded request timeout. The
/// base URL is injectable so tests can stand in for the real API.
#[derive(Debug, Clone)]
pub struct SignedUrlClient {
    http: Client,
    base_url: String,
}

impl SignedUrlClient {
    /// Creates a client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Requests a signed conversational-session URL for `agent_id`.
    ///
    /// The API key travels in the `xi-api-key` header, never in the URL,
    /// so it cannot leak into request logs. Exactly one outbound call is
    /// made per invocation.
    pub async fn get_signed_url(
        &self,
        agent_id: &str,
        api_key: &str,
    ) -> Result<String, UpstreamError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), SIGNED_URL_PATH);

        let response = self
            .http
            .get(url)
            .query(&[("agent_id", agent_id)])
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let body: SignedUrlBody = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse signed-url response: {}", e);
            UpstreamError::MalformedBody
        })?;

        Ok(body.signed_url)
    }
}
