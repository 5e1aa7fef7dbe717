//! HTTP client for the upstream gist store.
//!
//! # Responsibilities
//! - Build the one outbound call an invocation is allowed
//! - Carry the credential and the versioned Accept header
//! - Unwrap the stored envelope on reads, defaulting when the file is
//!   missing or unparseable
//! - Surface upstream failures with their original status and message

use std::time::Duration;

use serde_json::Value;

use crate::config::schema::UpstreamConfig;
use crate::gist::types::{ProxyError, ProxyResult, ResourceKind, StoredEnvelope};

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Client for the upstream gist store.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct GistClient {
    http: reqwest::Client,
    api_base: String,
}

impl GistClient {
    /// Create a new client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> ProxyResult<Self> {
        let http = reqwest::Client::builder()
            // GitHub rejects requests without a User-Agent.
            .user_agent(concat!("gist-proxy/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn gist_url(&self, kind: ResourceKind) -> String {
        format!("{}/gists/{}", self.api_base, kind.gist_id())
    }

    /// Fetch the envelope stored for `kind`.
    ///
    /// A missing file or unparseable content yields the default empty
    /// envelope rather than an error; only upstream non-2xx statuses and
    /// transport failures are reported.
    pub async fn read_envelope(
        &self,
        kind: ResourceKind,
        token: &str,
    ) -> ProxyResult<StoredEnvelope> {
        let response = self
            .http
            .get(self.gist_url(kind))
            .header("Authorization", format!("token {}", token.trim()))
            .header("Accept", ACCEPT_HEADER)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(upstream_error(status, response.text().await.ok()));
        }

        let document: Value = response.json().await?;
        let envelope = document["files"][kind.filename()]["content"]
            .as_str()
            .and_then(|content| serde_json::from_str(content).ok())
            .unwrap_or_default();

        Ok(envelope)
    }

    /// Overwrite the file stored for `kind` with the serialized envelope.
    pub async fn write_envelope(
        &self,
        kind: ResourceKind,
        token: &str,
        envelope: &StoredEnvelope,
    ) -> ProxyResult<()> {
        let body = serde_json::json!({
            "files": {
                (kind.filename()): {
                    "content": serde_json::to_string_pretty(envelope)?,
                }
            }
        });

        let response = self
            .http
            .patch(self.gist_url(kind))
            .header("Authorization", format!("token {}", token.trim()))
            .header("Accept", ACCEPT_HEADER)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(upstream_error(status, response.text().await.ok()));
        }

        Ok(())
    }
}

/// Normalize an upstream non-2xx outcome into a `ProxyError`.
///
/// GitHub error bodies carry a `message` field; fall back to the status
/// reason when the body is absent or not JSON.
fn upstream_error(status: reqwest::StatusCode, body: Option<String>) -> ProxyError {
    let message = body
        .as_deref()
        .and_then(|text| serde_json::from_str::<Value>(text).ok())
        .and_then(|json| json["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("upstream request failed")
                .to_string()
        });

    ProxyError::Upstream {
        status: status.as_u16(),
        message,
    }
}
