//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files and
//! default to a working local setup so a minimal (or absent) file is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for the gist proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream gist store settings.
    pub upstream: UpstreamConfig,

    /// Inbound timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream gist store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the gist API.
    pub api_base: String,

    /// Timeout for the single outbound call, in seconds.
    pub request_timeout_secs: u64,

    /// API token, merged in from the GITHUB_TOKEN environment variable.
    /// Never read from the config file and never serialized back out.
    #[serde(skip)]
    pub token: Option<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            request_timeout_secs: 30,
            token: None,
        }
    }
}

/// Inbound timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout enforced by the middleware stack, in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}
