//! Core types and error definitions for the gist relay.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Logical data category exposed to the frontend.
///
/// The set is closed: every kind maps to exactly one upstream gist ID and
/// one filename inside that gist. The mapping is fixed at compile time and
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Users,
    Posts,
    Tips,
    Resources,
}

impl ResourceKind {
    /// All whitelisted kinds.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Users,
        ResourceKind::Posts,
        ResourceKind::Tips,
        ResourceKind::Resources,
    ];

    /// Parse the wire name (`gistType` field). Anything outside the
    /// whitelist is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "users" => Some(Self::Users),
            "posts" => Some(Self::Posts),
            "tips" => Some(Self::Tips),
            "resources" => Some(Self::Resources),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Posts => "posts",
            Self::Tips => "tips",
            Self::Resources => "resources",
        }
    }

    /// Upstream gist ID this kind is pinned to.
    pub fn gist_id(&self) -> &'static str {
        match self {
            Self::Users => "ab5500b945df60aa28d096bdd1a92ec9",
            Self::Posts => "eaa6ddac14c387164a73dc1e1f8fcec3",
            Self::Tips => "e82bcf2938aecfac6931ef2a73187cc4",
            Self::Resources => "a0b2f46e61c1e2cc78318fb3def41b03",
        }
    }

    /// The single file inside the gist that holds this kind's data.
    pub fn filename(&self) -> &'static str {
        match self {
            Self::Users => "life-manager-users.json",
            Self::Posts => "life-manager-posts.json",
            Self::Tips => "life-manager-tips.json",
            Self::Resources => "life-manager-resources.json",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the caller wants done with the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Fetch the stored envelope (`GET` on the wire).
    Read,
    /// Overwrite the stored envelope (`PATCH` on the wire).
    Write,
}

impl Operation {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Self::Read),
            "PATCH" => Some(Self::Write),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "GET",
            Self::Write => "PATCH",
        }
    }
}

/// Raw inbound command, exactly as the frontend posts it.
///
/// All fields are optional so that missing-field errors are reported by the
/// validator rather than as a serde failure; a malformed body degrades to
/// the all-`None` default and fails validation the same way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GistCommand {
    #[serde(rename = "gistType")]
    pub gist_type: Option<String>,
    pub method: Option<String>,
    pub content: Option<Value>,
}

/// A validated command, ready for the upstream translator.
#[derive(Debug, Clone)]
pub struct GistRequest {
    pub kind: ResourceKind,
    pub operation: Operation,
    /// Records to store on a write. Always empty for reads; non-array
    /// `content` on writes is coerced to empty rather than rejected.
    pub payload: Vec<Value>,
}

/// The JSON wrapper persisted inside the upstream file.
///
/// The proxy always writes `success = true`; a missing or unparseable
/// stored file reads back as the default (empty) envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEnvelope {
    pub success: bool,
    pub data: Vec<Value>,
}

impl Default for StoredEnvelope {
    fn default() -> Self {
        Self {
            success: true,
            data: Vec::new(),
        }
    }
}

/// Errors that can occur while relaying a command.
///
/// Every variant maps to exactly one response status; nothing escapes the
/// handler without being converted to a normalized JSON body.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Required field absent from the inbound body.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// `gistType` is not in the whitelist.
    #[error("unknown gist type `{0}`")]
    UnknownKind(String),

    /// `method` is neither GET nor PATCH.
    #[error("unsupported method `{0}`")]
    UnsupportedOperation(String),

    /// The server-side token is not configured.
    #[error("upstream credential is not configured")]
    MissingCredential,

    /// The upstream store answered with a non-2xx status.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Network-level failure talking to the upstream store.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Envelope or request body could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProxyError {
    /// Response status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_) | Self::UnknownKind(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedOperation(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { status, .. } => StatusCode::from_u16(*status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Transport(_) | Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "success": false,
            "message": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}

/// Result type for relay operations.
pub type ProxyResult<T> = Result<T, ProxyError>;
