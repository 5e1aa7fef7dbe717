//! Gist Proxy Library
//!
//! A small relay fronting a whitelisted set of GitHub Gists: a frontend
//! posts `{gistType, method, content?}`, the proxy validates it against the
//! whitelist, performs exactly one upstream call with a server-held token,
//! and returns a normalized JSON response with permissive CORS headers.

pub mod config;
pub mod gist;
pub mod http;
pub mod lifecycle;
pub mod upstream;

pub use config::ProxyConfig;
pub use gist::{GistCommand, GistRequest, Operation, ProxyError, ResourceKind, StoredEnvelope};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
