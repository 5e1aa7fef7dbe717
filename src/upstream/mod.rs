//! Upstream gist store integration.
//!
//! # Data Flow
//! ```text
//! Environment variable (GITHUB_TOKEN)
//!     → config snapshot (checked by the validator)
//!     → client.rs (single GET or PATCH per invocation)
//!     → GitHub Gist API
//! ```
//!
//! # Security Constraints
//! - The token ONLY comes from the environment; it is never logged and
//!   never appears in any response body
//! - Exactly one outbound call per invocation; no retries, no batching

pub mod client;

pub use client::GistClient;
