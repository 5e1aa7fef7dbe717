//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → environment (GITHUB_TOKEN merged into the snapshot)
//!     → ProxyConfig (validated, immutable)
//!     → shared via Arc with every handler invocation
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no runtime reload
//! - All fields have defaults so an absent or empty file is valid
//! - The credential never lives in the file, only in the environment;
//!   its absence is reported per request, not as a startup crash

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, ProxyConfig, TimeoutConfig, UpstreamConfig};
