//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address parseable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ProxyConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidApiBase(String),
    ZeroTimeout(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address `{}` is not a socket address", addr)
            }
            Self::InvalidApiBase(base) => {
                write!(f, "upstream.api_base `{}` must be an http(s) URL", base)
            }
            Self::ZeroTimeout(field) => write!(f, "{} must be greater than zero", field),
        }
    }
}

/// Check the whole config, collecting every problem.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let base = &config.upstream.api_base;
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        errors.push(ValidationError::InvalidApiBase(base.clone()));
    }

    if config.upstream.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.request_timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
