//! Inbound command validation.
//!
//! # Responsibilities
//! - Reject commands missing required fields
//! - Enforce the resource whitelist and the GET/PATCH method set
//! - Require the upstream credential before any outbound call is built
//! - Coerce write payloads to a record sequence
//!
//! # Design Decisions
//! - Pure function of the command + a config snapshot; no side effects
//! - Non-array write content is coerced to empty, not rejected, matching
//!   the stored envelope's "sequence of records" shape

use serde_json::Value;

use crate::gist::types::{GistCommand, GistRequest, Operation, ProxyError, ResourceKind};

/// Validate a raw command against the whitelist and credential snapshot.
///
/// The credential is checked here, before any upstream call is attempted,
/// so a misconfigured deployment fails fast with a configuration error
/// rather than an opaque upstream 401.
pub fn validate_command(
    command: GistCommand,
    credential: Option<&str>,
) -> Result<GistRequest, ProxyError> {
    let gist_type = command
        .gist_type
        .ok_or(ProxyError::MissingField("gistType"))?;
    let method = command.method.ok_or(ProxyError::MissingField("method"))?;

    let kind = ResourceKind::parse(&gist_type).ok_or(ProxyError::UnknownKind(gist_type))?;
    let operation =
        Operation::parse(&method).ok_or(ProxyError::UnsupportedOperation(method))?;

    match credential {
        Some(token) if !token.trim().is_empty() => {}
        _ => return Err(ProxyError::MissingCredential),
    }

    let payload = match operation {
        Operation::Write => match command.content {
            Some(Value::Array(records)) => records,
            _ => Vec::new(),
        },
        Operation::Read => Vec::new(),
    };

    Ok(GistRequest {
        kind,
        operation,
        payload,
    })
}
