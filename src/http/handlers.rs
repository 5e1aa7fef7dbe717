//! Request handlers: validate, relay, normalize.
//!
//! # Responsibilities
//! - Degrade a malformed JSON body to the empty command (it then fails
//!   validation with a field error instead of a serde 422)
//! - Relay the validated command as the single outbound call
//! - Convert every failure into the normalized `{success, message}` body

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::gist::types::{GistCommand, Operation, ProxyError, StoredEnvelope};
use crate::gist::validate::validate_command;
use crate::http::server::AppState;
use crate::http::X_REQUEST_ID;

/// Liveness probe.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Main proxy handler: one inbound command, one upstream call.
pub async fn gist_handler(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
    body: Bytes,
) -> Response {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    // Mirror the lenient frontend contract: a body that is not a JSON
    // object is treated as an empty command and rejected by validation.
    let command: GistCommand = serde_json::from_slice(&body).unwrap_or_default();

    tracing::debug!(
        request_id = %request_id,
        gist_type = command.gist_type.as_deref().unwrap_or("-"),
        method = command.method.as_deref().unwrap_or("-"),
        "Relaying gist command"
    );

    match relay(&state, command).await {
        Ok(response) => response,
        Err(err) => {
            match &err {
                ProxyError::Upstream { status, message } => {
                    tracing::error!(
                        request_id = %request_id,
                        status = *status,
                        message = %message,
                        "Upstream rejected the call"
                    );
                }
                ProxyError::Transport(e) => {
                    tracing::error!(request_id = %request_id, error = %e, "Upstream unreachable");
                }
                ProxyError::MissingCredential => {
                    tracing::error!(request_id = %request_id, "Upstream credential not configured");
                }
                other => {
                    tracing::warn!(request_id = %request_id, error = %other, "Command rejected");
                }
            }
            err.into_response()
        }
    }
}

/// Validate and execute a single command.
async fn relay(state: &AppState, command: GistCommand) -> Result<Response, ProxyError> {
    let request = validate_command(command, state.config.upstream.token.as_deref())?;
    // Validation guarantees the token is present past this point.
    let token = state
        .config
        .upstream
        .token
        .as_deref()
        .ok_or(ProxyError::MissingCredential)?;

    match request.operation {
        Operation::Read => {
            let envelope = state.upstream.read_envelope(request.kind, token).await?;
            Ok((StatusCode::OK, Json(envelope)).into_response())
        }
        Operation::Write => {
            let envelope = StoredEnvelope {
                success: true,
                data: request.payload,
            };
            state
                .upstream
                .write_envelope(request.kind, token, &envelope)
                .await?;
            Ok((
                StatusCode::OK,
                Json(serde_json::json!({ "success": true })),
            )
                .into_response())
        }
    }
}
