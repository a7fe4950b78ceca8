//! Command echo handler.
//!
//! Performs no interpretation: the command is validated, logged, and echoed
//! back with a timestamp. A placeholder until commands are routed into the
//! agent itself.

use axum::body::Bytes;
use axum::Json;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{error, info};

use crate::dto::{ProcessCommandRequest, ProcessCommandResponse};
use crate::error::ApiError;

/// POST /api/process-command - Validate and echo a free-form command.
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// that an absent body and an absent `command` key both map to the same
/// 400 response shape. An empty or whitespace command counts as missing.
pub async fn process(body: Bytes) -> Result<Json<ProcessCommandResponse>, ApiError> {
    let command = parse_command(&body)?.ok_or(ApiError::InvalidCommand)?;

    info!("Received command: {}", command);

    let timestamp = OffsetDateTime::now_utc().format(&Rfc3339).map_err(|e| {
        error!("Failed to format command timestamp: {}", e);
        ApiError::CommandFailed
    })?;

    Ok(Json(ProcessCommandResponse {
        original_command: command,
        timestamp,
        processed: true,
    }))
}

fn parse_command(body: &[u8]) -> Result<Option<String>, ApiError> {
    if body.is_empty() {
        return Ok(None);
    }

    let request: ProcessCommandRequest = serde_json::from_slice(body).map_err(|e| {
        error!("Error processing command: {}", e);
        ApiError::CommandFailed
    })?;

    Ok(request.command.filter(|c| !c.trim().is_empty()))
}
