//! API error types and Axum response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Request-fatal errors with their wire representation.
///
/// Every failure converts to structured JSON at the endpoint boundary;
/// nothing propagates as an unstructured fault, and nothing is retried.
/// The signed-URL route reports failures under a `detail` key and the
/// command route under an `error` key; both shapes are part of the
/// inbound contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// AGENT_ID or XI_API_KEY absent or empty.
    MissingConfig,
    /// The outbound signed-URL call failed; the cause stays server-side.
    Upstream,
    /// Command body missing the required `command` field.
    InvalidCommand,
    /// Anything else that fails during command processing.
    CommandFailed,
}

#[derive(Serialize)]
struct DetailBody {
    detail: &'static str,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingConfig => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DetailBody {
                    detail: "Missing environment variables",
                }),
            )
                .into_response(),
            ApiError::Upstream => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DetailBody {
                    detail: "Failed to get signed URL",
                }),
            )
                .into_response(),
            ApiError::InvalidCommand => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "Command is required",
                }),
            )
                .into_response(),
            ApiError::CommandFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Failed to process command",
                }),
            )
                .into_response(),
        }
    }
}
