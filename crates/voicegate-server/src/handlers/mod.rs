//! HTTP route handlers for the gateway.

pub mod command;
pub mod session;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}
