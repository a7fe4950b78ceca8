//! Conversational-session handlers: the signed-URL proxy and the agent id.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::{error, warn};

use crate::dto::{AgentIdResponse, SignedUrlResponse};
use crate::error::ApiError;
use crate::ServerState;

/// GET /api/signed-url - Fetch a signed session URL from ElevenLabs.
///
/// Requires both credentials; without them the request fails before any
/// outbound call is made. Upstream failure detail is logged here and never
/// forwarded to the caller.
pub async fn signed_url(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<SignedUrlResponse>, ApiError> {
    let Some((agent_id, api_key)) = state.config.credentials() else {
        warn!("Signed URL requested but AGENT_ID/XI_API_KEY are not configured");
        return Err(ApiError::MissingConfig);
    };

    match state.upstream.get_signed_url(agent_id, api_key).await {
        Ok(signed_url) => Ok(Json(SignedUrlResponse { signed_url })),
        Err(e) => {
            error!("Failed to get signed URL: {}", e);
            Err(ApiError::Upstream)
        }
    }
}

/// GET /api/getAgentId - Expose the configured agent id, used for public agents.
pub async fn agent_id(State(state): State<Arc<ServerState>>) -> Json<AgentIdResponse> {
    Json(AgentIdResponse {
        agent_id: state.config.agent_id.clone(),
    })
}
