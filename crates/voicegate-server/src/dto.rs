use serde::{Deserialize, Serialize};

// === HTTP DTOs ===

#[derive(Debug, Serialize)]
pub struct SignedUrlResponse {
    #[serde(rename = "signedUrl")]
    pub signed_url: String,
}

#[derive(Debug, Serialize)]
pub struct AgentIdResponse {
    #[serde(rename = "agentId")]
    pub agent_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProcessCommandRequest {
    #[serde(default)]
    pub command: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProcessCommandResponse {
    #[serde(rename = "originalCommand")]
    pub original_command: String,
    /// RFC 3339 UTC timestamp of when the command was received.
    pub timestamp: String,
    pub processed: bool,
}
