use std::env;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Gateway Config
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "dist";
pub const DEFAULT_UPSTREAM_BASE: &str = "https://api.elevenlabs.io";

/// Process configuration, read once at startup and injected into handlers.
///
/// `agent_id` and `api_key` are optional here: the server boots without them
/// and the endpoints that need them fail per-request instead.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub agent_id: Option<String>,
    /// ElevenLabs API key. Secret: must never appear in responses or logs.
    pub api_key: Option<String>,
    pub port: u16,
    pub static_dir: PathBuf,
    pub upstream_base: String,
}

impl GatewayConfig {
    /// Builds a config from the current process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            agent_id: non_empty_var("AGENT_ID"),
            api_key: non_empty_var("XI_API_KEY"),
            port,
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR)),
            upstream_base: env::var("ELEVENLABS_API_BASE")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE.to_string()),
        })
    }

    /// Returns the agent id and API key when both are configured.
    ///
    /// The signed-URL proxy requires both; either one absent or empty is a
    /// configuration error, not a transient failure.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.agent_id.as_deref(), self.api_key.as_deref()) {
            (Some(id), Some(key)) if !id.is_empty() && !key.is_empty() => Some((id, key)),
            _ => None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> GatewayConfig {
        GatewayConfig {
            agent_id: Some("agent-1".into()),
            api_key: Some("key-1".into()),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            upstream_base: DEFAULT_UPSTREAM_BASE.to_string(),
        }
    }

    #[test]
    fn credentials_present() {
        let config = base_config();
        assert_eq!(config.credentials(), Some(("agent-1", "key-1")));
    }

    #[test]
    fn credentials_missing_either_field() {
        let mut config = base_config();
        config.api_key = None;
        assert_eq!(config.credentials(), None);

        let mut config = base_config();
        config.agent_id = None;
        assert_eq!(config.credentials(), None);
    }

    #[test]
    fn credentials_empty_counts_as_missing() {
        let mut config = base_config();
        config.api_key = Some(String::new());
        assert_eq!(config.credentials(), None);
    }

    #[test]
    fn from_env_defaults() {
        for name in ["PORT", "STATIC_DIR", "ELEVENLABS_API_BASE"] {
            env::remove_var(name);
        }
        let config = GatewayConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(config.upstream_base, DEFAULT_UPSTREAM_BASE);
    }
}
