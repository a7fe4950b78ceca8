mod dto;
mod error;
mod handlers;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use voicegate_config::GatewayConfig;
use voicegate_network::SignedUrlClient;

pub struct ServerState {
    pub config: GatewayConfig,
    pub upstream: SignedUrlClient,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = GatewayConfig::from_env()?;
    if config.credentials().is_none() {
        warn!("AGENT_ID/XI_API_KEY not configured; /api/signed-url will fail until they are set");
    }

    let upstream = SignedUrlClient::new(config.upstream_base.clone())
        .context("failed to build upstream HTTP client")?;

    let port = config.port;
    let state = Arc::new(ServerState { config, upstream });
    let app = app(state);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn app(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let static_dir = state.config.static_dir.clone();
    let index = ServeFile::new(static_dir.join("index.html"));

    let api_routes = Router::new()
        .route("/api/signed-url", get(handlers::session::signed_url))
        .route("/api/getAgentId", get(handlers::session::agent_id))
        .route("/api/process-command", post(handlers::command::process))
        .layer(trace_layer);

    Router::new()
        .merge(api_routes)
        .route("/health", get(handlers::health))
        .nest_service("/static", ServeDir::new(&static_dir))
        .route_service("/", index)
        .layer(cors)
        .with_state(state)
}
