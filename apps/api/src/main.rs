mod analysis;
mod assessment;
mod config;
mod errors;
mod llm_client;
mod profile;
mod recommendations;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::LlmAnalysisBackend;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::store::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Crate name with hyphens is not a valid tracing target
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Waypoint API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client and the narrative analysis backend
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    let analysis = Arc::new(LlmAnalysisBackend::new(llm));
    info!("Analysis backend initialized (model: {})", llm_client::MODEL);

    // In-memory session store; sessions live only as long as the process
    let sessions = SessionStore::default();

    // Build app state
    let state = AppState { sessions, analysis };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
