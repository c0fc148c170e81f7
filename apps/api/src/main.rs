mod chat;
mod classifier;
mod clusters;
mod config;
mod errors;
mod institutes;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::new_session_store;
use crate::classifier::ClassifierService;
use crate::clusters::ClusterMap;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Kanasu API v{}", env!("CARGO_PKG_VERSION"));

    // Load the classifier artifact. Failure degrades readiness, never the
    // process: /predict answers 503 and everything else keeps working.
    let classifier = match ClassifierService::load(&config.model_path, &config.classes_path) {
        Ok(service) => Some(Arc::new(service)),
        Err(e) => {
            warn!("classifier artifact failed to load, /predict unavailable: {e}");
            None
        }
    };

    // Cluster map: configured file, or the compiled-in table.
    let clusters = Arc::new(ClusterMap::load_or_builtin(&config.cluster_map_path));

    // Generator gateway shared by institute search and chat.
    let gateway = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.chat_model.clone(),
    ));
    info!("LLM gateway initialized (model: {})", config.chat_model);

    let state = AppState {
        classifier,
        clusters,
        gateway,
        sessions: new_session_store(),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
