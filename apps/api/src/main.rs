mod config;
mod errors;
mod hierarchy;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::hierarchy::registry::HierarchyRegistry;
use crate::hierarchy::seeds::SeedTable;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hierarchy API v{}", env!("CARGO_PKG_VERSION"));

    // Similarity backend for approximate title matching (HIERARCHY_SIMILARITY)
    let registry = Arc::new(HierarchyRegistry::new(config.similarity.build().into()));
    info!("Similarity backend: {}", registry.similarity_name());

    // Seeds are optional; a bad seed file degrades to staged search only
    if let Some(path) = &config.seed_path {
        match SeedTable::from_json_path(path) {
            Ok(seeds) => registry.set_seeds(seeds).await,
            Err(e) => warn!("Ignoring seed file {}: {e}", path.display()),
        }
    }

    // Startup load; on failure the service runs unloaded and answers unknown
    if let Some(path) = &config.hierarchy_csv_path {
        if let Err(e) = registry.load_path(path, &config.column_layout()).await {
            warn!("Hierarchy not loaded at startup: {e}");
        }
    }

    let state = AppState {
        registry,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the HR portal host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
