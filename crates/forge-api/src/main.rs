//! # forge-api: Binary Entry Point
//!
//! Starts the Axum HTTP server for Class Forge.
//! Binds to a configurable port (default 8080).

use anyhow::Context;
use forge_api::config::{AppConfig, LogFormat};
use forge_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("reading configuration")?;

    // Initialize structured tracing.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let port = config.port;
    let state = AppState::open(config).await.map_err(|e| {
        tracing::error!("Store initialization failed: {e}");
        e
    })?;
    tracing::info!(root = %state.handler.store().root().display(), "declaration store ready");

    let app = forge_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Class Forge API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
