use std::sync::Arc;

use anyhow::Context;
use scoring::models::ScoringConfig;
use snapshot::JsonFileSource;

mod config;
mod error;
mod features;
mod openapi;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting leaderboard API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!("Loading snapshot from {}", config.snapshot_path.display());
    let source = Arc::new(JsonFileSource::new(&config.snapshot_path));
    let state = AppState::load(source, ScoringConfig::default())
        .await
        .context("Failed to load competition snapshot")?;
    tracing::info!("Snapshot loaded");

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, routes::app(state))
        .await
        .context("Server error")?;

    Ok(())
}
