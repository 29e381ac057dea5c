mod access;
mod config;
mod error;
mod filter;
mod handlers;
mod metrics;
mod rate_limit;
mod state;
mod target;
mod upstream;

use clap::Parser; // for cli
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Args, Config};
use crate::state::AppState;

// this is main async function with tokio
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional, real environment wins
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // parse cli arguments (env fallbacks)
    let config = Config::from(Args::parse());

    // creating shared state
    let state = Arc::new(AppState::new(&config)?);
    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Proxy running on http://localhost:{}", config.port);
    info!("Rate limit: {} requests per minute", config.rate_limit);
    info!("Allowed hosts: {}", config.access.hosts().describe());
    if let Some(suffix) = config.access.api_suffix() {
        info!("Required endpoint suffix: {}", suffix);
    }
    match config.upstream_timeout {
        Some(timeout) => info!("Upstream timeout: {:?}", timeout),
        None => info!("Upstream timeout: none"),
    }

    axum::serve(listener, app).await?;
    Ok(())
}
