//! Waypoint Server - HTTP front end for mission generation

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use waygen_server::api;
use waygen_server::config::Config;
use waygen_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(config.log_json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.log_json).then(tracing_subscriber::fmt::layer))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("waygen_server=debug".parse()?))
        .init();

    tracing::info!("Starting waypoint server...");

    let addr = SocketAddr::new(config.bind_addr, config.server_port);
    let app = api::routes(&config).with_state(Arc::new(AppState::new(config)));

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
