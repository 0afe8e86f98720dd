//! Survey Server - estate registry and drone survey planning backend

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use survey_server::{api, config::Config, persistence, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("survey_server=debug".parse()?);
    if config.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting Survey Server...");
    tracing::info!(
        "Grid traversal: {:?}, max tree height: {}m",
        config.grid_traversal,
        config.max_tree_height
    );

    let db = persistence::init_database(&config.database_path, config.database_max_connections)
        .await?;
    let port = config.server_port;
    let state = Arc::new(AppState::new(db, config));

    let app = api::routes()
        .with_state(state)
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Survey Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", err);
    }
}
