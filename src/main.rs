// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PUBG Stats Bot API Server
//!
//! Receives Discord interactions, keeps the Discord user → PUBG account
//! mapping, and answers with stats fetched from the PUBG API.

use pubg_stats_bot::{config::Config, db::PlayerStore, services::PubgClient, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting PUBG stats bot");

    // Open the player store
    let store = PlayerStore::open(&config.player_data_path).await?;
    let registered = store.stats().await.total_users;
    tracing::info!(
        path = %config.player_data_path.display(),
        registered,
        "Player store loaded"
    );

    // Initialize PUBG client
    let pubg = PubgClient::from_config(&config)?;
    tracing::info!(
        api_url = %config.pubg_api_url,
        shard = %config.default_shard,
        timeout_secs = config.http_timeout.as_secs(),
        "PUBG client initialized"
    );

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), store, Arc::new(pubg)));

    // Build router
    let app = pubg_stats_bot::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pubg_stats_bot=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
