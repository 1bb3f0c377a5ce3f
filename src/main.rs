// SPDX-License-Identifier: MIT

//! AMSAL FC API Server
//!
//! Club-management backend: members, news, slider and club settings
//! persisted through a remote-KV-or-local-file document store.

use amsal_club::{config::Config, events::EventBus, store::DocumentStore, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env();
    tracing::info!(port = config.port, "Starting AMSAL FC API");

    // Initialize the document store (probes the remote KV, falls back
    // to local files) and seed default documents on first run
    let store = DocumentStore::connect(&config)
        .await
        .expect("Failed to initialize document store");
    tracing::info!(storage = store.storage_mode(), "Document store initialized");

    store.seed_defaults(&config).await;

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        events: EventBus::new(),
    });

    // Build router
    let app = amsal_club::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("amsal_club=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
