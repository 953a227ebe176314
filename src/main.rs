// SPDX-License-Identifier: MIT

//! HealthWell API Server
//!
//! Serves the wellness portal REST API: auth, patient goal tracking,
//! provider dashboards and public health content, backed by an injectable
//! in-memory store standing in for a real database.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wellness_portal::{
    config::Config,
    db::{seed::seed_demo_data, MemoryStore},
    services::ContentLibrary,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting HealthWell API");

    // Initialize the store and optionally load the demo dataset
    let db = MemoryStore::new();
    if config.seed_demo_data {
        seed_demo_data(&db).expect("Failed to seed demo data");
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        content: ContentLibrary::default(),
    });

    // Build router
    let app = wellness_portal::routes::create_router(state);

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
                .add_directive("wellness_portal=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
