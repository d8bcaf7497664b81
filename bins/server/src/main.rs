//! Ratebook API Server
//!
//! Main entry point for the currency-rate service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ratebook_api::{AppState, create_router};
use ratebook_shared::AppConfig;
use ratebook_store::CurrencyStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ratebook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Create the store, re-seeded with the default currencies on every start
    let store = CurrencyStore::seeded();
    info!(records = store.list().len(), "Currency store seeded");

    // Create application state
    let state = AppState {
        store: Arc::new(store),
    };

    // Create router
    let app = create_router(state, &config.api.prefix);
    if config.api.prefix.is_empty() {
        info!("Currency routes mounted at the server root");
    } else {
        info!(prefix = %config.api.prefix, "Currency routes mounted");
    }

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
