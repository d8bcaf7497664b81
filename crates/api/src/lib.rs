//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over the currency store
//! - The shared application state
//! - Router assembly, including the configurable mount prefix

pub mod routes;

use std::sync::Arc;

use axum::{Json, Router, http::StatusCode};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use ratebook_store::CurrencyStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory currency store.
    pub store: Arc<CurrencyStore>,
}

/// Creates the main application router.
///
/// `prefix` is the path the currency routes are nested under (e.g.
/// `/api/currency`); an empty or `/` prefix mounts them at the server root
/// instead.
pub fn create_router(state: AppState, prefix: &str) -> Router {
    let api_routes = routes::api_routes();

    let router = if prefix.is_empty() || prefix == "/" {
        Router::new().merge(api_routes)
    } else {
        Router::new().nest(prefix, api_routes)
    };

    router
        .merge(routes::health::routes())
        .fallback(unknown_endpoint)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Handler for requests that match no route.
async fn unknown_endpoint() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Unknown endpoint" })),
    )
}
