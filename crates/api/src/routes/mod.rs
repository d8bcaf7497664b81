//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod currencies;
pub mod health;

/// Creates the currency API router.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(currencies::routes())
}
