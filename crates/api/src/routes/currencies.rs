//! Currency collection routes.
//!
//! The five CRUD operations over the in-memory store, with the wire-level
//! error bodies clients depend on (`Resource not found`, `Content missing`,
//! `Currency not found`).

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use ratebook_shared::CurrencyId;
use ratebook_store::CreateCurrencyInput;

use crate::AppState;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_currencies).post(create_currency))
        .route("/{id}", get(get_currency).delete(delete_currency))
        .route("/{id}/{new_rate}", put(update_conversion_rate))
}

/// Request body for creating a currency.
///
/// Every field is optional on the wire; the store decides what counts as
/// missing, so an incomplete payload gets the `Content missing` response
/// rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCurrencyRequest {
    /// Caller-assigned id, if any.
    pub id: Option<CurrencyId>,
    /// Currency code.
    pub currency_code: Option<String>,
    /// Country name.
    pub country: Option<String>,
    /// Conversion rate against the base currency.
    pub conversion_rate: Option<f64>,
}

/// GET `/` - List all currency records.
async fn list_currencies(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list())
}

/// GET `/{id}` - Get one currency record by id.
async fn get_currency(
    State(state): State<AppState>,
    Path(id): Path<CurrencyId>,
) -> impl IntoResponse {
    match state.store.get(id) {
        Ok(record) => (StatusCode::OK, Json(json!(record))).into_response(),
        Err(e) => {
            debug!(%id, error = %e, "Currency lookup failed");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Resource not found" })),
            )
                .into_response()
        }
    }
}

/// POST `/` - Store a new currency record.
async fn create_currency(
    State(state): State<AppState>,
    Json(payload): Json<CreateCurrencyRequest>,
) -> impl IntoResponse {
    let input = CreateCurrencyInput {
        id: payload.id,
        currency_code: payload.currency_code,
        country: payload.country,
        conversion_rate: payload.conversion_rate,
    };

    match state.store.create(input) {
        Ok(record) => {
            info!(code = %record.currency_code, "Currency created");
            (StatusCode::OK, Json(json!(record))).into_response()
        }
        Err(e) => {
            debug!(error = %e, "Currency payload rejected");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Content missing" })),
            )
                .into_response()
        }
    }
}

/// PUT `/{id}/{new_rate}` - Replace the conversion rate of a currency.
///
/// Every record sharing `id` gets the new rate; the first one is returned.
async fn update_conversion_rate(
    State(state): State<AppState>,
    Path((id, new_rate)): Path<(CurrencyId, f64)>,
) -> impl IntoResponse {
    match state.store.update_rate(id, new_rate) {
        Ok(record) => {
            info!(%id, rate = new_rate, "Conversion rate updated");
            (StatusCode::OK, Json(json!(record))).into_response()
        }
        Err(e) => {
            debug!(%id, error = %e, "Rate update failed");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Currency not found" })),
            )
                .into_response()
        }
    }
}

/// DELETE `/{id}` - Remove a currency record.
///
/// Responds 204 whether or not anything matched.
async fn delete_currency(State(state): State<AppState>, Path(id): Path<CurrencyId>) -> StatusCode {
    state.store.delete(id);
    StatusCode::NO_CONTENT
}
