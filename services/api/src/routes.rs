//! HTTP routes for the Waste Not API

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{error::ApiError, state::AppState};

pub mod donations;
pub mod food;
pub mod users;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .merge(donations::routes())
        .merge(food::routes())
        .merge(users::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness message
pub async fn home() -> impl IntoResponse {
    Json(json!({
        "message": "waste_not API is running"
    }))
}

/// Health check endpoint, including the database
pub async fn health_check(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let (status, label) = if state.donations.store_healthy().await? {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    Ok((
        status,
        Json(json!({
            "status": label,
            "service": "waste-not-api"
        })),
    ))
}
