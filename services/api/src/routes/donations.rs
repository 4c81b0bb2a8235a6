//! Donation routes, mounted under `/api/donations`

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    error::ApiError,
    models::{MessageResponse, donation::NewDonation, food::MatchQuery},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/donations", get(list_donations).post(create_donation))
        .route("/api/donations/", get(list_donations).post(create_donation))
        .route("/api/donations/match", get(find_matches))
}

/// List every donation
pub async fn list_donations(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let donations = state.donations.list_donations().await?;
    Ok(Json(donations))
}

/// Record a donation
pub async fn create_donation(
    State(state): State<AppState>,
    Json(payload): Json<NewDonation>,
) -> Result<impl IntoResponse, ApiError> {
    state.donations.create_donation(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Donation created successfully")),
    ))
}

/// Suggest shelters; unparsable query strings are treated as empty
pub async fn find_matches(
    State(state): State<AppState>,
    query: Result<Query<MatchQuery>, QueryRejection>,
) -> impl IntoResponse {
    let query = query.map(|Query(query)| query).unwrap_or_default();
    Json(state.donations.find_matches(&query))
}
