//! Food upload routes, mounted under `/api/food`

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    response::IntoResponse,
    routing::post,
};
use tracing::{error, warn};

use crate::{error::ApiError, state::AppState};

/// Multipart field carrying the image
const IMAGE_FIELD: &str = "image";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/food/upload", post(upload_food))
        .layer(DefaultBodyLimit::disable())
}

/// Store an uploaded food image and return the detected label
pub async fn upload_food(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        warn!("Upload without a multipart body: {}", rejection);
        ApiError::MissingFile
    })?;

    let mut image = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart body: {}", e))
    })? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        // A part without a filename is a plain form value, not a file.
        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            continue;
        }

        let bytes = field.bytes().await.map_err(|e| {
            error!("Failed to read uploaded file {}: {}", filename, e);
            ApiError::BadRequest(format!("Failed to read uploaded file: {}", e))
        })?;
        image = Some((filename, bytes));
        break;
    }

    let (filename, bytes) = image.ok_or(ApiError::MissingFile)?;
    let response = state.food.upload_food(&filename, &bytes).await?;

    Ok(Json(response))
}
