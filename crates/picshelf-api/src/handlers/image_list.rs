use std::sync::Arc;

use axum::{extract::State, Json};
use picshelf_core::models::UploadRecord;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// List every recorded upload, newest first.
#[utoipa::path(
    get,
    path = "/images",
    tag = "images",
    responses(
        (status = 200, description = "All upload records, newest first", body = Vec<UploadRecord>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_images"))]
pub async fn list_images(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UploadRecord>>, HttpAppError> {
    let records = state.ledger.load().await.map_err(picshelf_core::AppError::from)?;
    Ok(Json(records))
}
