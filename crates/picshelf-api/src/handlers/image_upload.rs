use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use picshelf_core::models::UploadResponse;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::ImageUploadService;
use crate::state::AppState;
use crate::utils::upload::extract_image_files;

/// Upload images handler
///
/// Accepts 1 to `MAX_FILES_PER_UPLOAD` files in the `images` multipart field.
/// The whole request is rejected if any file breaks the count, size or
/// declared-type rules. Past that point, files that turn out not to be images,
/// or that fail to process, are reported per file and the request still
/// succeeds.
///
/// # Errors
/// - `AppError::BadRequest` - No files, too many files, or malformed multipart
/// - `AppError::InvalidInput` - Declared content type is not `image/*`
/// - `AppError::PayloadTooLarge` - A file exceeds the per-file cap
/// - `AppError::Ledger` - The ledger could not be read or written
#[utoipa::path(
    post,
    path = "/upload",
    tag = "images",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Batch processed", body = UploadResponse),
        (status = 400, description = "Invalid upload request", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_images"))]
pub async fn upload_images(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let files = extract_image_files(multipart?, &state.validator).await?;

    tracing::debug!(
        file_count = files.len(),
        total_bytes = files.iter().map(|f| f.data.len()).sum::<usize>(),
        "Upload request accepted"
    );

    let response = ImageUploadService::new(&state).upload_batch(files).await?;

    Ok(Json(response))
}
