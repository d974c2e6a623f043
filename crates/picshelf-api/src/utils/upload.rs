//! Multipart extraction for image uploads
//!
//! Everything here runs before any image is decoded: a request that breaks a
//! transport rule is rejected as a whole and nothing is written.

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::{Bytes, BytesMut};
use picshelf_core::AppError;
use picshelf_processing::MediaValidator;

use crate::constants::{MAX_ORIGINAL_NAME_LENGTH, UNKNOWN_ORIGINAL_NAME, UPLOAD_FIELD};

/// One file part of an upload request
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub original_name: String,
    pub data: Bytes,
}

/// Collect every file in the `images` field, enforcing count, size and
/// declared type. Parts under other field names are ignored.
pub async fn extract_image_files(
    mut multipart: Multipart,
    validator: &MediaValidator,
) -> Result<Vec<IncomingFile>, AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        validator.validate_next_file(files.len())?;

        let declared_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());
        validator.validate_content_type(&declared_type)?;

        let original_name = original_name(field.file_name());
        let data = read_limited(field, validator).await?;

        files.push(IncomingFile {
            original_name,
            data,
        });
    }

    validator.validate_file_count(files.len())?;
    Ok(files)
}

/// Read a field chunk by chunk, failing as soon as it exceeds the per-file cap.
async fn read_limited(
    mut field: Field<'_>,
    validator: &MediaValidator,
) -> Result<Bytes, AppError> {
    let mut buffer = BytesMut::new();

    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        validator.validate_file_size(buffer.len() + chunk.len())?;
        buffer.extend_from_slice(&chunk);
    }

    Ok(buffer.freeze())
}

fn original_name(file_name: Option<&str>) -> String {
    let name = file_name.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return UNKNOWN_ORIGINAL_NAME.to_string();
    }
    name.chars().take(MAX_ORIGINAL_NAME_LENGTH).collect()
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(format!("Failed to read multipart body: {}", err.body_text()))
    }
}
