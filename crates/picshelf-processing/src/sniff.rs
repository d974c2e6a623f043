//! Content type detection from magic bytes.
//!
//! The client's declared type is never trusted past the transport check; what
//! gets stored and recorded is whatever the leading bytes say.

use picshelf_core::constants::DEFAULT_EXTENSION;

use crate::error::ProcessingError;

/// Detected type of an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SniffedType {
    pub mime: &'static str,
    pub extension: &'static str,
}

/// Detect the real type of `data`, accepting only images.
pub fn sniff_image(data: &[u8]) -> Result<SniffedType, ProcessingError> {
    let kind = infer::get(data).ok_or(ProcessingError::UnrecognizedContent)?;

    if !matches!(kind.matcher_type(), infer::MatcherType::Image)
        || !kind.mime_type().starts_with("image/")
    {
        return Err(ProcessingError::NotAnImage(kind.mime_type().to_string()));
    }

    let extension = if kind.extension().is_empty() {
        DEFAULT_EXTENSION
    } else {
        kind.extension()
    };

    Ok(SniffedType {
        mime: kind.mime_type(),
        extension,
    })
}
