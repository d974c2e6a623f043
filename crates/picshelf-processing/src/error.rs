/// Per-file processing failures.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Content type could not be determined")]
    UnrecognizedContent,

    #[error("Content is {0}, not an image")]
    NotAnImage(String),

    #[error("No encoder for {0}")]
    UnsupportedFormat(String),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("Processing task failed: {0}")]
    TaskFailed(String),
}

impl ProcessingError {
    /// True when the bytes are not an image at all, as opposed to an image that
    /// could not be processed.
    pub fn is_content_rejection(&self) -> bool {
        matches!(
            self,
            ProcessingError::UnrecognizedContent | ProcessingError::NotAnImage(_)
        )
    }
}
