use picshelf_core::AppError;

/// Transport-level validation errors for an upload request
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("No files uploaded")]
    NoFiles,

    #[error("Too many files: at most {max} files per upload")]
    TooManyFiles { max: usize },

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid content type: {content_type} (only images are accepted)")]
    InvalidContentType { content_type: String },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::FileTooLarge { max, .. } => AppError::PayloadTooLarge(format!(
                "File size exceeds maximum allowed size of {} MB",
                max / 1024 / 1024
            )),
            ValidationError::InvalidContentType { .. } => AppError::InvalidInput(err.to_string()),
            ValidationError::NoFiles | ValidationError::TooManyFiles { .. } => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}

/// Checks what the client declared about an upload before any byte is decoded.
///
/// Declared types are only a first filter; the real type is sniffed later.
#[derive(Debug, Clone)]
pub struct MediaValidator {
    max_file_size: usize,
    max_files: usize,
}

impl MediaValidator {
    pub fn new(max_file_size: usize, max_files: usize) -> Self {
        Self {
            max_file_size,
            max_files,
        }
    }

    /// Validate file size. Empty files pass here and are rejected by sniffing.
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }
        Ok(())
    }

    /// Validate that one more file still fits in the request.
    pub fn validate_next_file(&self, files_so_far: usize) -> Result<(), ValidationError> {
        if files_so_far >= self.max_files {
            return Err(ValidationError::TooManyFiles {
                max: self.max_files,
            });
        }
        Ok(())
    }

    pub fn validate_file_count(&self, count: usize) -> Result<(), ValidationError> {
        if count == 0 {
            return Err(ValidationError::NoFiles);
        }
        if count > self.max_files {
            return Err(ValidationError::TooManyFiles {
                max: self.max_files,
            });
        }
        Ok(())
    }

    /// Validate the declared content type. Parameters such as `; charset=` are ignored.
    pub fn validate_content_type(&self, content_type: &str) -> Result<(), ValidationError> {
        let normalized = content_type
            .split(';')
            .next()
            .map(|s| s.trim())
            .unwrap_or(content_type)
            .to_lowercase();

        if !normalized.starts_with("image/") || normalized.len() == "image/".len() {
            return Err(ValidationError::InvalidContentType {
                content_type: content_type.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picshelf_core::ErrorMetadata;

    fn validator() -> MediaValidator {
        MediaValidator::new(5 * 1024 * 1024, 10)
    }

    #[test]
    fn test_file_size_limit_is_inclusive() {
        let v = validator();
        assert!(v.validate_file_size(0).is_ok());
        assert!(v.validate_file_size(5 * 1024 * 1024).is_ok());
        let err = v.validate_file_size(5 * 1024 * 1024 + 1).unwrap_err();
        assert_eq!(AppError::from(err).http_status_code(), 413);
    }

    #[test]
    fn test_file_count_bounds() {
        let v = validator();
        assert!(matches!(
            v.validate_file_count(0),
            Err(ValidationError::NoFiles)
        ));
        assert!(v.validate_file_count(1).is_ok());
        assert!(v.validate_file_count(10).is_ok());
        assert!(v.validate_file_count(11).is_err());

        assert!(v.validate_next_file(9).is_ok());
        let err = v.validate_next_file(10).unwrap_err();
        assert_eq!(AppError::from(err).http_status_code(), 400);
    }

    #[test]
    fn test_content_type_prefix() {
        let v = validator();
        assert!(v.validate_content_type("image/png").is_ok());
        assert!(v.validate_content_type("IMAGE/JPEG").is_ok());
        assert!(v.validate_content_type("image/webp; q=0.9").is_ok());
        assert!(v.validate_content_type("image/").is_err());
        assert!(v.validate_content_type("text/plain").is_err());
        assert!(v.validate_content_type("application/octet-stream").is_err());
        assert!(v.validate_content_type("").is_err());
    }
}
