//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid filename: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for picshelf_core::AppError {
    fn from(err: StorageError) -> Self {
        picshelf_core::AppError::Storage(err.to_string())
    }
}

/// Which area of the store a file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Image,
    Thumbnail,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectKind::Image => write!(f, "image"),
            ObjectKind::Thumbnail => write!(f, "thumbnail"),
        }
    }
}

/// Storage abstraction trait
///
/// The upload orchestrator only talks to this trait, so tests can swap in a
/// backend that fails on demand.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` under `filename`, returning the number of bytes written.
    ///
    /// Must fail with [`StorageError::AlreadyExists`] rather than replace an
    /// existing file.
    async fn put(&self, kind: ObjectKind, filename: &str, data: Bytes) -> StorageResult<u64>;

    /// Verify the backend is usable (directories present and writable)
    async fn health_check(&self) -> StorageResult<()>;
}
