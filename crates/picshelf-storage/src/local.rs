use crate::keys::validate_filename;
use crate::traits::{ObjectKind, Storage, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalStorage {
    images_dir: PathBuf,
    thumbs_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance, creating both directories if needed.
    ///
    /// # Arguments
    /// * `images_dir` - Directory for full-size images (e.g. "./uploads")
    /// * `thumbs_dir` - Directory for thumbnails (e.g. "./uploads/thumbs")
    pub async fn new(
        images_dir: impl Into<PathBuf>,
        thumbs_dir: impl Into<PathBuf>,
    ) -> StorageResult<Self> {
        let images_dir = images_dir.into();
        let thumbs_dir = thumbs_dir.into();

        for dir in [&images_dir, &thumbs_dir] {
            fs::create_dir_all(dir).await.map_err(|e| {
                StorageError::ConfigError(format!(
                    "Failed to create storage directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        Ok(LocalStorage {
            images_dir,
            thumbs_dir,
        })
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    pub fn thumbs_dir(&self) -> &Path {
        &self.thumbs_dir
    }

    fn dir_for(&self, kind: ObjectKind) -> &Path {
        match kind {
            ObjectKind::Image => &self.images_dir,
            ObjectKind::Thumbnail => &self.thumbs_dir,
        }
    }

    fn path_for(&self, kind: ObjectKind, filename: &str) -> StorageResult<PathBuf> {
        validate_filename(filename)?;
        Ok(self.dir_for(kind).join(filename))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn put(&self, kind: ObjectKind, filename: &str, data: Bytes) -> StorageResult<u64> {
        let path = self.path_for(kind, filename)?;
        let size = data.len() as u64;
        let start = std::time::Instant::now();

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                if e.kind() == ErrorKind::AlreadyExists {
                    StorageError::AlreadyExists(path.display().to_string())
                } else {
                    StorageError::WriteFailed(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                }
            })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            kind = %kind,
            size_bytes = size,
            duration_ms = start.elapsed().as_millis() as u64,
            "File stored on local filesystem"
        );

        Ok(size)
    }

    async fn health_check(&self) -> StorageResult<()> {
        for dir in [&self.images_dir, &self.thumbs_dir] {
            let metadata = fs::metadata(dir).await.map_err(|e| {
                StorageError::ConfigError(format!("{} is not accessible: {}", dir.display(), e))
            })?;
            if !metadata.is_dir() {
                return Err(StorageError::ConfigError(format!(
                    "{} is not a directory",
                    dir.display()
                )));
            }
            if metadata.permissions().readonly() {
                return Err(StorageError::ConfigError(format!(
                    "{} is read-only",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}
