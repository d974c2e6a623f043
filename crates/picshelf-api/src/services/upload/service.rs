use picshelf_core::models::{FileResult, UploadRecord, UploadResponse};
use picshelf_core::AppError;
use picshelf_storage::{generate_filename, thumbnail_filename, ObjectKind};

use super::types::FileFailure;
use crate::state::AppState;
use crate::utils::upload::IncomingFile;

/// Image upload service
///
/// Files of a batch are handled one after another. A file that cannot be
/// sniffed, decoded or written is reported and left out; the rest of the batch
/// carries on. The ledger is written once, after every file is done.
pub struct ImageUploadService<'a> {
    state: &'a AppState,
}

impl<'a> ImageUploadService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    #[tracing::instrument(skip(self, files), fields(file_count = files.len()))]
    pub async fn upload_batch(&self, files: Vec<IncomingFile>) -> Result<UploadResponse, AppError> {
        let mut results = Vec::with_capacity(files.len());
        // Newest first, like the ledger itself.
        let mut records = Vec::with_capacity(files.len());

        for file in files {
            let original_name = file.original_name.clone();
            match self.store_file(file).await {
                Ok(record) => {
                    results.push(FileResult::accepted(original_name, record.id));
                    records.insert(0, record);
                }
                Err(failure) => {
                    tracing::warn!(
                        original_name = %original_name,
                        error = %failure,
                        "File left out of upload batch"
                    );
                    results.push(failure.into_result(original_name));
                }
            }
        }

        let accepted = records.len();
        let total = self.state.ledger.append_batch(records).await?;

        tracing::info!(
            accepted,
            excluded = results.len() - accepted,
            ledger_total = total,
            "Upload batch committed"
        );

        Ok(UploadResponse {
            ok: true,
            files: results,
        })
    }

    async fn store_file(&self, file: IncomingFile) -> Result<UploadRecord, FileFailure> {
        let prepared = self.state.pipeline.prepare(file.data).await?;

        let filename = generate_filename(prepared.sniffed.extension);
        let thumb = thumbnail_filename(&filename);

        self.state
            .storage
            .put(ObjectKind::Image, &filename, prepared.transformed.full)
            .await?;
        self.state
            .storage
            .put(ObjectKind::Thumbnail, &thumb, prepared.transformed.thumbnail)
            .await?;

        Ok(UploadRecord::new(
            filename,
            thumb,
            file.original_name,
            prepared.sniffed.mime.to_string(),
            prepared.original_size,
            prepared.transformed.original_dimensions,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use image::{ImageFormat, RgbImage};
    use picshelf_core::models::FileStatus;
    use picshelf_core::Config;
    use picshelf_db::LedgerRepository;
    use picshelf_processing::{ImagePipeline, ImageTransformer, MediaValidator};
    use picshelf_storage::{LocalStorage, Storage, StorageError, StorageResult};
    use std::io::Cursor;
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Accepts full-size images but refuses every thumbnail.
    struct ThumbnailRefusingStorage;

    #[async_trait]
    impl Storage for ThumbnailRefusingStorage {
        async fn put(&self, kind: ObjectKind, filename: &str, data: Bytes) -> StorageResult<u64> {
            match kind {
                ObjectKind::Image => Ok(data.len() as u64),
                ObjectKind::Thumbnail => Err(StorageError::WriteFailed(format!(
                    "/var/data/thumbs/{}: no space left on device",
                    filename
                ))),
            }
        }

        async fn health_check(&self) -> StorageResult<()> {
            Ok(())
        }
    }

    fn state(temp: &TempDir, storage: Arc<dyn Storage>) -> AppState {
        AppState {
            config: Config::default(),
            storage,
            ledger: LedgerRepository::new(temp.path().join("images.json")),
            pipeline: ImagePipeline::new(ImageTransformer::new(64, 16)),
            validator: MediaValidator::new(1024 * 1024, 10),
        }
    }

    fn png_file(name: &str, width: u32, height: u32) -> IncomingFile {
        let img = RgbImage::from_pixel(width, height, image::Rgb([255, 200, 0]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        IncomingFile {
            original_name: name.to_string(),
            data: Bytes::from(buffer.into_inner()),
        }
    }

    fn text_file(name: &str) -> IncomingFile {
        IncomingFile {
            original_name: name.to_string(),
            data: Bytes::from_static(b"this is a shopping list"),
        }
    }

    #[tokio::test]
    async fn test_batch_skips_non_images_and_records_the_rest() {
        let temp = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp.path().join("up"), temp.path().join("up/thumbs"))
            .await
            .unwrap();
        let state = state(&temp, Arc::new(storage));

        let response = ImageUploadService::new(&state)
            .upload_batch(vec![
                png_file("first.png", 100, 50),
                text_file("list.png"),
                png_file("third.png", 20, 20),
            ])
            .await
            .unwrap();

        assert!(response.ok);
        let statuses: Vec<FileStatus> = response.files.iter().map(|f| f.status).collect();
        assert_eq!(
            statuses,
            vec![FileStatus::Accepted, FileStatus::Skipped, FileStatus::Accepted]
        );

        let records = state.ledger.load().await.unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.original_name.as_str()).collect();
        assert_eq!(names, vec!["third.png", "first.png"]);

        let first = &records[1];
        assert_eq!(first.dimensions(), Some((100, 50)));
        assert_eq!(first.mime, "image/png");
        assert!(first.filename.ends_with(".png"));
        assert_eq!(first.thumb, format!("thumb-{}", first.filename));
        assert!(temp.path().join("up").join(&first.filename).exists());
        assert!(temp.path().join("up/thumbs").join(&first.thumb).exists());
        assert_eq!(response.files[0].id, Some(first.id));
    }

    #[tokio::test]
    async fn test_undecodable_image_fails_alone() {
        let temp = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp.path().join("up"), temp.path().join("up/thumbs"))
            .await
            .unwrap();
        let state = state(&temp, Arc::new(storage));

        let mut truncated = png_file("broken.png", 64, 64);
        truncated.data = truncated.data.slice(..40);

        let response = ImageUploadService::new(&state)
            .upload_batch(vec![truncated, png_file("good.png", 32, 32)])
            .await
            .unwrap();

        assert!(response.ok);
        let statuses: Vec<FileStatus> = response.files.iter().map(|f| f.status).collect();
        assert_eq!(statuses, vec![FileStatus::Failed, FileStatus::Accepted]);
        assert!(response.files[0].id.is_none());
        assert!(response.files[0].reason.is_some());

        let records = state.ledger.load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].original_name, "good.png");
        assert_eq!(std::fs::read_dir(temp.path().join("up/thumbs")).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_storage_failure_excludes_file_without_leaking_paths() {
        let temp = TempDir::new().unwrap();
        let state = state(&temp, Arc::new(ThumbnailRefusingStorage));

        let response = ImageUploadService::new(&state)
            .upload_batch(vec![png_file("a.png", 10, 10)])
            .await
            .unwrap();

        assert!(response.ok);
        assert_eq!(response.files[0].status, FileStatus::Failed);
        let reason = response.files[0].reason.as_deref().unwrap();
        assert!(!reason.contains("/var/data"));
        assert!(state.ledger.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_batch_with_nothing_accepted_still_succeeds() {
        let temp = TempDir::new().unwrap();
        let state = state(&temp, Arc::new(ThumbnailRefusingStorage));

        let response = ImageUploadService::new(&state)
            .upload_batch(vec![text_file("x.png")])
            .await
            .unwrap();

        assert!(response.ok);
        assert_eq!(response.accepted_count(), 0);
        assert!(temp.path().join("images.json").exists());
    }

    #[tokio::test]
    async fn test_corrupt_ledger_fails_the_request() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("images.json"), "[{").unwrap();
        let state = state(&temp, Arc::new(ThumbnailRefusingStorage));

        let err = ImageUploadService::new(&state)
            .upload_batch(vec![text_file("x.png")])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Ledger(_)));
    }
}
