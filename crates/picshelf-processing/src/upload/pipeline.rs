use bytes::Bytes;

use crate::error::ProcessingError;
use crate::image::{ImageTransformer, TransformedImage};
use crate::sniff::{sniff_image, SniffedType};

/// A file that passed sniffing and has both variants ready to store.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    pub sniffed: SniffedType,
    pub transformed: TransformedImage,
    /// Length of the uploaded payload
    pub original_size: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct ImagePipeline {
    transformer: ImageTransformer,
}

impl ImagePipeline {
    pub fn new(transformer: ImageTransformer) -> Self {
        Self { transformer }
    }

    /// Sniff and transform one uploaded file.
    ///
    /// Content rejections (see [`ProcessingError::is_content_rejection`]) are
    /// returned before any decoding work is scheduled.
    #[tracing::instrument(skip(self, data), fields(size_bytes = data.len()))]
    pub async fn prepare(&self, data: Bytes) -> Result<PreparedImage, ProcessingError> {
        let sniffed = sniff_image(&data)?;
        let original_size = data.len() as u64;
        let transformer = self.transformer;

        let start = std::time::Instant::now();
        let transformed = tokio::task::spawn_blocking(move || transformer.transform(data, &sniffed))
            .await
            .map_err(|e| ProcessingError::TaskFailed(e.to_string()))??;

        tracing::debug!(
            mime = sniffed.mime,
            resized = transformed.resized,
            duration_ms = start.elapsed().as_millis() as u64,
            "Image prepared"
        );

        Ok(PreparedImage {
            sniffed,
            transformed,
            original_size,
        })
    }
}
