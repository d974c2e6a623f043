//! Image transformer - bounded full-size variant and square thumbnail

use bytes::Bytes;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

use super::processor::ImageProcessor;
use super::resize::fit_inside;
use crate::error::ProcessingError;
use crate::sniff::SniffedType;

/// Output of [`ImageTransformer::transform`]
#[derive(Debug, Clone)]
pub struct TransformedImage {
    /// Bytes to store as the full-size image
    pub full: Bytes,
    pub thumbnail: Bytes,
    /// Dimensions of the uploaded image, if the header could be read
    pub original_dimensions: Option<(u32, u32)>,
    /// Dimensions of `full`
    pub full_dimensions: Option<(u32, u32)>,
    /// Whether `full` was re-encoded rather than passed through
    pub resized: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ImageTransformer {
    max_dimension: u32,
    thumbnail_size: u32,
}

impl ImageTransformer {
    pub fn new(max_dimension: u32, thumbnail_size: u32) -> Self {
        Self {
            max_dimension,
            thumbnail_size,
        }
    }

    /// Produce the full-size variant and thumbnail for one upload.
    ///
    /// CPU-bound; call from a blocking context. Outputs are encoded in the
    /// sniffed format so stored extensions keep matching their content.
    pub fn transform(
        &self,
        data: Bytes,
        sniffed: &SniffedType,
    ) -> Result<TransformedImage, ProcessingError> {
        let format = ImageFormat::from_mime_type(sniffed.mime)
            .ok_or_else(|| ProcessingError::UnsupportedFormat(sniffed.mime.to_string()))?;

        let original_dimensions = ImageProcessor::dimensions(&data);
        let img = ImageProcessor::decode(&data)?;
        self.render(data, &img, original_dimensions, format)
    }

    /// Build both variants from an already decoded image.
    ///
    /// `original_dimensions` comes from the header; when it is missing the
    /// original bytes are kept as the full variant and only the thumbnail is made.
    fn render(
        &self,
        data: Bytes,
        img: &DynamicImage,
        original_dimensions: Option<(u32, u32)>,
        format: ImageFormat,
    ) -> Result<TransformedImage, ProcessingError> {
        let target = original_dimensions.and_then(|(w, h)| fit_inside(w, h, self.max_dimension));
        let (full, full_dimensions, resized) = match target {
            Some((width, height)) => {
                let resized = img.resize_exact(width, height, FilterType::Lanczos3);
                (encode(&resized, format)?, Some((width, height)), true)
            }
            None => (data, original_dimensions, false),
        };

        let thumb = img.resize_to_fill(
            self.thumbnail_size,
            self.thumbnail_size,
            FilterType::Lanczos3,
        );
        let thumbnail = encode(&thumb, format)?;

        Ok(TransformedImage {
            full,
            thumbnail,
            original_dimensions,
            full_dimensions,
            resized,
        })
    }
}

fn encode(img: &DynamicImage, format: ImageFormat) -> Result<Bytes, ProcessingError> {
    // JPEG has no alpha channel; the GIF and WebP encoders want 8-bit RGBA.
    let converted;
    let output = match format {
        ImageFormat::Jpeg => {
            converted = DynamicImage::ImageRgb8(img.to_rgb8());
            &converted
        }
        ImageFormat::Png => img,
        _ => {
            converted = DynamicImage::ImageRgba8(img.to_rgba8());
            &converted
        }
    };

    let mut buffer = Cursor::new(Vec::new());
    output
        .write_to(&mut buffer, format)
        .map_err(|e| ProcessingError::Encode(e.to_string()))?;
    Ok(Bytes::from(buffer.into_inner()))
}
