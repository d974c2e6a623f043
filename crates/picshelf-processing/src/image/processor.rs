//! Image processor - header inspection and decoding

use image::{DynamicImage, ImageReader};
use std::io::Cursor;

use crate::error::ProcessingError;

pub struct ImageProcessor;

impl ImageProcessor {
    /// Read dimensions from the image header without decoding pixel data.
    pub fn dimensions(data: &[u8]) -> Option<(u32, u32)> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .ok()?;
        reader.into_dimensions().ok()
    }

    /// Fully decode the image.
    pub fn decode(data: &[u8]) -> Result<DynamicImage, ProcessingError> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| ProcessingError::Decode(e.to_string()))?;
        reader
            .decode()
            .map_err(|e| ProcessingError::Decode(e.to_string()))
    }
}
