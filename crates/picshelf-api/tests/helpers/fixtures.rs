use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, 90])
    });
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, format)
        .expect("Failed to encode fixture image");
    buffer.into_inner()
}

/// Create a PNG of the given size
pub fn png(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Png)
}

/// Create a JPEG of the given size
pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Jpeg)
}

/// A PNG cut off after its header: sniffs as an image, fails to decode
pub fn truncated_png() -> Vec<u8> {
    let mut data = png(64, 64);
    data.truncate(40);
    data
}

/// Plain text that a client might mislabel as an image
pub fn text() -> Vec<u8> {
    b"Meeting notes\n- bring the projector\n- order lunch\n".to_vec()
}

/// Incompressible bytes of the given length
pub fn noise(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}
