/// Target size for fitting `width`x`height` inside a `max`x`max` box.
///
/// Returns `None` when the image already fits, so callers can keep the
/// original bytes. Aspect ratio is preserved and images are never upscaled.
pub fn fit_inside(width: u32, height: u32, max: u32) -> Option<(u32, u32)> {
    if width <= max && height <= max {
        return None;
    }

    let scale = max as f64 / width.max(height) as f64;
    let scaled = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, max);

    if width >= height {
        Some((max, scaled(height)))
    } else {
        Some((scaled(width), max))
    }
}
