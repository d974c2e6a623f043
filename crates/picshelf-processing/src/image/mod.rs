pub mod processor;
pub mod resize;
pub mod transformer;

pub use processor::ImageProcessor;
pub use resize::fit_inside;
pub use transformer::{ImageTransformer, TransformedImage};
