//! picshelf processing library
//!
//! Everything that looks at uploaded bytes: transport-level checks on declared
//! metadata, content sniffing, and the resize/thumbnail transforms.

pub mod error;
pub mod image;
pub mod sniff;
pub mod upload;
pub mod validator;

pub use error::ProcessingError;
pub use self::image::{ImageProcessor, ImageTransformer, TransformedImage};
pub use sniff::{sniff_image, SniffedType};
pub use upload::{ImagePipeline, PreparedImage};
pub use validator::{MediaValidator, ValidationError};
