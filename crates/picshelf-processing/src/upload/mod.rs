//! Per-file upload pipeline: sniff, then transform on the blocking pool.

mod pipeline;

pub use pipeline::{ImagePipeline, PreparedImage};
