//! Upload orchestration: turns a batch of validated files into stored images
//! and one ledger update.

mod service;
mod types;

pub use service::ImageUploadService;
pub use types::FileFailure;
