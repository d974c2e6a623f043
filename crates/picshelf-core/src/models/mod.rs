pub mod upload_record;
pub mod upload_result;

pub use upload_record::UploadRecord;
pub use upload_result::{FileResult, FileStatus, UploadResponse};
