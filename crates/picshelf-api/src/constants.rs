/// Multipart field that carries the uploaded images
pub const UPLOAD_FIELD: &str = "images";

/// Slack on top of `max_files * max_file_size` for multipart boundaries and headers
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Longest client filename kept in the ledger
pub const MAX_ORIGINAL_NAME_LENGTH: usize = 255;

/// Used when the client sends a file part without a filename
pub const UNKNOWN_ORIGINAL_NAME: &str = "unknown";
