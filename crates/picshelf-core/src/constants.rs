//! Default limits and layout names.

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Per-file upload cap in megabytes.
pub const DEFAULT_MAX_FILE_SIZE_MB: usize = 5;

/// Files accepted in a single upload request.
pub const DEFAULT_MAX_FILES_PER_UPLOAD: usize = 10;

/// Upper bound for `MAX_FILES_PER_UPLOAD`.
pub const MAX_FILES_PER_UPLOAD_LIMIT: usize = 100;

/// Bounding box (in pixels) for the stored full-size variant.
pub const DEFAULT_MAX_IMAGE_DIMENSION: u32 = 2000;

/// Edge length of the square thumbnail.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 300;

pub const DEFAULT_UPLOAD_DIR: &str = "./uploads";
pub const DEFAULT_METADATA_FILE: &str = "./images.json";

/// Thumbnails live in this subdirectory of the upload directory.
pub const THUMBNAIL_SUBDIR: &str = "thumbs";

/// Prefix applied to a stored filename to name its thumbnail.
pub const THUMBNAIL_PREFIX: &str = "thumb-";

/// Extension used when the detected type has no canonical one.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Random bytes in a stored filename (hex-encoded, so twice as many chars).
pub const FILENAME_RANDOM_BYTES: usize = 12;
