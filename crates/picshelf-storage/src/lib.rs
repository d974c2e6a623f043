//! picshelf storage library
//!
//! Persists processed image bytes. Full-size images and thumbnails are kept in
//! two separate areas of the same backend, addressed by flat filenames.
//!
//! # Filename format
//!
//! - **Full-size**: `{24 hex chars}.{ext}`, from 12 CSPRNG bytes
//! - **Thumbnail**: `thumb-{full-size filename}`
//!
//! Filenames must not contain `..` or path separators. Writes never replace an
//! existing file.

pub mod keys;
pub mod local;
pub mod traits;

pub use keys::{generate_filename, thumbnail_filename};
pub use local::LocalStorage;
pub use traits::{ObjectKind, Storage, StorageError, StorageResult};
