//! Filename generation shared by storage backends.
//!
//! Stored names carry no trace of the client-supplied name, so a file can only
//! be reached by someone who already knows its random name.

use picshelf_core::constants::{DEFAULT_EXTENSION, FILENAME_RANDOM_BYTES, THUMBNAIL_PREFIX};
use rand::Rng;

use crate::traits::{StorageError, StorageResult};

/// Allocate a random filename with the given extension.
///
/// An empty extension falls back to the default one.
pub fn generate_filename(extension: &str) -> String {
    let mut rng = rand::rng();
    let random_bytes: Vec<u8> = (0..FILENAME_RANDOM_BYTES).map(|_| rng.random()).collect();

    let extension = extension.trim_start_matches('.');
    let extension = if extension.is_empty() {
        DEFAULT_EXTENSION
    } else {
        extension
    };

    format!("{}.{}", hex::encode(random_bytes), extension)
}

/// Name of the thumbnail that belongs to a stored full-size file.
pub fn thumbnail_filename(filename: &str) -> String {
    format!("{}{}", THUMBNAIL_PREFIX, filename)
}

/// Reject names that could escape the storage directory.
pub fn validate_filename(filename: &str) -> StorageResult<()> {
    if filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains('\0')
    {
        return Err(StorageError::InvalidKey(format!(
            "'{}' is not a plain filename",
            filename
        )));
    }
    Ok(())
}
