use picshelf_core::models::FileResult;
use picshelf_processing::ProcessingError;
use picshelf_storage::StorageError;

/// Why a single file of a batch did not make it into the ledger
#[derive(Debug, thiserror::Error)]
pub enum FileFailure {
    /// Bytes are not an image; the file is skipped
    #[error("{0}")]
    Rejected(ProcessingError),

    #[error("{0}")]
    Processing(ProcessingError),

    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl From<ProcessingError> for FileFailure {
    fn from(err: ProcessingError) -> Self {
        if err.is_content_rejection() {
            FileFailure::Rejected(err)
        } else {
            FileFailure::Processing(err)
        }
    }
}

impl FileFailure {
    pub fn into_result(self, original_name: String) -> FileResult {
        match self {
            FileFailure::Rejected(err) => FileResult::skipped(original_name, err.to_string()),
            FileFailure::Processing(err) => FileResult::failed(original_name, err.to_string()),
            // Storage paths stay out of client responses.
            FileFailure::Storage(_) => FileResult::failed(original_name, "failed to store file"),
        }
    }
}
