use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Stored and recorded in the ledger
    Accepted,
    /// Content is not a recognised image
    Skipped,
    /// Decoding or writing failed
    Failed,
}

/// Outcome for a single file of an upload batch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    pub original_name: String,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FileResult {
    pub fn accepted(original_name: impl Into<String>, id: Uuid) -> Self {
        Self {
            original_name: original_name.into(),
            status: FileStatus::Accepted,
            id: Some(id),
            reason: None,
        }
    }

    pub fn skipped(original_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            original_name: original_name.into(),
            status: FileStatus::Skipped,
            id: None,
            reason: Some(reason.into()),
        }
    }

    pub fn failed(original_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            original_name: original_name.into(),
            status: FileStatus::Failed,
            id: None,
            reason: Some(reason.into()),
        }
    }
}

/// Body of a successful `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub ok: bool,
    pub files: Vec<FileResult>,
}

impl UploadResponse {
    pub fn accepted_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Accepted)
            .count()
    }
}
