use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One accepted upload as stored in the ledger.
///
/// `size`, `width` and `height` describe the payload the client sent, not the
/// stored (possibly downscaled) variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub id: Uuid,
    /// Stored full-size filename under the upload directory
    pub filename: String,
    /// Stored thumbnail filename under the thumbnail directory
    pub thumb: String,
    /// Client-supplied filename, for display only
    pub original_name: String,
    /// Content type detected from the file bytes
    pub mime: String,
    pub size: u64,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl UploadRecord {
    pub fn new(
        filename: String,
        thumb: String,
        original_name: String,
        mime: String,
        size: u64,
        dimensions: Option<(u32, u32)>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename,
            thumb,
            original_name,
            mime,
            size,
            width: dimensions.map(|(w, _)| w),
            height: dimensions.map(|(_, h)| h),
            created_at: Utc::now(),
        }
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }
}
