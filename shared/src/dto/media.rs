use serde::{Deserialize, Serialize};

use super::id::RecordId;

/// Published media entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaItem {
    pub id: RecordId,
    pub file_name: String,
    pub original_file_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// `GET /media/published` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaListResponse {
    pub media: Vec<MediaItem>,
}

/// `POST /media/upload` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaUploadResponse {
    pub media: UploadedMedia,
}

/// The stored record returned after an upload; only the id is read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadedMedia {
    pub id: RecordId,
}
