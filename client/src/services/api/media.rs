//! # Media Endpoints
//!
//! Authenticated upload (multipart) and the public published-media listing.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use shared::{MediaItem, MediaListResponse, MediaUploadResponse, RecordId};

use super::client::ApiClient;
use crate::core::error::{ApiError, Result};

/// Category used when the caller gives none.
pub const DEFAULT_CATEGORY: &str = "general";

/// Message shown after an upload is accepted.
pub const UPLOAD_ACCEPTED: &str = "Media uploaded successfully! Pending admin approval.";

/// A file to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime_type: Option<String>,
}

impl MediaUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Read a file from disk, guessing the MIME type from its extension.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let upload = Self::new(file_name, bytes);
        Ok(match guess_mime_type(path) {
            Some(mime) => upload.with_mime_type(mime),
            None => upload,
        })
    }

    fn into_part(self) -> Result<Part> {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        match self.mime_type {
            Some(mime) => Ok(part.mime_str(&mime)?),
            None => Ok(part),
        }
    }
}

fn guess_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "pdf" => "application/pdf",
        _ => return None,
    };
    Some(mime)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub message: String,
    pub media_id: RecordId,
}

/// Upload a media file on behalf of the logged-in user.
///
/// Without a stored token this returns the login-required error and sends
/// nothing. Empty `category`/`description` fall back to `"general"`/`""`.
#[tracing::instrument(skip(client, file), fields(file_name = %file.file_name, size = file.bytes.len()))]
pub async fn upload_media(
    client: &ApiClient,
    file: MediaUpload,
    category: Option<&str>,
    description: Option<&str>,
) -> Result<UploadOutcome> {
    let Some(token) = client.session().token() else {
        tracing::warn!("Upload refused: not logged in");
        return Err(ApiError::login_required());
    };

    let category = category.filter(|c| !c.is_empty()).unwrap_or(DEFAULT_CATEGORY);
    let description = description.unwrap_or_default();

    let form = Form::new()
        .part("media", file.into_part()?)
        .text("category", category.to_string())
        .text("description", description.to_string());

    let response: MediaUploadResponse = client
        .send_json(
            "upload_media",
            client
                .client
                .post(client.url("/media/upload"))
                .bearer_auth(token)
                .multipart(form),
        )
        .await?;

    Ok(UploadOutcome {
        message: UPLOAD_ACCEPTED.to_string(),
        media_id: response.media.id,
    })
}

/// List published media, optionally filtered by category.
#[tracing::instrument(skip(client))]
pub async fn get_published_media(client: &ApiClient, category: Option<&str>) -> Result<Vec<MediaItem>> {
    let mut request = client.client.get(client.url("/media/published"));
    if let Some(category) = category.filter(|c| !c.is_empty()) {
        request = request.query(&[("category", category)]);
    }

    let response: MediaListResponse = client.send_json("list_media", request).await?;
    tracing::debug!(count = response.media.len(), "Published media fetched");
    Ok(response.media)
}
