//! # Shared Utility Functions
//!
//! Public paths of media assets served by the backend.
//!
//! These are relative to the site root, not to the API base URL: the gallery
//! markup is served from the same origin as the backend.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{media_download_path, media_file_path};
//! use shared::RecordId;
//!
//! assert_eq!(media_download_path(&RecordId::Int(3)), "/api/media/3/download");
//! assert_eq!(media_file_path("a1b2.jpg"), "/uploads/media/a1b2.jpg");
//! ```

use crate::dto::id::RecordId;

/// Download route of a media item.
pub fn media_download_path(id: &RecordId) -> String {
    format!("/api/media/{}/download", id)
}

/// Static path of a stored media file.
pub fn media_file_path(file_name: &str) -> String {
    format!("/uploads/media/{}", file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_use_text_ids_verbatim() {
        let id = RecordId::Text("9f1c".to_string());
        assert_eq!(media_download_path(&id), "/api/media/9f1c/download");
        assert_eq!(media_file_path("x.png"), "/uploads/media/x.png");
    }
}
