//! Media upload input and published-media gallery

use shared::{media_download_path, media_file_path, MediaItem};

use crate::app::{GalleryView, Notifier};
use crate::core::ApiService;
use crate::debug::trace_context::with_trace_id;
use crate::services::api::MediaUpload;
use crate::utils::html::escape;

use super::error_alert;

/// Category given to files picked through the upload input.
pub const UPLOAD_INPUT_CATEGORY: &str = "sermon";
/// Description given to files picked through the upload input.
pub const UPLOAD_INPUT_DESCRIPTION: &str = "Uploaded sermon video";

/// Upload the file picked in the media input. No file, no request.
pub async fn handle_media_file_selected(
    api: &dyn ApiService,
    file: Option<MediaUpload>,
    notifier: &dyn Notifier,
) -> bool {
    let Some(file) = file else {
        return false;
    };

    with_trace_id("media_upload", async {
        let result = api
            .upload_media(file, Some(UPLOAD_INPUT_CATEGORY), Some(UPLOAD_INPUT_DESCRIPTION))
            .await;
        match result {
            Ok(outcome) => {
                notifier.alert(&outcome.message);
                true
            }
            Err(e) => {
                notifier.alert(&error_alert(e.message()));
                false
            }
        }
    })
    .await
}

/// Replace the gallery contents with the published media of `category`.
///
/// On failure the gallery is left as it was and nothing is shown. Returns the
/// number of rendered entries.
pub async fn display_media_gallery(
    api: &dyn ApiService,
    view: &mut dyn GalleryView,
    category: Option<&str>,
) -> Option<usize> {
    with_trace_id("media_gallery", async {
        let media = match api.get_published_media(category).await {
            Ok(media) => media,
            Err(e) => {
                tracing::warn!(error = %e, "Gallery not refreshed");
                return None;
            }
        };

        view.clear();
        for item in &media {
            view.append(render_gallery_item(item));
        }
        Some(media.len())
    })
    .await
}

/// Markup of one gallery entry: a download link around the thumbnail and name.
pub fn render_gallery_item(item: &MediaItem) -> String {
    let name = escape(&item.original_file_name);
    format!(
        concat!(
            "<div class=\"media-item\">",
            "<a href=\"{href}\">",
            "<img src=\"{src}\" alt=\"{name}\" />",
            "<p>{name}</p>",
            "</a>",
            "</div>"
        ),
        href = escape(&media_download_path(&item.id)),
        src = escape(&media_file_path(&item.file_name)),
        name = name,
    )
}
