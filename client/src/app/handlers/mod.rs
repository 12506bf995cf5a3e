//! # Handlers
//!
//! One handler per page interaction. Each runs under its own trace id.

pub mod contact;
pub mod media;
pub mod payment;
pub mod session;

pub use contact::handle_contact_submit;
pub use media::{display_media_gallery, handle_media_file_selected, render_gallery_item};
pub use payment::handle_mpesa_payment;
pub use session::log_stored_user;

/// Prefix of every failure alert.
pub(crate) fn error_alert(message: &str) -> String {
    format!("Error: {}", message)
}
