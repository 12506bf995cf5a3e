//! # Presentation Layer
//!
//! Glue between user input and the API: read form values, call the matching
//! [`ApiService`](crate::core::ApiService) operation, then report through a
//! [`Notifier`] and update the view.
//!
//! Handlers hold no state. Everything they touch is injected:
//!
//! | Collaborator | Role |
//! |---|---|
//! | `ApiService` | backend calls |
//! | `KeyValueStore` / `SessionStore` | local storage |
//! | [`Notifier`] | blocking user-facing message |
//! | [`ContactFormView`], [`GalleryView`] | the parts of the page that change |

pub mod handlers;

pub use handlers::*;

use shared::ContactRequest;

/// Shows a message to the user and returns once it has been acknowledged.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Writes alerts to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// The contact form on the page.
pub trait ContactFormView {
    /// Current field values
    fn values(&self) -> ContactRequest;

    /// Clear every field
    fn reset(&mut self);
}

/// A container of rendered media entries.
pub trait GalleryView {
    /// Remove all entries
    fn clear(&mut self);

    /// Append one rendered entry
    fn append(&mut self, html: String);
}

/// Gallery backed by a vector of HTML fragments.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HtmlGallery {
    pub entries: Vec<String>,
}

impl HtmlGallery {
    pub fn to_html(&self) -> String {
        self.entries.concat()
    }
}

impl GalleryView for HtmlGallery {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn append(&mut self, html: String) {
        self.entries.push(html);
    }
}

/// Contact form held in memory; `reset` empties every field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactRequest,
}

impl ContactFormView for ContactForm {
    fn values(&self) -> ContactRequest {
        self.fields.clone()
    }

    fn reset(&mut self) {
        self.fields = ContactRequest::default();
    }
}
