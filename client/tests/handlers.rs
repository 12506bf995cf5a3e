//! # Presentation Handler Tests
//!
//! Handlers run against a scripted `ApiService`, an in-memory store and a
//! recording notifier; no HTTP involved.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;
use shared::{ContactRequest, MediaItem, PaymentRequest, RecordId};

use common::RecordingNotifier;
use copmi_client::app::handlers::media::{UPLOAD_INPUT_CATEGORY, UPLOAD_INPUT_DESCRIPTION};
use copmi_client::app::{
    display_media_gallery, handle_contact_submit, handle_media_file_selected, handle_mpesa_payment,
    log_stored_user, ContactForm, ContactFormView, HtmlGallery,
};
use copmi_client::core::error::Result;
use copmi_client::services::api::{AuthOutcome, MediaUpload, PaymentOutcome, UploadOutcome};
use copmi_client::services::storage::{KeyValueStore, LAST_PAYMENT_ID_KEY};
use copmi_client::{ApiError, ApiService, MemoryStore, Session, SessionStore};

/// Scripted API: every call answers with `fail` as a domain error when set.
#[derive(Default)]
struct FakeApi {
    fail: Option<String>,
    calls: AtomicUsize,
    uploads: Mutex<Vec<(String, Option<String>, Option<String>)>>,
    media: Vec<MediaItem>,
}

impl FakeApi {
    fn failing(message: &str) -> Self {
        Self {
            fail: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn answer<T>(&self, value: T) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail {
            Some(message) => Err(ApiError::domain(400, message.clone())),
            None => Ok(value),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApiService for FakeApi {
    async fn register(&self, _: String, _: String, _: String, _: String) -> Result<AuthOutcome> {
        unimplemented!("not used by handlers")
    }

    async fn login(&self, _: String, _: String) -> Result<AuthOutcome> {
        unimplemented!("not used by handlers")
    }

    fn logout(&self) {}

    fn current_session(&self) -> Option<Session> {
        None
    }

    async fn submit_contact_form(&self, _form: ContactRequest) -> Result<String> {
        self.answer("Message sent successfully! We will respond soon.".to_string())
    }

    async fn initiate_mpesa_payment(&self, _payment: PaymentRequest) -> Result<PaymentOutcome> {
        self.answer(PaymentOutcome {
            message: "STK push sent! Check your phone for the M-Pesa prompt.".to_string(),
            payment_id: RecordId::Int(88),
            checkout_request_id: "ws_CO_88".to_string(),
        })
    }

    async fn upload_media(
        &self,
        file: MediaUpload,
        category: Option<&str>,
        description: Option<&str>,
    ) -> Result<UploadOutcome> {
        self.uploads.lock().push((
            file.file_name,
            category.map(str::to_string),
            description.map(str::to_string),
        ));
        self.answer(UploadOutcome {
            message: "Media uploaded successfully! Pending admin approval.".to_string(),
            media_id: RecordId::Int(5),
        })
    }

    async fn get_published_media(&self, _category: Option<&str>) -> Result<Vec<MediaItem>> {
        self.answer(self.media.clone())
    }
}

fn filled_contact_form() -> ContactForm {
    ContactForm {
        fields: ContactRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            phone: "0712345678".to_string(),
            subject: "Visit".to_string(),
            message: "Hello".to_string(),
        },
    }
}

fn payment(phone: &str) -> PaymentRequest {
    PaymentRequest {
        phone: phone.to_string(),
        amount: "1000".to_string(),
        payment_type: "offering".to_string(),
        payer_name: "Jane".to_string(),
    }
}

fn media_item(id: i64, name: &str) -> MediaItem {
    MediaItem {
        id: RecordId::Int(id),
        file_name: format!("{id}.jpg"),
        original_file_name: name.to_string(),
        category: None,
        description: None,
    }
}

#[tokio::test]
async fn test_contact_success_alerts_and_resets_form() {
    let api = FakeApi::default();
    let notifier = RecordingNotifier::default();
    let mut form = filled_contact_form();

    assert!(handle_contact_submit(&api, &mut form, &notifier).await);

    assert_eq!(notifier.alerts(), vec!["Message sent successfully! We will respond soon."]);
    assert_eq!(form.values(), ContactRequest::default());
}

#[tokio::test]
async fn test_contact_failure_keeps_fields() {
    let api = FakeApi::failing("Email is invalid");
    let notifier = RecordingNotifier::default();
    let mut form = filled_contact_form();

    assert!(!handle_contact_submit(&api, &mut form, &notifier).await);

    assert_eq!(notifier.alerts(), vec!["Error: Email is invalid"]);
    assert_eq!(form, filled_contact_form());
}

#[tokio::test]
async fn test_payment_with_empty_field_makes_no_call() {
    let api = FakeApi::default();
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::default();

    let outcome = handle_mpesa_payment(&api, &store, payment(""), &notifier).await;

    assert!(outcome.is_none());
    assert_eq!(api.calls(), 0);
    assert_eq!(notifier.alerts(), vec!["Please fill all fields"]);
}

#[tokio::test]
async fn test_payment_success_remembers_payment_id() {
    let api = FakeApi::default();
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::default();

    let outcome = handle_mpesa_payment(&api, &store, payment("254712345678"), &notifier)
        .await
        .expect("payment should start");

    assert_eq!(outcome.checkout_request_id, "ws_CO_88");
    assert_eq!(store.get_item(LAST_PAYMENT_ID_KEY).unwrap().as_deref(), Some("88"));
    assert_eq!(notifier.alerts(), vec!["STK push sent! Check your phone for the M-Pesa prompt."]);
}

#[tokio::test]
async fn test_payment_failure_alerts_error() {
    let api = FakeApi::failing("Gateway unavailable");
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::default();

    assert!(handle_mpesa_payment(&api, &store, payment("254712345678"), &notifier).await.is_none());

    assert_eq!(store.get_item(LAST_PAYMENT_ID_KEY).unwrap(), None);
    assert_eq!(notifier.alerts(), vec!["Error: Gateway unavailable"]);
}

#[tokio::test]
async fn test_media_input_without_file_does_nothing() {
    let api = FakeApi::default();
    let notifier = RecordingNotifier::default();

    assert!(!handle_media_file_selected(&api, None, &notifier).await);

    assert_eq!(api.calls(), 0);
    assert!(notifier.alerts().is_empty());
}

#[tokio::test]
async fn test_media_input_uploads_as_sermon() {
    let api = FakeApi::default();
    let notifier = RecordingNotifier::default();
    let file = MediaUpload::new("sunday.mp4", vec![0; 16]);

    assert!(handle_media_file_selected(&api, Some(file), &notifier).await);

    assert_eq!(
        api.uploads.lock().clone(),
        vec![(
            "sunday.mp4".to_string(),
            Some(UPLOAD_INPUT_CATEGORY.to_string()),
            Some(UPLOAD_INPUT_DESCRIPTION.to_string())
        )]
    );
    assert_eq!(notifier.alerts(), vec!["Media uploaded successfully! Pending admin approval."]);
}

#[tokio::test]
async fn test_media_input_failure_alerts_error() {
    let api = FakeApi::failing("You must be logged in to upload media");
    let notifier = RecordingNotifier::default();

    let selected = handle_media_file_selected(&api, Some(MediaUpload::new("a.jpg", vec![1])), &notifier).await;

    assert!(!selected);
    assert_eq!(notifier.alerts(), vec!["Error: You must be logged in to upload media"]);
}

#[tokio::test]
async fn test_gallery_replaces_entries() {
    let api = FakeApi {
        media: vec![media_item(1, "Easter.jpg"), media_item(2, "Choir.jpg")],
        ..FakeApi::default()
    };
    let mut gallery = HtmlGallery {
        entries: vec!["<div>stale</div>".to_string()],
    };

    let rendered = display_media_gallery(&api, &mut gallery, Some("events")).await;

    assert_eq!(rendered, Some(2));
    assert_eq!(gallery.entries.len(), 2);
    assert!(gallery.entries[0].contains("/api/media/1/download"));
    assert!(gallery.entries[1].contains("<p>Choir.jpg</p>"));
    assert!(!gallery.to_html().contains("stale"));
}

#[tokio::test]
async fn test_gallery_failure_leaves_view_untouched() {
    let api = FakeApi::failing("Service unavailable");
    let mut gallery = HtmlGallery {
        entries: vec!["<div>kept</div>".to_string()],
    };

    assert_eq!(display_media_gallery(&api, &mut gallery, None).await, None);
    assert_eq!(gallery.entries, vec!["<div>kept</div>".to_string()]);
}

#[test]
fn test_log_stored_user() {
    let store = MemoryStore::new();
    assert_eq!(log_stored_user(&store), None);

    store
        .set(&Session {
            token: "t".to_string(),
            user: json!({ "username": "alice" }),
        })
        .unwrap();
    assert_eq!(log_stored_user(&store), Some(json!({ "username": "alice" })));
}
