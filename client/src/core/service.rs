//! # Service Traits
//!
//! Traits for dependency injection: presentation code depends on
//! [`ApiService`], not on the HTTP client, so tests can substitute a fake.

use async_trait::async_trait;
use shared::{ContactRequest, MediaItem, PaymentRequest};

use crate::core::error::Result;
use crate::services::api::{AuthOutcome, MediaUpload, PaymentOutcome, UploadOutcome};
use crate::services::storage::Session;

/// Trait for backend API operations.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Register a new account and persist the session
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
        full_name: String,
    ) -> Result<AuthOutcome>;

    /// Login and persist the session
    async fn login(&self, username: String, password: String) -> Result<AuthOutcome>;

    /// Clear the stored session
    fn logout(&self);

    /// The stored session, if logged in
    fn current_session(&self) -> Option<Session>;

    /// Submit the contact form; returns the confirmation message
    async fn submit_contact_form(&self, form: ContactRequest) -> Result<String>;

    /// Start an M-Pesa STK push
    async fn initiate_mpesa_payment(&self, payment: PaymentRequest) -> Result<PaymentOutcome>;

    /// Upload a media file (requires a stored session)
    async fn upload_media(
        &self,
        file: MediaUpload,
        category: Option<&str>,
        description: Option<&str>,
    ) -> Result<UploadOutcome>;

    /// List published media, optionally filtered by category
    async fn get_published_media(&self, category: Option<&str>) -> Result<Vec<MediaItem>>;
}
