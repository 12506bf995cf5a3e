//! # API Client
//!
//! Main HTTP client for backend API communication, and the one place where
//! HTTP outcomes are translated into [`ApiError`].

use std::sync::Arc;
use std::time::Instant;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{ContactRequest, ErrorResponse, MediaItem, PaymentRequest};

use crate::config::{ClientConfig, DEFAULT_API_URL};
use crate::core::error::{ApiError, Result};
use crate::core::service::ApiService;
use crate::services::storage::{Session, SessionStore};

use super::auth::AuthOutcome;
use super::media::{MediaUpload, UploadOutcome};
use super::payments::PaymentOutcome;

/// HTTP client for the backend API.
///
/// Owns a pooled `reqwest::Client` and the injected session store that the
/// auth calls write to and the upload call reads from.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a client against the default local backend.
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self::with_base_url(DEFAULT_API_URL, session)
    }

    /// Create a client against `base_url` (e.g. `http://localhost:5000/api`).
    pub fn with_base_url(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &ClientConfig, session: Arc<dyn SessionStore>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// Persist a session after a successful auth call.
    ///
    /// A storage failure is logged; the call itself already succeeded.
    pub(crate) fn store_session(&self, session: &Session) {
        if let Err(e) = self.session.set(session) {
            tracing::error!(error = %e, "Failed to persist session");
        }
    }

    /// Send a request and translate the outcome.
    ///
    /// The body is parsed as JSON before the status is looked at, so an HTML
    /// error page is a transport error. A 2xx body is then decoded as `T`; any
    /// other status becomes a domain error carrying the body's `error` field.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let start = Instant::now();

        let response = request.send().await.map_err(|e| {
            tracing::error!(operation, error = %e, "Network error");
            ApiError::from(e)
        })?;

        let status = response.status();
        let body = response.json::<Value>().await.map_err(|e| {
            tracing::error!(operation, status = status.as_u16(), error = %e, "Response parse error");
            ApiError::from(e)
        })?;
        let duration = start.elapsed();

        if status.is_success() {
            let result = serde_json::from_value::<T>(body).map_err(|e| {
                tracing::error!(operation, error = %e, "Unexpected response shape");
                ApiError::from(e)
            });
            if result.is_ok() {
                tracing::info!(operation, duration_ms = duration.as_millis(), "Request succeeded");
            }
            result
        } else {
            let message = serde_json::from_value::<ErrorResponse>(body)
                .ok()
                .and_then(|error| error.error)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

            tracing::warn!(
                operation,
                status = status.as_u16(),
                error = %message,
                duration_ms = duration.as_millis(),
                "Request failed"
            );
            Err(ApiError::domain(status.as_u16(), message))
        }
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
        full_name: String,
    ) -> Result<AuthOutcome> {
        super::auth::register(self, username, email, password, full_name).await
    }

    async fn login(&self, username: String, password: String) -> Result<AuthOutcome> {
        super::auth::login(self, username, password).await
    }

    fn logout(&self) {
        super::auth::logout(self)
    }

    fn current_session(&self) -> Option<Session> {
        self.session.get()
    }

    async fn submit_contact_form(&self, form: ContactRequest) -> Result<String> {
        super::contacts::submit_contact_form(self, form).await
    }

    async fn initiate_mpesa_payment(&self, payment: PaymentRequest) -> Result<PaymentOutcome> {
        super::payments::initiate_mpesa_payment(self, payment).await
    }

    async fn upload_media(
        &self,
        file: MediaUpload,
        category: Option<&str>,
        description: Option<&str>,
    ) -> Result<UploadOutcome> {
        super::media::upload_media(self, file, category, description).await
    }

    async fn get_published_media(&self, category: Option<&str>) -> Result<Vec<MediaItem>> {
        super::media::get_published_media(self, category).await
    }
}
