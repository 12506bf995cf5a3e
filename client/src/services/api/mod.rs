//! # Backend API Client Module
//!
//! HTTP client for the COPMI backend API: authentication, contact form,
//! M-Pesa payments and media.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient struct and response translation
//! ├── auth.rs      - Register, login, logout
//! ├── contacts.rs  - Contact form submission
//! ├── payments.rs  - M-Pesa STK push initiation
//! └── media.rs     - Media upload and published listing
//! ```
//!
//! Every endpoint function returns `Result<T, ApiError>` and logs its outcome.

pub mod auth;
pub mod client;
pub mod contacts;
pub mod media;
pub mod payments;

pub use auth::AuthOutcome;
pub use client::ApiClient;
pub use media::{MediaUpload, UploadOutcome};
pub use payments::PaymentOutcome;
