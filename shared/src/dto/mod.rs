//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the backend over the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, login, session payload
//! - [`contact`] - Contact form
//! - [`payment`] - M-Pesa payment initiation
//! - [`media`] - Media upload and listing
//! - [`id`] - Backend record identifiers
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "username": "alice",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": { "id": 1, "username": "alice", "role": "member" }
//! }
//! ```
//!
//! Any non-2xx response carries an [`ErrorResponse`]:
//!
//! ```text
//! HTTP/1.1 401 Unauthorized
//!
//! { "error": "Invalid credentials" }
//! ```

pub mod auth;
pub mod contact;
pub mod id;
pub mod media;
pub mod payment;

pub use auth::*;
pub use contact::*;
pub use id::*;
pub use media::*;
pub use payment::*;

use serde::{Deserialize, Serialize};

/// Error body returned by the backend on any non-2xx status.
///
/// `error` is optional because some failure responses (proxies, framework
/// defaults) omit it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
