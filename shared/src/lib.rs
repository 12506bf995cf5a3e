//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the COPMI client and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Registration, login and session DTOs
//!   - **[`dto::contact`]**: Contact form submission
//!   - **[`dto::payment`]**: M-Pesa STK push initiation
//!   - **[`dto::media`]**: Media upload and published-media listing
//! - **[`utils`]**: Public asset paths referenced by rendered media
//!
//! ## Wire Format
//!
//! Request and listing fields are **snake_case** on the wire (`full_name`,
//! `payment_type`, `original_file_name`). The payment initiation response is the
//! one **camelCase** body (`paymentId`, `checkoutRequestId`).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     username: "alice".to_string(),
//!     password: "secret".to_string(),
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("\"username\":\"alice\""));
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: every DTO here is public API
pub use dto::*;
pub use utils::*;
