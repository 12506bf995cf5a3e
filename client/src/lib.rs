//! # COPMI Client - Library Root
//!
//! Typed client for the COPMI backend API and the presentation glue built on
//! top of it. The `copmi` binary (`main.rs`) is a command-line front end over
//! this library.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  app::handlers   form submit, payment button,          │
//! │                  upload input, media gallery           │
//! ├────────────────────────────────────────────────────────┤
//! │  core::ApiService  (injection seam)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  services::api     ApiClient, one module per endpoint  │
//! │  services::storage KeyValueStore, SessionStore         │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (reqwest)
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │  /auth, /contacts, /payments, /media
//! └─────────────────┘
//! ```
//!
//! ## Result Convention
//!
//! Every API operation returns `Result<T, ApiError>`. A non-2xx response is an
//! [`ApiError::Domain`] carrying the server's `error` message; a failed request
//! or unparseable body is an [`ApiError::Transport`]. Neither panics.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use copmi_client::core::ApiService;
//! use copmi_client::services::api::ApiClient;
//! use copmi_client::services::storage::MemoryStore;
//!
//! # async fn run() {
//! let client = ApiClient::new(Arc::new(MemoryStore::new()));
//! match client.get_published_media(Some("sermon")).await {
//!     Ok(media) => println!("{} items", media.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p copmi-client
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

pub use crate::config::ClientConfig;
pub use crate::core::{ApiError, ApiService, Result};
pub use crate::services::api::ApiClient;
pub use crate::services::storage::{FileStore, KeyValueStore, MemoryStore, Session, SessionStore};
