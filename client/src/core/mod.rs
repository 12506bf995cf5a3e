//! # Core Abstractions
//!
//! Error types and service traits shared by the API client and the
//! presentation handlers.
//!
//! - **[`error`]**: `ApiError` and the storage/config errors
//! - **[`service`]**: `ApiService`, the injection seam for handlers
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use copmi_client::core::ApiService;
//! use copmi_client::services::api::ApiClient;
//! use copmi_client::services::storage::MemoryStore;
//!
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(Arc::new(MemoryStore::new())));
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, ConfigError, Result, StorageError};
pub use service::ApiService;
