//! # Common Error Types
//!
//! Error handling for the COPMI client.
//!
//! Every API wrapper resolves to `Result<T, ApiError>`; nothing escapes as a
//! panic or an untranslated library error.
//!
//! ## Error Categories
//!
//! - **Domain**: the backend answered with a non-2xx status. The message is the
//!   `error` field of the response body. The local "must be logged in" refusal
//!   of the upload call is also a domain error, with no status.
//! - **Transport**: the request never completed (connection refused, DNS, TLS)
//!   or the body could not be parsed. The message is the underlying error text.
//!
//! Both kinds display as the bare message, so callers can use one idiom:
//!
//! ```rust
//! use copmi_client::core::error::ApiError;
//!
//! let err = ApiError::domain(400, "Phone number is required");
//! assert_eq!(err.to_string(), "Phone number is required");
//! assert!(err.is_domain());
//!
//! let err = ApiError::Transport("error sending request".to_string());
//! assert_eq!(err.message(), "error sending request");
//! ```
//!
//! Storage and configuration have their own error types, which never cross the
//! API boundary: see [`StorageError`] and [`ConfigError`].

use thiserror::Error;

/// Message returned by the upload call when no session token is stored.
pub const LOGIN_REQUIRED: &str = "You must be logged in to upload media";

/// Failure of a backend API call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the request.
    ///
    /// `status` is `None` when the call was refused locally before any request
    /// was sent.
    #[error("{message}")]
    Domain { status: Option<u16>, message: String },

    /// The request could not be completed or the response could not be parsed.
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    /// Domain error for an HTTP status.
    pub fn domain(status: u16, message: impl Into<String>) -> Self {
        ApiError::Domain {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Upload refused because no session token is stored.
    pub fn login_required() -> Self {
        ApiError::Domain {
            status: None,
            message: LOGIN_REQUIRED.to_string(),
        }
    }

    /// The human-readable message, regardless of kind.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Domain { message, .. } => message,
            ApiError::Transport(message) => message,
        }
    }

    /// HTTP status of a domain error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Domain { status, .. } => *status,
            ApiError::Transport(_) => None,
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, ApiError::Domain { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure reading or writing the local key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invalid client configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("No default session file location; set COPMI_SESSION_FILE or pass --session-file")]
    NoSessionLocation,
}
