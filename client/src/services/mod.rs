//! # External Services
//!
//! - [`api`]: backend HTTP client
//! - [`storage`]: local key-value storage and the session kept in it

pub mod api;
pub mod storage;
