//! # Record Identifiers
//!
//! The backend is not consistent about identifier types: depending on the
//! table, ids come back as JSON numbers or as strings (UUIDs, M-Pesa
//! references). [`RecordId`] accepts both and renders them verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a backend record (payment, media item).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{id}"),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}
