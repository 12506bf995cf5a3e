//! Page-load session check

use serde_json::Value;

use crate::services::storage::SessionStore;

/// Log the stored user, if any, and return it.
pub fn log_stored_user(store: &dyn SessionStore) -> Option<Value> {
    let session = store.get()?;
    tracing::info!(user = %session.user, "Logged in as");
    Some(session.user)
}
