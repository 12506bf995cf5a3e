//! # Client Storage
//!
//! Local key-value storage and the session kept in it.
//!
//! [`KeyValueStore`] has the shape of browser local storage: string keys,
//! string values. Two implementations ship with the crate:
//!
//! - [`MemoryStore`]: process-local, used by tests and one-shot tools
//! - [`FileStore`]: a JSON object on disk, used by the CLI so a login survives
//!   between invocations
//!
//! [`SessionStore`] is the session view of any key-value store. The session is
//! two keys: `token` (the bearer token) and `user` (the JSON-encoded profile).

use crate::core::error::StorageError;
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the JSON-encoded user profile.
pub const USER_KEY: &str = "user";
/// Storage key of the last initiated payment id.
pub const LAST_PAYMENT_ID_KEY: &str = "lastPaymentId";

/// String key-value storage.
///
/// The multi-key methods default to one call per key; stores that can read or
/// write several keys in one step override them so a session never mixes
/// keys from two different writes.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    fn get_items(&self, keys: &[&str]) -> Result<Vec<Option<String>>, StorageError> {
        keys.iter().map(|key| self.get_item(key)).collect()
    }

    fn set_items(&self, items: &[(&str, &str)]) -> Result<(), StorageError> {
        for (key, value) in items {
            self.set_item(key, value)?;
        }
        Ok(())
    }

    fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError> {
        for key in keys {
            self.remove_item(key)?;
        }
        Ok(())
    }
}

/// Authenticated session: bearer token plus cached user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: Value,
}

/// Read/write access to the stored session.
pub trait SessionStore: Send + Sync {
    /// The stored session, if both keys are present and the user parses.
    fn get(&self) -> Option<Session>;

    fn set(&self, session: &Session) -> Result<(), StorageError>;

    fn clear(&self) -> Result<(), StorageError>;

    /// The stored token alone.
    fn token(&self) -> Option<String>;
}

impl<S: KeyValueStore + ?Sized> SessionStore for S {
    fn get(&self) -> Option<Session> {
        let (token, user) = match self.get_items(&[TOKEN_KEY, USER_KEY]) {
            Ok(values) => match <[Option<String>; 2]>::try_from(values) {
                Ok([Some(token), Some(user)]) => (token, user),
                _ => return None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored session");
                return None;
            }
        };
        match serde_json::from_str(&user) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                tracing::warn!(error = %e, "Stored user is not valid JSON");
                None
            }
        }
    }

    fn set(&self, session: &Session) -> Result<(), StorageError> {
        let user = serde_json::to_string(&session.user)?;
        self.set_items(&[(TOKEN_KEY, session.token.as_str()), (USER_KEY, user.as_str())])
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.remove_items(&[TOKEN_KEY, USER_KEY])
    }

    fn token(&self) -> Option<String> {
        match self.get_item(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored token");
                None
            }
        }
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.write().remove(key);
        Ok(())
    }

    fn get_items(&self, keys: &[&str]) -> Result<Vec<Option<String>>, StorageError> {
        let items = self.items.read();
        Ok(keys.iter().map(|key| items.get(*key).cloned()).collect())
    }

    fn set_items(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut items = self.items.write();
        for (key, value) in entries {
            items.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut items = self.items.write();
        for key in keys {
            items.remove(*key);
        }
        Ok(())
    }
}

/// JSON-file store.
///
/// The file holds one flat object of string values. It is re-read on every
/// access so separate processes see each other's writes; a missing file reads
/// as empty. Writes go to a temporary file in the same directory which is then
/// renamed over the target, so readers never see a half-written file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load before a write. A file that does not parse is treated as empty and
    /// flagged so the next save replaces it.
    fn load_for_update(&self) -> Result<(BTreeMap<String, String>, bool), StorageError> {
        match self.load() {
            Ok(items) => Ok((items, false)),
            Err(StorageError::Json(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Discarding corrupt store file");
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(serde_json::to_string_pretty(items)?.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut BTreeMap<String, String>) -> bool) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();
        let (mut items, corrupt) = self.load_for_update()?;
        if apply(&mut items) || corrupt {
            self.save(&items)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_items(&[(key, value)])
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.remove_items(&[key])
    }

    fn get_items(&self, keys: &[&str]) -> Result<Vec<Option<String>>, StorageError> {
        let mut items = self.load()?;
        Ok(keys.iter().map(|key| items.remove(*key)).collect())
    }

    fn set_items(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        self.update(|items| {
            for (key, value) in entries {
                items.insert(key.to_string(), value.to_string());
            }
            true
        })
    }

    fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError> {
        self.update(|items| {
            let mut changed = false;
            for key in keys {
                changed |= items.remove(*key).is_some();
            }
            changed
        })
    }
}
