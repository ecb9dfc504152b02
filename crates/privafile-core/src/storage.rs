//! Key-value persistence for the session.
//!
//! The browser build backs this with `localStorage`; [`MemoryStorage`]
//! serves tests and non-browser hosts.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// Minimal string key-value store.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory [`SessionStorage`].
///
/// Clones share the same entries, so a handle kept outside a store sees
/// what the store persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with the given entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        storage
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::with_entries([("token", "abc")]);
        assert_eq!(storage.get("token").as_deref(), Some("abc"));
        storage.set("serverUrl", "http://x").unwrap();
        assert_eq!(storage.get("serverUrl").as_deref(), Some("http://x"));
        storage.remove("token").unwrap();
        assert_eq!(storage.get("token"), None);
        // removing a missing key is not an error
        storage.remove("token").unwrap();
    }

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.set("token", "abc").unwrap();
        assert_eq!(handle.get("token").as_deref(), Some("abc"));
    }
}
