//! `localStorage` backend for session persistence.

use privafile_core::{SessionStorage, StorageError};

use super::dom;

/// [`SessionStorage`] over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::RemoveFailed(key.to_string()))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip_and_remove() {
        let storage = BrowserStorage;
        storage.set("privafile.test", "value").unwrap();
        assert_eq!(storage.get("privafile.test").as_deref(), Some("value"));
        storage.remove("privafile.test").unwrap();
        assert_eq!(storage.get("privafile.test"), None);
    }
}
