use gloo_storage::{LocalStorage, Storage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("storage write failed for key {key}: {reason}")]
pub struct StoreError {
    pub key: String,
    pub reason: String,
}

/// Synchronous key-value capability handed to anything that persists state
/// in the browser. Values are stored as JSON.
pub trait KeyValueStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T>;
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>;
}

/// `window.localStorage`, scoped to the page origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match LocalStorage::get(key) {
            Ok(value) => Some(value),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
            Err(e) => {
                log::warn!("Ignoring unreadable value under {}: {}", key, e);
                None
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        LocalStorage::set(key, value).map_err(|e| StoreError {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory store. Clones share the same map, like tabs sharing an origin.
    #[derive(Clone, Default)]
    pub(crate) struct MemoryStore {
        entries: Rc<RefCell<HashMap<String, String>>>,
        read_only: Rc<Cell<bool>>,
    }

    impl MemoryStore {
        pub(crate) fn raw(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        pub(crate) fn put_raw(&self, key: &str, value: &str) {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        }

        /// Makes every later `save` fail, like a full quota.
        pub(crate) fn fail_writes(&self) {
            self.read_only.set(true);
        }
    }

    impl KeyValueStore for MemoryStore {
        fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
            let raw = self.entries.borrow().get(key).cloned()?;
            serde_json::from_str(&raw).ok()
        }

        fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
            if self.read_only.get() {
                return Err(StoreError {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
            let raw = serde_json::to_string(value).map_err(|e| StoreError {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
            self.entries.borrow_mut().insert(key.to_string(), raw);
            Ok(())
        }
    }
}
