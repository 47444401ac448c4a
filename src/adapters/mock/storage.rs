//! In-memory key-value store for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{KeyValueStore, StorageError};

/// In-memory key-value store for testing.
///
/// Clones share the same entries, so a test can keep one handle for
/// inspection while the code under test owns another.
///
/// # Example
///
/// ```ignore
/// use bookshelf::adapters::mock::InMemoryStore;
/// use bookshelf::traits::KeyValueStore;
///
/// let store = InMemoryStore::new();
/// store.set("token", "t1").await?;
/// assert_eq!(store.snapshot().get("token"), Some(&"t1".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    /// Stored entries
    entries: Arc<Mutex<HashMap<String, String>>>,
    /// Whether reads should fail
    read_should_fail: Arc<Mutex<bool>>,
    /// Whether writes (set and remove) should fail
    write_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with initial entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        {
            let mut map = store.entries.lock().unwrap();
            for (k, v) in entries {
                map.insert(k.into(), v.into());
            }
        }
        store
    }

    /// Configure whether reads should fail.
    pub fn set_read_should_fail(&self, should_fail: bool) {
        *self.read_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether writes should fail.
    pub fn set_write_should_fail(&self, should_fail: bool) {
        *self.write_should_fail.lock().unwrap() = should_fail;
    }

    /// Copy of the current entries (for assertions).
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.lock().unwrap().clone()
    }

    /// Whether a key is present (for assertions).
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if *self.read_should_fail.lock().unwrap() {
            return Err(StorageError::ReadFailed("Mock read failure".to_string()));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.write_should_fail.lock().unwrap() {
            return Err(StorageError::WriteFailed("Mock write failure".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        if *self.write_should_fail.lock().unwrap() {
            return Err(StorageError::WriteFailed("Mock write failure".to_string()));
        }
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
