//! Key-value storage trait abstraction.
//!
//! The session is persisted as two string entries (the raw token and the
//! JSON-encoded user). Anything that can hold string keys and values can back
//! it: a JSON file in production, a map in tests.

use async_trait::async_trait;

/// Storage operation errors.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// Failed to read the backing store
    ReadFailed(String),
    /// Failed to write the backing store
    WriteFailed(String),
    /// The backing store exists but cannot be decoded
    Corrupt(String),
    /// Other error
    Other(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::ReadFailed(msg) => write!(f, "Failed to read storage: {}", msg),
            StorageError::WriteFailed(msg) => write!(f, "Failed to write storage: {}", msg),
            StorageError::Corrupt(msg) => write!(f, "Storage is corrupt: {}", msg),
            StorageError::Other(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Trait for string key-value persistence.
///
/// # Example
///
/// ```ignore
/// use bookshelf::traits::KeyValueStore;
///
/// async fn current_token<S: KeyValueStore>(store: &S) -> Option<String> {
///     store.get("token").await.ok().flatten()
/// }
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the key is present
    /// - `Ok(None)` if the key is absent
    /// - `Err(error)` if the store could not be read
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
