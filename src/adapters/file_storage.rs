//! File-based key-value storage adapter.
//!
//! Stores every entry in a single JSON object file, by default
//! `~/.bookshelf/storage.json`.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::traits::{KeyValueStore, StorageError};

/// The storage file name inside the data directory.
pub const STORAGE_FILE: &str = "storage.json";

type Entries = BTreeMap<String, String>;

/// JSON-file-backed key-value store.
///
/// # Example
///
/// ```ignore
/// use bookshelf::adapters::FileKeyValueStore;
/// use bookshelf::traits::KeyValueStore;
///
/// let store = FileKeyValueStore::in_dir(&config.data_dir);
/// store.set("token", "t1").await?;
/// assert_eq!(store.get("token").await?, Some("t1".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store backed by `storage.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORAGE_FILE))
    }

    /// Get the path to the storage file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(StorageError::ReadFailed(e.to_string())),
        };

        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    /// Read entries for a write; an undecodable file is replaced.
    fn read_entries_for_write(&self) -> Result<Entries, StorageError> {
        match self.read_entries() {
            Err(StorageError::Corrupt(reason)) => {
                tracing::warn!(path = %self.path.display(), %reason, "replacing corrupt storage file");
                Ok(Entries::new())
            }
            other => other,
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::WriteFailed(e.to_string()))?;
            }
        }

        let file =
            File::create(&self.path).map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| StorageError::WriteFailed(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries_for_write()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}
