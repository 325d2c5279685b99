//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable key-value store using JSON
//! serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads entire file into memory once
//! - **Write**: O(n) - serializes and writes entire dataset on every `set`
//! - **Best for**: a handful of keys with small values, infrequent writes

use crate::domain::error::{CineSearchError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk. Wraps the entries in a
/// versioned object for future migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, serde_json::Value>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file key-value store.
///
/// The entire dataset is kept in memory and persisted on every modification.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is owned by a single favorites manager.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "favorites": [
///       { "id": "tt0372784", "title": "Batman Begins", "year": "2005",
///         "poster_url": "N/A", "added_at": 1700000000 }
///     ]
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
    data: StorageData,

    /// Set when a write failed and the file lags behind memory.
    dirty: bool,
}

impl JsonFileStore {
    /// Creates or opens a JSON file store.
    ///
    /// If the file exists, loads existing data. A file that cannot be read or
    /// parsed is treated as absent: the store starts empty and the next write
    /// replaces it. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cinesearch::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::open(PathBuf::from("/tmp/cinesearch/storage.json"))?;
    /// # Ok::<(), cinesearch::CineSearchError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path).unwrap_or_default()
        } else {
            tracing::debug!("initializing new empty store");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "store opened");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Loads storage data from a JSON file.
    ///
    /// Returns `None` when the file cannot be read or its bytes are not valid
    /// storage JSON (including non-UTF-8 contents).
    fn load_from_file(path: &Path) -> Option<StorageData> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "storage file is unreadable, starting empty");
                return None;
            }
        };

        match serde_json::from_slice::<StorageData>(&bytes) {
            Ok(data) => {
                tracing::debug!(
                    version = data.version,
                    entries = data.entries.len(),
                    "loaded storage data"
                );
                Some(data)
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "storage file is corrupt, starting empty");
                None
            }
        }
    }

    /// Saves storage data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then atomically renames it to the target path.
    /// This ensures the file is never left in a corrupt state, even if the process crashes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - JSON serialization fails (should never happen with valid data)
    /// - Temporary file cannot be written
    /// - Rename operation fails (rare on POSIX systems)
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| CineSearchError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let value = self.data.entries.get(key).cloned();
        tracing::trace!(key, found = value.is_some(), "json get");
        Ok(value)
    }

    fn set(&mut self, key: &str, value: serde_json::Value) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key).entered();

        let previous = self.data.entries.insert(key.to_string(), value);
        self.dirty = true;

        if let Err(e) = self.save_to_file() {
            // Keep memory in step with the file so a failed write is not silently kept.
            match previous {
                Some(old) => self.data.entries.insert(key.to_string(), old),
                None => self.data.entries.remove(key),
            };
            self.dirty = false;
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let _span = tracing::debug_span!("json_remove", key).entered();

        let Some(previous) = self.data.entries.remove(key) else {
            return Ok(false);
        };
        self.dirty = true;

        if let Err(e) = self.save_to_file() {
            self.data.entries.insert(key.to_string(), previous);
            self.dirty = false;
            return Err(e);
        }
        Ok(true)
    }
}
