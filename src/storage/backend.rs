//! Key-value storage abstraction.
//!
//! This module defines the [`KeyValueStore`] trait that abstracts over persistence
//! backends. The client only ever needs a handful of keys (today just `favorites`),
//! so the trait is the minimal get/set/remove surface of a client-scoped store.
//!
//! Values are JSON documents. Interpreting them (and tolerating corrupt ones) is
//! the caller's job; the backend only moves them to and from durable storage.

use crate::domain::error::Result;

/// Abstraction over client-scoped key-value persistence.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): JSON file with atomic writes (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): process-local, nothing survives a restart
///
/// # Examples
///
/// ```
/// use cinesearch::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("favorites", serde_json::json!([]))?;
/// assert!(store.get("favorites")?.is_some());
/// # Ok::<(), cinesearch::CineSearchError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// The write is durable when this returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set(&mut self, key: &str, value: serde_json::Value) -> Result<()>;

    /// Deletes `key`. Returns whether a value was present.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<bool>;
}
