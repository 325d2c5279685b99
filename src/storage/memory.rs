//! In-memory storage backend.
//!
//! Holds values in a map for the lifetime of the process. Used for ephemeral
//! sessions (no data directory) and throughout the test suite.

use crate::domain::error::Result;
use crate::storage::backend::KeyValueStore;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, serde_json::Value>,
}

impl MemoryStore {
    /// Creates a store pre-populated with a single key.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: serde_json::Value) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value);
        Self { values }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: serde_json::Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.values.remove(key).is_some())
    }
}
