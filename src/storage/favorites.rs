//! Persisted favorites list.
//!
//! [`FavoritesManager`] owns the favorites set and its storage backend. The set
//! is loaded once at startup and every mutation is written through to storage
//! before the in-memory copy changes, so memory never runs ahead of disk.
//!
//! Persisted order is insertion order; membership is answered from a hash index.

use crate::domain::error::{CineSearchError, Result};
use crate::domain::MovieSummary;
use crate::storage::backend::KeyValueStore;
use crate::storage::models::{FavoriteRecord, FAVORITES_KEY};
use std::collections::HashSet;

/// The user's favorite movies, backed by a [`KeyValueStore`].
///
/// # Examples
///
/// ```
/// use cinesearch::MovieSummary;
/// use cinesearch::storage::{FavoritesManager, MemoryStore};
///
/// let mut favorites = FavoritesManager::load_all(MemoryStore::default());
/// let movie = MovieSummary::new("tt0372784", "Batman Begins", "2005", "N/A");
///
/// assert!(favorites.add(&movie)?);
/// assert!(!favorites.add(&movie)?);
/// assert!(favorites.is_favorite("tt0372784"));
/// assert!(favorites.remove("tt0372784")?);
/// assert!(!favorites.is_favorite("tt0372784"));
/// # Ok::<(), cinesearch::CineSearchError>(())
/// ```
#[derive(Debug)]
pub struct FavoritesManager<S: KeyValueStore> {
    storage: S,
    records: Vec<FavoriteRecord>,
    ids: HashSet<String>,
}

impl<S: KeyValueStore> FavoritesManager<S> {
    /// Loads the persisted favorites from `storage`.
    ///
    /// Never fails. A missing key, an unreadable backend, or a payload that is
    /// not a list all yield an empty set. Individual entries that do not parse
    /// are skipped, and repeated ids keep their first occurrence.
    pub fn load_all(storage: S) -> Self {
        let _span = tracing::debug_span!("favorites_load_all").entered();

        let records = match storage.get(FAVORITES_KEY) {
            Ok(Some(value)) => Self::parse_records(value),
            Ok(None) => {
                tracing::debug!("no persisted favorites");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read favorites, starting empty");
                Vec::new()
            }
        };

        let mut ids = HashSet::with_capacity(records.len());
        let records: Vec<FavoriteRecord> = records
            .into_iter()
            .filter(|record| ids.insert(record.id.clone()))
            .collect();

        tracing::debug!(count = records.len(), "favorites loaded");
        Self {
            storage,
            records,
            ids,
        }
    }

    fn parse_records(value: serde_json::Value) -> Vec<FavoriteRecord> {
        let serde_json::Value::Array(items) = value else {
            tracing::warn!("persisted favorites are not a list, starting empty");
            return Vec::new();
        };

        items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<FavoriteRecord>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping corrupt favorite entry");
                    None
                }
            })
            .collect()
    }

    /// Adds `movie` unless its id is already present.
    ///
    /// Returns `Ok(true)` if the movie was inserted, `Ok(false)` if it was
    /// already a favorite (storage is not touched in that case).
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list cannot be persisted; the set is
    /// left unchanged.
    pub fn add(&mut self, movie: &MovieSummary) -> Result<bool> {
        if self.ids.contains(&movie.id) {
            tracing::debug!(id = %movie.id, "already a favorite");
            return Ok(false);
        }

        let mut next = self.records.clone();
        next.push(FavoriteRecord::new(movie));
        self.persist(next)?;

        tracing::debug!(id = %movie.id, count = self.records.len(), "favorite added");
        Ok(true)
    }

    /// Removes the favorite with `id`.
    ///
    /// Returns `Ok(false)` if no such favorite exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list cannot be persisted; the set is
    /// left unchanged.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        if !self.ids.contains(id) {
            return Ok(false);
        }

        let next: Vec<FavoriteRecord> = self
            .records
            .iter()
            .filter(|record| record.id != id)
            .cloned()
            .collect();
        self.persist(next)?;

        tracing::debug!(id, count = self.records.len(), "favorite removed");
        Ok(true)
    }

    /// Removes `movie` if it is a favorite, adds it otherwise.
    ///
    /// Returns the membership after the toggle.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    pub fn toggle(&mut self, movie: &MovieSummary) -> Result<bool> {
        if self.is_favorite(&movie.id) {
            self.remove(&movie.id)?;
            Ok(false)
        } else {
            self.add(movie)?;
            Ok(true)
        }
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// The favorites in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<MovieSummary> {
        self.records.iter().map(FavoriteRecord::to_summary).collect()
    }

    #[must_use]
    pub fn records(&self) -> &[FavoriteRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self, next: Vec<FavoriteRecord>) -> Result<()> {
        let value = serde_json::to_value(&next)
            .map_err(|e| CineSearchError::Storage(format!("failed to serialize favorites: {e}")))?;
        self.storage.set(FAVORITES_KEY, value)?;

        self.ids = next.iter().map(|record| record.id.clone()).collect();
        self.records = next;
        Ok(())
    }
}
