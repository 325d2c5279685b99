//! Storage record models for the persistence layer.
//!
//! This module defines the raw record types written under storage keys. These
//! types are separate from domain models to keep a clear boundary between the
//! on-disk representation and the rest of the client.

use crate::domain::MovieSummary;
use serde::{Deserialize, Serialize};

/// Storage key holding the favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// Represents one favorite movie in storage.
///
/// Unlike the domain [`MovieSummary`], the record carries `added_at`, the Unix
/// timestamp at which the movie was favorited. Records written before the field
/// existed read back with `added_at = 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,

    #[serde(default)]
    pub added_at: i64,
}

impl FavoriteRecord {
    /// Creates a record for `movie`, stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinesearch::MovieSummary;
    /// use cinesearch::storage::FavoriteRecord;
    ///
    /// let movie = MovieSummary::new("tt0372784", "Batman Begins", "2005", "N/A");
    /// let record = FavoriteRecord::new(&movie);
    /// assert_eq!(record.id, "tt0372784");
    /// assert!(record.added_at > 0);
    /// ```
    #[must_use]
    pub fn new(movie: &MovieSummary) -> Self {
        Self {
            id: movie.id.clone(),
            title: movie.title.clone(),
            year: movie.year.clone(),
            poster_url: movie.poster_url.clone(),
            added_at: chrono::Utc::now().timestamp(),
        }
    }

    #[must_use]
    pub fn to_summary(&self) -> MovieSummary {
        MovieSummary::new(&self.id, &self.title, &self.year, &self.poster_url)
    }
}
