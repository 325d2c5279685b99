//! Movie domain model.
//!
//! [`MovieSummary`] is the result-list entry returned by a search, [`MovieDetail`]
//! the full record fetched by identifier. Both are immutable once received from
//! the movie API and are identified by their `id`.

use serde::{Deserialize, Serialize};

/// Poster value the movie API uses when no artwork exists.
pub const NO_POSTER: &str = "N/A";

/// A single entry in a search result list.
///
/// # Examples
///
/// ```
/// use cinesearch::MovieSummary;
///
/// let movie = MovieSummary::new("tt0372784", "Batman Begins", "2005", "N/A");
/// assert_eq!(movie.id, "tt0372784");
/// assert!(!movie.has_poster());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
}

impl MovieSummary {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
        poster_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            poster_url: poster_url.into(),
        }
    }

    /// Returns `true` when the API supplied real poster artwork.
    #[must_use]
    pub fn has_poster(&self) -> bool {
        !self.poster_url.is_empty() && self.poster_url != NO_POSTER
    }

    /// Display label in the form `Title (Year)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }
}

/// The full record of a movie, fetched on demand by identifier.
///
/// A superset of [`MovieSummary`]. `rating` is kept as the display text the API
/// returned (for example `"8.2"` or `"N/A"`) and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieSummary,
    pub director: String,
    pub actors: String,
    pub plot: String,
    pub rating: String,
}

impl MovieDetail {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.summary.title
    }
}

/// The seed list shown before the first search completes.
///
/// The application starts with a non-empty result set rather than a blank screen.
#[must_use]
pub fn top_rated() -> Vec<MovieSummary> {
    [
        ("tt0111161", "The Shawshank Redemption", "1994"),
        ("tt0068646", "The Godfather", "1972"),
        ("tt0468569", "The Dark Knight", "2008"),
        ("tt0071562", "The Godfather Part II", "1974"),
        ("tt0050083", "12 Angry Men", "1957"),
        ("tt0108052", "Schindler's List", "1993"),
        ("tt0167260", "The Lord of the Rings: The Return of the King", "2003"),
        ("tt0110912", "Pulp Fiction", "1994"),
        ("tt0120737", "The Lord of the Rings: The Fellowship of the Ring", "2001"),
        ("tt0060196", "The Good, the Bad and the Ugly", "1966"),
    ]
    .into_iter()
    .map(|(id, title, year)| MovieSummary::new(id, title, year, NO_POSTER))
    .collect()
}
