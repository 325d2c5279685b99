//! Movie API abstraction.
//!
//! The search coordinator and detail fetcher talk to the movie API through the
//! [`MovieApi`] trait so the HTTP client can be swapped (or faked in tests)
//! without touching the request pipeline.

use crate::domain::error::Result;
use crate::domain::{MovieDetail, MovieSummary};
use async_trait::async_trait;

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    /// Results in the order the API returned them.
    pub movies: Vec<MovieSummary>,

    /// Total matches across all pages, as reported by the API.
    pub total_results: u64,
}

/// Read-only client of a paginated movie-metadata API.
#[async_trait]
pub trait MovieApi: Send + Sync + std::fmt::Debug {
    /// Fetches page `page` (1-based) of the matches for `term`.
    ///
    /// # Errors
    ///
    /// `NetworkFailure` or `MalformedResponse`. An API-level "no matches" is an
    /// empty page, not an error.
    async fn search(&self, term: &str, page: u32) -> Result<SearchPage>;

    /// Fetches the full record for `id`.
    ///
    /// # Errors
    ///
    /// `NetworkFailure`, `MalformedResponse`, or `NotFound` for unknown ids.
    async fn detail(&self, id: &str) -> Result<MovieDetail>;
}
