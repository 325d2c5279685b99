//! Wire shapes of the OMDb-style movie API and their validation.
//!
//! Raw payloads are deserialized into permissive structs (every field optional)
//! and then converted into domain types. A required field that is missing turns
//! the whole payload into [`CineSearchError::MalformedResponse`]; nothing loosely
//! typed leaves this module.

use crate::api::backend::SearchPage;
use crate::domain::error::{CineSearchError, Result};
use crate::domain::{MovieDetail, MovieSummary, NO_POSTER};
use serde::Deserialize;

/// `totalResults` arrives as a string from the real API and as a number from
/// some mirrors.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TotalResults {
    Number(u64),
    Text(String),
}

impl TotalResults {
    fn value(&self) -> Result<u64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s.trim().parse::<u64>().map_err(|_| {
                CineSearchError::MalformedResponse(format!("totalResults is not a count: {s:?}"))
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(rename = "Search")]
    search: Option<Vec<SearchEntry>>,

    #[serde(rename = "totalResults")]
    total_results: Option<TotalResults>,

    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    #[serde(rename = "imdbID")]
    id: Option<String>,

    #[serde(rename = "Title")]
    title: Option<String>,

    #[serde(rename = "Year")]
    year: Option<String>,

    #[serde(rename = "Poster")]
    poster: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailPayload {
    #[serde(rename = "Response")]
    response: Option<String>,

    #[serde(rename = "Error")]
    error: Option<String>,

    #[serde(rename = "imdbID")]
    id: Option<String>,

    #[serde(rename = "Title")]
    title: Option<String>,

    #[serde(rename = "Year")]
    year: Option<String>,

    #[serde(rename = "Poster")]
    poster: Option<String>,

    #[serde(rename = "Director")]
    director: Option<String>,

    #[serde(rename = "Actors")]
    actors: Option<String>,

    #[serde(rename = "Plot")]
    plot: Option<String>,

    #[serde(rename = "imdbRating")]
    rating: Option<String>,
}

fn required(value: Option<String>, field: &str, context: &str) -> Result<String> {
    value.ok_or_else(|| {
        CineSearchError::MalformedResponse(format!("{context} is missing required field {field}"))
    })
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NO_POSTER.to_string())
}

/// Parses a search response body.
///
/// A payload without a `Search` list (no matches, or an API-level error) is an
/// empty page with zero total.
///
/// # Errors
///
/// Returns [`CineSearchError::MalformedResponse`] if the body is not JSON, an
/// entry lacks `imdbID`, `Title` or `Year`, or `totalResults` is not a count.
pub fn parse_search(body: &str) -> Result<SearchPage> {
    let payload: SearchPayload = serde_json::from_str(body)
        .map_err(|e| CineSearchError::MalformedResponse(format!("search body: {e}")))?;

    let Some(entries) = payload.search else {
        tracing::debug!(api_error = ?payload.error, "search returned no list");
        return Ok(SearchPage::default());
    };

    let movies = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let context = format!("search entry {index}");
            Ok(MovieSummary {
                id: required(entry.id, "imdbID", &context)?,
                title: required(entry.title, "Title", &context)?,
                year: required(entry.year, "Year", &context)?,
                poster_url: or_not_available(entry.poster),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let total_results = match payload.total_results {
        Some(total) => total.value()?,
        None => movies.len() as u64,
    };

    Ok(SearchPage {
        movies,
        total_results,
    })
}

/// Parses a detail response body for `id`.
///
/// # Errors
///
/// - [`CineSearchError::NotFound`] when the API reports `Response: "False"`
/// - [`CineSearchError::MalformedResponse`] when the body is not JSON or lacks
///   `imdbID`, `Title` or `Year`
pub fn parse_detail(id: &str, body: &str) -> Result<MovieDetail> {
    let payload: DetailPayload = serde_json::from_str(body)
        .map_err(|e| CineSearchError::MalformedResponse(format!("detail body: {e}")))?;

    if payload.response.as_deref() == Some("False") {
        tracing::debug!(id, api_error = ?payload.error, "detail lookup rejected");
        return Err(CineSearchError::NotFound { id: id.to_string() });
    }

    let context = "detail record";
    Ok(MovieDetail {
        summary: MovieSummary {
            id: required(payload.id, "imdbID", context)?,
            title: required(payload.title, "Title", context)?,
            year: required(payload.year, "Year", context)?,
            poster_url: or_not_available(payload.poster),
        },
        director: or_not_available(payload.director),
        actors: or_not_available(payload.actors),
        plot: or_not_available(payload.plot),
        rating: or_not_available(payload.rating),
    })
}
