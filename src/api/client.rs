//! HTTP client for OMDb-compatible endpoints.
//!
//! Both endpoints are plain `GET`s against the same base URL, distinguished by
//! query parameters: `s`/`page` for search and `i` for detail lookup.

use crate::api::backend::{MovieApi, SearchPage};
use crate::api::wire;
use crate::domain::error::{CineSearchError, Result};
use crate::domain::MovieDetail;
use async_trait::async_trait;
use std::time::Duration;
use tracing::instrument;

/// Client for a single OMDb-style API deployment.
#[derive(Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmdbClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OmdbClient {
    /// Creates a client with its own connection pool and a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CineSearchError::Config`] if the HTTP client cannot be built
    /// (for example, no TLS backend is available).
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CineSearchError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(http, base_url, api_key))
    }

    /// Creates a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_request(&self, term: &str, page: u32) -> reqwest::RequestBuilder {
        let page = page.to_string();
        self.http.get(&self.base_url).query(&[
            ("apikey", self.api_key.as_str()),
            ("s", term),
            ("page", page.as_str()),
        ])
    }

    fn detail_request(&self, id: &str) -> reqwest::RequestBuilder {
        self.http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("i", id)])
    }

    /// Sends `request` and returns the body of a successful response.
    async fn fetch_body(request: reqwest::RequestBuilder) -> Result<String> {
        let response = request
            .send()
            .await
            .map_err(|e| CineSearchError::NetworkFailure(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CineSearchError::NetworkFailure(format!(
                "movie API returned {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| CineSearchError::NetworkFailure(format!("failed to read body: {e}")))
    }
}

#[async_trait]
impl MovieApi for OmdbClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn search(&self, term: &str, page: u32) -> Result<SearchPage> {
        let body = Self::fetch_body(self.search_request(term, page)).await?;
        let page = wire::parse_search(&body)?;
        tracing::debug!(
            count = page.movies.len(),
            total = page.total_results,
            "search page received"
        );
        Ok(page)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn detail(&self, id: &str) -> Result<MovieDetail> {
        let body = Self::fetch_body(self.detail_request(id)).await?;
        wire::parse_detail(id, &body)
    }
}
