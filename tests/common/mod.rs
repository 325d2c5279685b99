//! Shared fixtures for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use cinesearch::api::{MovieApi, SearchPage};
use cinesearch::app::{AppState, Store, Theme};
use cinesearch::{CineSearchError, MovieDetail, MovieSummary, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Kinds of failure the fake can be scripted to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Network,
    Malformed,
}

impl Failure {
    fn to_error(self) -> CineSearchError {
        match self {
            Self::Network => CineSearchError::NetworkFailure("connection refused".into()),
            Self::Malformed => {
                CineSearchError::MalformedResponse("search entry missing imdbID".into())
            }
        }
    }
}

/// Scriptable in-process movie API.
///
/// Responses are registered per `(term, page)`; anything unregistered is an
/// empty page. Per-page delays let tests overlap requests on virtual time.
#[derive(Debug, Default)]
pub struct FakeApi {
    pages: Mutex<HashMap<(String, u32), SearchPage>>,
    details: Mutex<HashMap<String, MovieDetail>>,
    delays: Mutex<HashMap<u32, Duration>>,
    failure: Mutex<Option<Failure>>,
    search_calls: Mutex<Vec<(String, u32)>>,
    detail_calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, term: &str, page: u32, movies: Vec<MovieSummary>, total: u64) {
        self.pages.lock().unwrap().insert(
            (term.to_string(), page),
            SearchPage {
                movies,
                total_results: total,
            },
        );
    }

    pub fn add_detail(&self, detail: MovieDetail) {
        self.details
            .lock()
            .unwrap()
            .insert(detail.id().to_string(), detail);
    }

    pub fn delay_page(&self, page: u32, delay: Duration) {
        self.delays.lock().unwrap().insert(page, delay);
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_with(failing.then_some(Failure::Network));
    }

    pub fn fail_with(&self, failure: Option<Failure>) {
        *self.failure.lock().unwrap() = failure;
    }

    fn scripted_failure(&self) -> Option<CineSearchError> {
        self.failure.lock().unwrap().map(Failure::to_error)
    }

    pub fn search_calls(&self) -> Vec<(String, u32)> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieApi for FakeApi {
    async fn search(&self, term: &str, page: u32) -> Result<SearchPage> {
        self.search_calls
            .lock()
            .unwrap()
            .push((term.to_string(), page));

        let delay = self.delays.lock().unwrap().get(&page).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.scripted_failure() {
            return Err(error);
        }

        let page = self
            .pages
            .lock()
            .unwrap()
            .get(&(term.to_string(), page))
            .cloned()
            .unwrap_or_default();
        Ok(page)
    }

    async fn detail(&self, id: &str) -> Result<MovieDetail> {
        self.detail_calls.lock().unwrap().push(id.to_string());

        if let Some(error) = self.scripted_failure() {
            return Err(error);
        }

        self.details
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| CineSearchError::NotFound { id: id.to_string() })
    }
}

pub fn movie(id: &str, title: &str) -> MovieSummary {
    MovieSummary::new(id, title, "2005", "N/A")
}

pub fn batman_begins() -> MovieDetail {
    MovieDetail {
        summary: movie("tt0372784", "Batman Begins"),
        director: "Christopher Nolan".into(),
        actors: "Christian Bale, Michael Caine".into(),
        plot: "After training with his mentor, Batman begins his fight.".into(),
        rating: "8.2".into(),
    }
}

pub fn seeded_store() -> Arc<Store> {
    Arc::new(Store::new(AppState::new(Theme::Light)))
}

/// Sleeps past one default debounce window on the paused clock.
pub async fn past_window() {
    tokio::time::sleep(Duration::from_millis(1_100)).await;
}
