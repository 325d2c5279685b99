//! Debounced search request pipeline.
//!
//! [`SearchCoordinator`] turns raw input events and page-change intents into at
//! most one lookup per quiet period, runs it against the movie API, and feeds the
//! outcome into the [`Store`].
//!
//! # Request Lifecycle
//!
//! ```text
//! on_term_changed / on_page_changed
//!     │  (store: term/page updated immediately)
//!     ▼
//! Debouncer ── window elapses ──▶ lookup task
//!                                   │ ticket = sequencer.issue_with(..)
//!                                   │   store: loading = true, view = Results
//!                                   ▼
//!                               MovieApi::search
//!                                   │
//!                 ticket still current? ── no ──▶ discard
//!                                   │ yes
//!                                   ▼
//!                 store: set_results (on success), loading = false
//! ```
//!
//! Failures are logged and never reach the store: prior results stay on screen
//! and only the loading flag is cleared.

use super::debounce::Debouncer;
use super::sequence::RequestSequencer;
use crate::api::MovieApi;
use crate::app::{Store, ViewMode};
use crate::domain::error::{CineSearchError, Result};
use crate::Config;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::Instrument;

/// Tuning knobs for the search pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Quiet period before a lookup fires.
    pub debounce: Duration,

    /// Minimum number of characters a term needs to trigger a lookup.
    pub min_query_chars: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(1_000),
            min_query_chars: 3,
        }
    }
}

impl From<&Config> for SearchSettings {
    fn from(config: &Config) -> Self {
        Self {
            debounce: config.debounce(),
            min_query_chars: config.min_query_chars,
        }
    }
}

/// Arguments of one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    pub page: u32,
}

/// Coordinates input events, pagination, and search lookups.
#[derive(Debug)]
pub struct SearchCoordinator {
    store: Arc<Store>,
    api: Arc<dyn MovieApi>,
    debouncer: Debouncer<SearchRequest>,
    sequencer: RequestSequencer,
    settings: SearchSettings,
}

impl SearchCoordinator {
    /// Creates a coordinator whose timers and lookups run on the current Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`CineSearchError::Config`] when called outside a Tokio runtime.
    pub fn new(store: Arc<Store>, api: Arc<dyn MovieApi>, settings: SearchSettings) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| {
            CineSearchError::Config(format!("search coordinator needs a Tokio runtime: {e}"))
        })?;

        Ok(Self {
            store,
            api,
            debouncer: Debouncer::new(settings.debounce, runtime),
            sequencer: RequestSequencer::default(),
            settings,
        })
    }

    #[must_use]
    pub fn settings(&self) -> SearchSettings {
        self.settings
    }

    /// Handles a change of the search input.
    ///
    /// The term is recorded and the page reset to 1 right away. A lookup for
    /// page 1 is scheduled only if the term is long enough; shorter terms leave
    /// the current results alone.
    pub fn on_term_changed(&self, raw_term: &str) {
        self.store.set_term(raw_term);
        self.store.set_page(1);

        let length = raw_term.chars().count();
        if length < self.settings.min_query_chars {
            tracing::debug!(length, "term too short, no lookup scheduled");
            return;
        }

        self.schedule(SearchRequest {
            term: raw_term.to_string(),
            page: 1,
        });
    }

    /// Handles a page change for the current term.
    ///
    /// # Errors
    ///
    /// Returns [`CineSearchError::InvalidPage`] for page 0; nothing changes.
    pub fn on_page_changed(&self, new_page: u32) -> Result<()> {
        if new_page < 1 {
            tracing::warn!(new_page, "rejecting page change below 1");
            return Err(CineSearchError::InvalidPage(new_page));
        }

        self.store.set_page(new_page);
        let term = self.store.with_state(|state| state.query.term.clone());
        self.schedule(SearchRequest {
            term,
            page: new_page,
        });
        Ok(())
    }

    /// Drops a scheduled lookup that has not fired yet.
    ///
    /// Returns the dropped request. Lookups already sent are unaffected.
    pub fn cancel_pending(&self) -> Option<SearchRequest> {
        let dropped = self.debouncer.cancel();
        if let Some(request) = &dropped {
            tracing::debug!(term = %request.term, page = request.page, "pending lookup cancelled");
        }
        dropped
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    fn schedule(&self, request: SearchRequest) {
        tracing::debug!(term = %request.term, page = request.page, "lookup scheduled");

        let store = Arc::clone(&self.store);
        let api = Arc::clone(&self.api);
        let sequencer = self.sequencer.clone();

        self.debouncer.schedule(request, move |request| {
            let span = tracing::info_span!("search_lookup", term = %request.term, page = request.page);
            run_lookup(store, api, sequencer, request).instrument(span)
        });
    }
}

async fn run_lookup(
    store: Arc<Store>,
    api: Arc<dyn MovieApi>,
    sequencer: RequestSequencer,
    request: SearchRequest,
) {
    let ticket = sequencer.issue_with(|| {
        store.set_loading(true);
        store.set_view_mode(ViewMode::Results);
    });

    let outcome = api.search(&request.term, request.page).await;

    if let Err(e) = &outcome {
        tracing::warn!(error = %e, "search lookup failed");
    }

    let applied = sequencer.if_current(ticket, || {
        if let Ok(page) = outcome {
            tracing::debug!(
                count = page.movies.len(),
                total = page.total_results,
                "applying search results"
            );
            store.set_results(page.movies, page.total_results);
        }
        store.set_loading(false);
    });

    if applied.is_none() {
        tracing::debug!(ticket = ticket.number(), "discarding stale search response");
    }
}
