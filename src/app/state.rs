//! Application state and its reducer.
//!
//! This module defines [`AppState`], the single source of truth for everything the
//! presentation layer renders, along with [`SearchQueryState`] and the pure
//! transition function [`AppState::reduce`].
//!
//! # State Components
//!
//! - **Query**: search term, page, results, total count, loading flag
//! - **Theme**: light/dark preference
//! - **View Mode**: results list or favorites list
//! - **Selected**: the detail record on display, if any
//!
//! `AppState` is a plain value. Sharing and mutation go through
//! [`Store`](super::Store), which applies actions and notifies observers.

use super::actions::Action;
use super::modes::{Theme, ViewMode};
use crate::domain::{top_rated, MovieDetail, MovieSummary};

/// The query half of the state: what was searched and what came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQueryState {
    /// Raw input, possibly empty or shorter than the search threshold.
    pub term: String,

    /// Current page, 1-based. Never 0.
    pub page: u32,

    /// Results of the last completed search, in API order.
    pub results: Vec<MovieSummary>,

    /// Total matches reported for the last completed search.
    pub total_results: u64,

    /// Whether a request is outstanding.
    pub loading: bool,
}

impl SearchQueryState {
    /// Initial query state showing `results` on page 1.
    #[must_use]
    pub fn seeded(results: Vec<MovieSummary>) -> Self {
        Self {
            term: String::new(),
            page: 1,
            results,
            total_results: 0,
            loading: false,
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub query: SearchQueryState,
    pub theme: Theme,
    pub view_mode: ViewMode,

    /// Detail record on display. The detail view is open exactly when this is `Some`.
    pub selected: Option<MovieDetail>,
}

impl AppState {
    /// Creates the startup state: the top-rated seed list on page 1.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cinesearch::app::{AppState, Theme};
    ///
    /// let state = AppState::new(Theme::Dark);
    /// assert_eq!(state.query.page, 1);
    /// assert!(!state.query.results.is_empty());
    /// assert!(state.theme.is_dark());
    /// ```
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self::with_results(top_rated(), theme)
    }

    /// Creates a startup state showing `results` instead of the seed list.
    #[must_use]
    pub fn with_results(results: Vec<MovieSummary>, theme: Theme) -> Self {
        Self {
            query: SearchQueryState::seeded(results),
            theme,
            view_mode: ViewMode::Results,
            selected: None,
        }
    }

    /// Returns the state after applying `action`.
    ///
    /// Pure: `self` is untouched. `SetPage(0)` yields an unchanged state.
    #[must_use]
    pub fn reduce(&self, action: &Action) -> Self {
        let mut next = self.clone();
        match action {
            Action::SetResults {
                movies,
                total_results,
            } => {
                next.query.results.clone_from(movies);
                next.query.total_results = *total_results;
            }
            Action::SetTerm(term) => next.query.term.clone_from(term),
            Action::SetPage(0) => {
                tracing::debug!("ignoring page 0");
            }
            Action::SetPage(page) => next.query.page = *page,
            Action::SetLoading(loading) => next.query.loading = *loading,
            Action::ToggleTheme => next.theme = next.theme.toggled(),
            Action::SelectDetail(detail) => next.selected = Some(detail.clone()),
            Action::CloseDetail => next.selected = None,
            Action::SetViewMode(mode) => next.view_mode = *mode,
            Action::ToggleFavoritesView => next.view_mode = next.view_mode.toggled(),
        }
        next
    }

    #[must_use]
    pub fn is_detail_open(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.query.page > 1
    }

    /// Whether more results exist beyond the current page.
    ///
    /// `page_size` is the provider's fixed page size (10 for OMDb).
    #[must_use]
    pub fn has_next_page(&self, page_size: u32) -> bool {
        u64::from(self.query.page) * u64::from(page_size) < self.query.total_results
    }

    /// Number of pages the reported total spans. Zero when nothing matched.
    #[must_use]
    pub fn page_count(&self, page_size: u32) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.query.total_results.div_ceil(u64::from(page_size))
    }
}
