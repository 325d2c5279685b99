//! State update operations accepted by the store.
//!
//! An [`Action`] describes one atomic transition of [`AppState`](super::AppState).
//! The store applies it through the pure reducer
//! [`AppState::reduce`](super::AppState::reduce) and then notifies observers. The
//! set is closed: there is no other way to change application state.
//!
//! # Example
//!
//! ```rust
//! use cinesearch::app::{Action, AppState, Theme};
//!
//! let state = AppState::new(Theme::Light);
//! let next = state.reduce(&Action::SetTerm("alien".to_string()));
//! assert_eq!(next.query.term, "alien");
//! assert_eq!(state.query.term, "");
//! ```

use super::modes::ViewMode;
use crate::domain::{MovieDetail, MovieSummary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replaces the result list and total count together.
    SetResults {
        movies: Vec<MovieSummary>,
        total_results: u64,
    },

    /// Records the raw search input.
    SetTerm(String),

    /// Moves to a page. Page 0 is ignored.
    SetPage(u32),

    SetLoading(bool),

    ToggleTheme,

    /// Opens the detail view on a fetched record.
    SelectDetail(MovieDetail),

    CloseDetail,

    SetViewMode(ViewMode),

    ToggleFavoritesView,
}

impl Action {
    /// Stable name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetResults { .. } => "set_results",
            Self::SetTerm(_) => "set_term",
            Self::SetPage(_) => "set_page",
            Self::SetLoading(_) => "set_loading",
            Self::ToggleTheme => "toggle_theme",
            Self::SelectDetail(_) => "select_detail",
            Self::CloseDetail => "close_detail",
            Self::SetViewMode(_) => "set_view_mode",
            Self::ToggleFavoritesView => "toggle_favorites_view",
        }
    }
}
