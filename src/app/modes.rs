//! Theme and view mode state types.
//!
//! Both are small `Copy` enums held by [`AppState`](super::AppState). The theme
//! is a cosmetic preference, the view mode decides which list the presentation
//! layer shows.
//!
//! # Example
//!
//! ```rust
//! use cinesearch::app::{Theme, ViewMode};
//!
//! assert_eq!(Theme::Light.toggled(), Theme::Dark);
//! assert_eq!(ViewMode::Results.toggled(), ViewMode::Favorites);
//! ```

/// Process-wide colour preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Which list is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// The current search results (or the seed list before any search).
    #[default]
    Results,

    /// The persisted favorites list.
    ///
    /// Any search lookup that fires switches back to [`ViewMode::Results`].
    Favorites,
}

impl ViewMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Results => Self::Favorites,
            Self::Favorites => Self::Results,
        }
    }
}
