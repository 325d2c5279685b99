//! Intent handling for the presentation layer.
//!
//! This module implements [`App`], the object a presentation layer drives. User
//! intents arrive as [`Intent`] values and are routed to the component that owns
//! them: the search coordinator, the detail fetcher, the favorites manager, or
//! the store directly.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The presentation layer sends an [`Intent`]
//! 2. [`App::handle`] pattern-matches the intent
//! 3. Components change state through the [`Store`] (or the favorites set)
//! 4. Store observers re-render
//!
//! # Intent Types
//!
//! - **Search**: `TermChanged`, `PageChanged`, `NextPage`, `PreviousPage`
//! - **Detail**: `OpenDetail`, `CloseDetail`
//! - **Favorites**: `ToggleFavorite`, `ToggleFavoritesView`
//! - **Cosmetic**: `ToggleTheme`

use super::modes::{Theme, ViewMode};
use super::state::AppState;
use super::store::Store;
use crate::api::MovieApi;
use crate::domain::error::Result;
use crate::domain::MovieSummary;
use crate::search::{DetailFetcher, SearchCoordinator, SearchSettings};
use crate::storage::{FavoritesManager, JsonFileStore, KeyValueStore};
use crate::Config;
use std::sync::Arc;
use tracing::instrument;

/// User intents dispatched by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The search input now reads this text.
    TermChanged(String),
    /// Jump to a specific page of the current search.
    PageChanged(u32),
    /// Advance one page, if more results exist.
    NextPage,
    /// Go back one page, if not on the first.
    PreviousPage,
    /// Fetch and show the full record of a movie.
    OpenDetail(String),
    CloseDetail,
    /// Add the movie to favorites, or remove it if already there.
    ToggleFavorite(MovieSummary),
    ToggleTheme,
    /// Switch between the result list and the favorites list.
    ToggleFavoritesView,
}

/// The assembled client: store, search pipeline, detail lookup, and favorites.
#[derive(Debug)]
pub struct App<S: KeyValueStore = JsonFileStore> {
    store: Arc<Store>,
    search: SearchCoordinator,
    details: DetailFetcher,
    favorites: FavoritesManager<S>,
    page_size: u32,
}

impl<S: KeyValueStore> App<S> {
    /// Builds an app around `api` and `storage` using the settings in `config`.
    ///
    /// The store starts from the seed list with the configured theme, and the
    /// favorites are loaded from `storage`.
    ///
    /// # Errors
    ///
    /// Returns an error when called outside a Tokio runtime.
    pub fn assemble(config: &Config, api: Arc<dyn MovieApi>, storage: S) -> Result<Self> {
        let store = Arc::new(Store::new(AppState::new(Theme::from_dark_mode(
            config.dark_mode,
        ))));
        let search = SearchCoordinator::new(
            Arc::clone(&store),
            Arc::clone(&api),
            SearchSettings::from(config),
        )?;
        let details = DetailFetcher::new(Arc::clone(&store), api);
        let favorites = FavoritesManager::load_all(storage);

        tracing::debug!(
            favorites = favorites.len(),
            page_size = config.page_size,
            "app assembled"
        );

        Ok(Self {
            store,
            search,
            details,
            favorites,
            page_size: config.page_size,
        })
    }

    /// Routes one intent to its component.
    ///
    /// # Errors
    ///
    /// - [`InvalidPage`](crate::CineSearchError::InvalidPage) for `PageChanged(0)`
    /// - storage errors when a favorites change cannot be persisted
    ///
    /// Request failures are never returned; they only clear the loading flag.
    #[instrument(level = "debug", skip(self))]
    pub async fn handle(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::TermChanged(term) => self.search.on_term_changed(&term),

            Intent::PageChanged(page) => self.search.on_page_changed(page)?,

            Intent::NextPage => {
                let next = self.store.with_state(|state| {
                    state
                        .has_next_page(self.page_size)
                        .then(|| state.query.page + 1)
                });
                match next {
                    Some(page) => self.search.on_page_changed(page)?,
                    None => tracing::debug!("already on the last page"),
                }
            }

            Intent::PreviousPage => {
                let previous = self.store.with_state(|state| {
                    state.has_previous_page().then(|| state.query.page - 1)
                });
                match previous {
                    Some(page) => self.search.on_page_changed(page)?,
                    None => tracing::debug!("already on the first page"),
                }
            }

            Intent::OpenDetail(id) => {
                self.details.fetch_detail(&id).await;
            }

            Intent::CloseDetail => self.details.close_detail(),

            Intent::ToggleFavorite(movie) => {
                let now_favorite = self.favorites.toggle(&movie)?;
                tracing::debug!(id = %movie.id, now_favorite, "favorite toggled");
            }

            Intent::ToggleTheme => self.store.toggle_theme(),

            Intent::ToggleFavoritesView => self.store.toggle_favorites_view(),
        }

        Ok(())
    }

    #[must_use]
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    #[must_use]
    pub fn search(&self) -> &SearchCoordinator {
        &self.search
    }

    #[must_use]
    pub fn details(&self) -> &DetailFetcher {
        &self.details
    }

    #[must_use]
    pub fn favorites(&self) -> &FavoritesManager<S> {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesManager<S> {
        &mut self.favorites
    }

    /// The list currently on screen: search results or favorites.
    #[must_use]
    pub fn visible_movies(&self) -> Vec<MovieSummary> {
        let results = self.store.with_state(|state| match state.view_mode {
            ViewMode::Results => Some(state.query.results.clone()),
            ViewMode::Favorites => None,
        });
        results.unwrap_or_else(|| self.favorites.all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SearchPage;
    use crate::domain::{CineSearchError, MovieDetail};
    use crate::storage::{KeyValueStore, MemoryStore, FAVORITES_KEY};
    use async_trait::async_trait;
    use std::time::Duration;

    #[derive(Debug)]
    struct StubApi;

    #[async_trait]
    impl MovieApi for StubApi {
        async fn search(&self, term: &str, page: u32) -> Result<SearchPage> {
            Ok(SearchPage {
                movies: vec![MovieSummary::new(
                    format!("tt{page}"),
                    format!("{term} page {page}"),
                    "2005",
                    "N/A",
                )],
                total_results: 25,
            })
        }

        async fn detail(&self, id: &str) -> Result<MovieDetail> {
            Err(CineSearchError::NotFound { id: id.to_string() })
        }
    }

    fn app() -> App<MemoryStore> {
        App::assemble(&Config::default(), Arc::new(StubApi), MemoryStore::default())
            .expect("inside a runtime")
    }

    fn batman() -> MovieSummary {
        MovieSummary::new("tt0372784", "Batman Begins", "2005", "N/A")
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(1_100)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn term_changed_runs_debounced_search() {
        let mut app = app();

        app.handle(Intent::TermChanged("bat".into())).await.unwrap();
        assert_eq!(app.store().snapshot().query.term, "bat");
        settle().await;

        let state = app.store().snapshot();
        assert_eq!(state.query.results[0].title, "bat page 1");
        assert_eq!(state.query.total_results, 25);
        assert!(!state.query.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn page_zero_is_rejected() {
        let mut app = app();
        let before = app.store().snapshot();

        let result = app.handle(Intent::PageChanged(0)).await;

        assert!(matches!(result, Err(CineSearchError::InvalidPage(0))));
        assert_eq!(app.store().snapshot(), before);
        assert!(!app.search().is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn next_and_previous_page_respect_bounds() {
        let mut app = app();

        app.handle(Intent::PreviousPage).await.unwrap();
        app.handle(Intent::NextPage).await.unwrap();
        assert_eq!(app.store().snapshot().query.page, 1);
        assert!(!app.search().is_pending());

        app.handle(Intent::TermChanged("bat".into())).await.unwrap();
        settle().await;

        app.handle(Intent::NextPage).await.unwrap();
        assert_eq!(app.store().snapshot().query.page, 2);
        settle().await;
        assert_eq!(app.store().snapshot().query.results[0].title, "bat page 2");

        app.handle(Intent::PreviousPage).await.unwrap();
        assert_eq!(app.store().snapshot().query.page, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_favorite_persists() {
        let mut app = app();

        app.handle(Intent::ToggleFavorite(batman())).await.unwrap();
        assert!(app.favorites().is_favorite("tt0372784"));
        let stored = app.favorites().storage().get(FAVORITES_KEY).unwrap();
        assert!(stored.is_some());

        app.handle(Intent::ToggleFavorite(batman())).await.unwrap();
        assert!(app.favorites().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn favorites_view_switches_visible_list() {
        let mut app = app();
        app.handle(Intent::ToggleFavorite(batman())).await.unwrap();

        assert_eq!(app.visible_movies().len(), 10);

        app.handle(Intent::ToggleFavoritesView).await.unwrap();
        assert_eq!(app.visible_movies(), vec![batman()]);

        app.handle(Intent::ToggleFavoritesView).await.unwrap();
        assert_eq!(app.store().snapshot().view_mode, ViewMode::Results);
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_theme() {
        let mut app = app();
        assert_eq!(app.store().snapshot().theme, Theme::Light);

        app.handle(Intent::ToggleTheme).await.unwrap();

        assert_eq!(app.store().snapshot().theme, Theme::Dark);
    }

    #[tokio::test(start_paused = true)]
    async fn open_unknown_detail_leaves_view_closed() {
        let mut app = app();

        app.handle(Intent::OpenDetail("tt0000000".into())).await.unwrap();

        let state = app.store().snapshot();
        assert!(!state.is_detail_open());
        assert!(!state.query.loading);

        app.handle(Intent::CloseDetail).await.unwrap();
        assert!(!app.store().snapshot().is_detail_open());
    }
}
