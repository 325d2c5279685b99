//! Observable application state store.
//!
//! [`Store`] owns the single [`AppState`] and is shared by reference (`Arc<Store>`)
//! with every collaborator that changes it. Changes happen only through
//! [`Store::dispatch`]: the action is applied by the pure reducer, the new state is
//! installed, and every observer is called with the new snapshot before
//! `dispatch` returns.
//!
//! # Ordering
//!
//! Dispatches are serialized. Observers see snapshots in dispatch order, one per
//! state change, and never an intermediate state. An action that leaves the state
//! unchanged (for example `SetPage(0)`) notifies nobody.
//!
//! Observers run while the store holds its observer lock: they may read the store
//! through [`Store::snapshot`] but must not dispatch, subscribe, or unsubscribe.

use super::actions::Action;
use super::modes::ViewMode;
use super::state::AppState;
use crate::domain::{MovieDetail, MovieSummary};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Callback invoked with each new state.
pub type Observer = Box<dyn Fn(&AppState) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Observers {
    next_id: u64,
    entries: BTreeMap<SubscriptionId, Observer>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Process-wide state holder with synchronous change notification.
///
/// # Example
///
/// ```rust
/// use cinesearch::app::{AppState, Store, Theme};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let store = Store::new(AppState::new(Theme::Light));
/// let seen = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&seen);
/// store.subscribe(move |_state| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// store.set_term("heat");
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// assert_eq!(store.snapshot().query.term, "heat");
/// ```
pub struct Store {
    state: Mutex<AppState>,
    observers: Mutex<Observers>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &*lock(&self.state))
            .finish_non_exhaustive()
    }
}

impl Store {
    #[must_use]
    pub fn new(initial: AppState) -> Self {
        Self {
            state: Mutex::new(initial),
            observers: Mutex::new(Observers::default()),
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        lock(&self.state).clone()
    }

    /// Reads the current state without cloning it.
    pub fn with_state<R>(&self, read: impl FnOnce(&AppState) -> R) -> R {
        read(&lock(&self.state))
    }

    /// Registers `observer`; it is called after every subsequent state change.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        let mut observers = lock(&self.observers);
        let id = SubscriptionId(observers.next_id);
        observers.next_id += 1;
        observers.entries.insert(id, Box::new(observer));
        tracing::debug!(subscription = id.0, "observer subscribed");
        id
    }

    /// Removes an observer. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        lock(&self.observers).entries.remove(&id).is_some()
    }

    /// Applies `action` and notifies observers with the resulting state.
    ///
    /// An action that leaves the state unchanged notifies nobody.
    pub fn dispatch(&self, action: Action) {
        let observers = lock(&self.observers);

        let next = {
            let mut state = lock(&self.state);
            let next = state.reduce(&action);
            if next == *state {
                tracing::trace!(action = action.name(), "action left state unchanged");
                return;
            }
            tracing::debug!(
                action = action.name(),
                prev_term = %state.query.term,
                prev_page = state.query.page,
                prev_results = state.query.results.len(),
                prev_loading = state.query.loading,
                next_term = %next.query.term,
                next_page = next.query.page,
                next_results = next.query.results.len(),
                next_total = next.query.total_results,
                next_loading = next.query.loading,
                theme = ?next.theme,
                view_mode = ?next.view_mode,
                "state updated"
            );
            *state = next.clone();
            next
        };

        for observer in observers.entries.values() {
            observer(&next);
        }
    }

    pub fn set_results(&self, movies: Vec<MovieSummary>, total_results: u64) {
        self.dispatch(Action::SetResults {
            movies,
            total_results,
        });
    }

    pub fn set_term(&self, term: impl Into<String>) {
        self.dispatch(Action::SetTerm(term.into()));
    }

    pub fn set_page(&self, page: u32) {
        self.dispatch(Action::SetPage(page));
    }

    pub fn set_loading(&self, loading: bool) {
        self.dispatch(Action::SetLoading(loading));
    }

    pub fn toggle_theme(&self) {
        self.dispatch(Action::ToggleTheme);
    }

    pub fn select_detail(&self, detail: MovieDetail) {
        self.dispatch(Action::SelectDetail(detail));
    }

    pub fn close_detail(&self) {
        self.dispatch(Action::CloseDetail);
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        self.dispatch(Action::SetViewMode(mode));
    }

    pub fn toggle_favorites_view(&self) {
        self.dispatch(Action::ToggleFavoritesView);
    }
}
