//! Application layer: state, reducer, observable store, and the intent facade.
//!
//! This module sits between the presentation layer and the search/storage
//! layers. All rendered state flows through one [`Store`]; the presentation
//! layer feeds it [`Intent`]s via [`App`] and re-renders from observer callbacks.
//!
//! # Architecture
//!
//! ```text
//! Intent → App::handle → SearchCoordinator / DetailFetcher / Favorites
//!                               │
//!                               ▼
//!                        Action → Store::dispatch → reduce → observers
//! ```
//!
//! # Modules
//!
//! - [`actions`]: State transitions the reducer understands
//! - [`handler`]: Intent routing and component assembly
//! - [`modes`]: Theme and view mode types
//! - [`state`]: Central state container and its pure reducer
//! - [`store`]: Shared state holder with observer notification
//!
//! # Example
//!
//! ```rust
//! use cinesearch::app::{AppState, Store, Theme};
//!
//! let store = Store::new(AppState::new(Theme::default()));
//! store.set_term("bat");
//! assert_eq!(store.snapshot().query.term, "bat");
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
pub mod store;

pub use actions::Action;
pub use handler::{App, Intent};
pub use modes::{Theme, ViewMode};
pub use state::{AppState, SearchQueryState};
pub use store::{Observer, Store, SubscriptionId};
