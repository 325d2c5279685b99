//! Request coordination between user input, the store, and the movie API.
//!
//! # Modules
//!
//! - `coordinator`: Debounced, staleness-aware search pipeline
//! - `debounce`: Cancel-previous timer state machine
//! - `detail`: On-demand detail lookup
//! - `sequence`: Latest-wins request tickets

pub mod coordinator;
pub mod debounce;
pub mod detail;
pub mod sequence;

pub use coordinator::{SearchCoordinator, SearchRequest, SearchSettings};
pub use debounce::{DebounceState, Debouncer};
pub use detail::DetailFetcher;
pub use sequence::{RequestSequencer, Ticket};
