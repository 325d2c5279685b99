//! Client side of the external movie-metadata API.
//!
//! # Modules
//!
//! - `backend`: The [`MovieApi`] trait and the [`SearchPage`] result type
//! - `client`: `reqwest`-based implementation for OMDb-compatible endpoints
//! - `wire`: Raw JSON shapes and their validation into domain types

pub mod backend;
pub mod client;
pub mod wire;

pub use backend::{MovieApi, SearchPage};
pub use client::OmdbClient;
