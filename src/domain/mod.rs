//! Domain layer for the cinesearch client.
//!
//! This module contains the core domain types, independent of the HTTP API shapes
//! and of the storage format. Payloads from the outside world are converted into
//! these types at the boundary and nothing loosely typed travels further inward.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie summary/detail model and the seed list
//!
//! # Examples
//!
//! ```
//! use cinesearch::domain::{MovieSummary, Result};
//!
//! fn pick() -> Result<MovieSummary> {
//!     Ok(MovieSummary::new("tt0133093", "The Matrix", "1999", "N/A"))
//! }
//! # pick().unwrap();
//! ```

pub mod error;
pub mod movie;

pub use error::{CineSearchError, Result};
pub use movie::{top_rated, MovieDetail, MovieSummary, NO_POSTER};
