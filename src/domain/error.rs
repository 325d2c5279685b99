//! Error types for the cinesearch client.
//!
//! This module defines the centralized error type [`CineSearchError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Request-level errors (`NetworkFailure`, `MalformedResponse`, `NotFound`) are caught
//! where the request is issued and never reach the state store; they exist so the API
//! layer can report precisely what went wrong to the logs.

use thiserror::Error;

/// The main error type for cinesearch operations.
///
/// # Examples
///
/// ```
/// use cinesearch::CineSearchError;
///
/// fn lookup(id: &str) -> Result<(), CineSearchError> {
///     Err(CineSearchError::NotFound { id: id.to_string() })
/// }
///
/// assert!(lookup("tt0000000").is_err());
/// ```
#[derive(Debug, Error)]
pub enum CineSearchError {
    /// The HTTP request could not complete.
    ///
    /// Covers transport errors (DNS, TLS, timeouts, refused connections) and
    /// non-success status codes from the movie API.
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The movie API answered with a payload of unexpected shape.
    ///
    /// Raised when the body is not JSON or when a required field is missing from
    /// a search entry or detail record.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Detail lookup for an identifier the movie API does not know.
    #[error("Movie not found: {id}")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// A page change below page 1 was requested.
    #[error("Invalid page {0}: pages start at 1")]
    InvalidPage(u32),

    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the key-value storage backend fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the TOML configuration cannot be parsed or when the runtime
    /// environment cannot support the requested setup.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for cinesearch operations.
pub type Result<T> = std::result::Result<T, CineSearchError>;
