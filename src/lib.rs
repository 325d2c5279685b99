//! Cinesearch: the core of a movie search and favorites client.
//!
//! Cinesearch provides everything below the rendering layer of a movie browser:
//! - Debounced, staleness-aware search against an OMDb-compatible API
//! - Pagination over the provider's fixed-size result pages
//! - On-demand detail lookup for a single title
//! - A favorites list persisted write-through to a JSON file
//! - One observable state store the presentation layer renders from
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation layer (not part of this crate)        │  ← Renders state
//! └─────────────────────────────────────────────────────┘
//!              │ Intent                 ▲ observer callbacks
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Intent facade
//! │  - Store + reducer                                  │  ← Single source
//! │  - Theme / view mode                                │    of truth
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Search Layer  │   │ Storage Layer │   │ API Layer     │
//! │ (search/)     │   │ (storage/)    │   │ (api/)        │
//! │ - Debounce    │   │ - JSON I/O    │   │ - HTTP client │
//! │ - Sequencing  │   │ - Favorites   │   │ - Wire format │
//! │ - Detail      │   │ - Backend API │   │ - Trait seam  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Movie model (domain/movie)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing fmt layer                                │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`api`]: Movie API trait, OMDb client, and payload validation
//! - [`app`]: State, reducer, observable store, and intent facade
//! - [`domain`]: Core domain types (movies, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`search`]: Debounced search pipeline and detail lookup
//! - [`storage`]: Key-value persistence and the favorites manager
//! - [`observability`]: Log subscriber setup
//!
//! # Configuration
//!
//! Configuration is read from TOML; every key is optional:
//!
//! ```toml
//! api_key = "your-omdb-key"
//! debounce_ms = 1000
//! min_query_chars = 3
//! dark_mode = true
//! trace_level = "debug"
//! ```
//!
//! # Initialization Flow
//!
//! 1. Load [`Config`] (file, string, or defaults)
//! 2. Optionally call [`observability::init_tracing`]
//! 3. Call [`initialize`] inside a Tokio runtime to get an [`App`]
//! 4. Subscribe to `app.store()` and render on every notification
//! 5. Feed user input to [`App::handle`] as [`Intent`]s
//!
//! # Example
//!
//! ```rust,no_run
//! use cinesearch::{initialize, Config, Intent};
//!
//! # async fn run() -> cinesearch::Result<()> {
//! let config = Config::from_toml_str(r#"api_key = "abc123""#)?;
//! let mut app = initialize(&config)?;
//!
//! app.store().subscribe(|state| {
//!     println!("{} results, loading: {}", state.query.results.len(), state.query.loading);
//! });
//!
//! app.handle(Intent::TermChanged("batman".into())).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Key Design Decisions
//!
//! ## Latest Request Wins
//!
//! Every lookup takes a ticket from a shared sequencer. A response is applied
//! only while its ticket is the newest, and the check and the store update
//! happen under one lock, so a slow early response never overwrites a newer one.
//!
//! ## Silent Request Failures
//!
//! Network and payload errors are logged and swallowed. The previous results
//! stay on screen and the loading flag is cleared.
//!
//! ## Write-Through Favorites
//!
//! The favorites list is written to storage before the in-memory copy changes,
//! so memory never claims a favorite the file does not hold.

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod search;
pub mod storage;

pub use api::{MovieApi, OmdbClient, SearchPage};
pub use app::{Action, App, AppState, Intent, SearchQueryState, Store, Theme, ViewMode};
pub use domain::{CineSearchError, MovieDetail, MovieSummary, Result};
pub use search::{DetailFetcher, SearchCoordinator, SearchSettings};
pub use storage::{FavoritesManager, JsonFileStore, KeyValueStore, MemoryStore};

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// File name of the key-value store inside the data directory.
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Client configuration.
///
/// Deserialized from TOML; missing keys take their defaults.
///
/// # Example
///
/// ```toml
/// api_key = "abc123"
/// api_base_url = "https://www.omdbapi.com/"
/// debounce_ms = 500
/// data_dir = "~/.cinesearch"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OMDb API key, sent as the `apikey` query parameter. Default: empty
    pub api_key: String,

    /// Endpoint base URL. Default: `https://www.omdbapi.com/`
    pub api_base_url: String,

    /// Quiet period before a search fires, in milliseconds. Default: 1000
    pub debounce_ms: u64,

    /// Minimum term length, in characters, that triggers a search. Default: 3
    pub min_query_chars: usize,

    /// Results per page as fixed by the provider. Default: 10
    pub page_size: u32,

    /// Per-request timeout in seconds. Default: 10
    pub request_timeout_secs: u64,

    /// Start in the dark theme. Default: false
    pub dark_mode: bool,

    /// Where the favorites file and the log live.
    ///
    /// A leading `~` is expanded. Default: the platform data directory joined
    /// with `cinesearch`.
    pub data_dir: Option<PathBuf>,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: "https://www.omdbapi.com/".to_string(),
            debounce_ms: 1_000,
            min_query_chars: 3,
            page_size: 10,
            request_timeout_secs: 10,
            dark_mode: false,
            data_dir: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CineSearchError::Config`] when the text is not valid TOML or a
    /// key has the wrong type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cinesearch::Config;
    ///
    /// let config = Config::from_toml_str("debounce_ms = 250\ndark_mode = true")?;
    /// assert_eq!(config.debounce_ms, 250);
    /// assert!(config.dark_mode);
    /// assert_eq!(config.min_query_chars, 3);
    /// # Ok::<(), cinesearch::CineSearchError>(())
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CineSearchError::Config(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CineSearchError::Config`] when the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CineSearchError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The data directory with `~` expanded, or the platform default.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.as_deref().map_or_else(
            infrastructure::default_data_dir,
            infrastructure::expand_tilde,
        )
    }

    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.resolved_data_dir().join(STORAGE_FILE_NAME)
    }
}

/// Builds a ready-to-use [`App`] from configuration.
///
/// Wires the OMDb client, the search pipeline, the detail fetcher, and the
/// favorites manager over the JSON file store in the data directory. The store
/// starts on the top-rated seed list.
///
/// Must be called inside a Tokio runtime.
///
/// # Errors
///
/// - [`CineSearchError::Config`] when the HTTP client cannot be built or no
///   runtime is running
/// - [`CineSearchError::Io`] when the data directory cannot be created
///
/// A missing or corrupt favorites file is not an error; the list starts empty.
pub fn initialize(config: &Config) -> Result<App<JsonFileStore>> {
    tracing::debug!("initializing cinesearch");

    let client = OmdbClient::new(
        &config.api_base_url,
        &config.api_key,
        config.request_timeout(),
    )?;

    let storage = JsonFileStore::open(config.storage_path())?;

    App::assemble(config, Arc::new(client), storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.debounce(), Duration::from_secs(1));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn toml_overrides() {
        let config = Config::from_toml_str(
            r#"
            api_key = "k"
            page_size = 20
            data_dir = "/tmp/cinesearch-test"
            trace_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_key, "k");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(
            config.storage_path(),
            PathBuf::from("/tmp/cinesearch-test/storage.json")
        );
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let result = Config::from_toml_str("debounce_ms = \"soon\"");
        assert!(matches!(result, Err(CineSearchError::Config(_))));
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CineSearchError::Config(_))));
    }

    #[test]
    fn reads_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cinesearch.toml");
        std::fs::write(&path, "min_query_chars = 2\n").unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.min_query_chars, 2);
    }

    #[tokio::test]
    async fn initialize_creates_storage_dir() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: Some(dir.path().join("nested")),
            dark_mode: true,
            ..Config::default()
        };

        let app = initialize(&config).unwrap();

        assert!(dir.path().join("nested").is_dir());
        assert!(app.favorites().is_empty());
        assert_eq!(app.store().snapshot().theme, Theme::Dark);
        assert_eq!(app.store().snapshot().query.results.len(), 10);
    }
}
