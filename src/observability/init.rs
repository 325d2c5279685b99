//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` macros to a plain-text fmt layer writing into the rotating
//! log file in the data directory.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the log inside the data directory.
pub const LOG_FILE_NAME: &str = "cinesearch.log";

/// Initializes the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently gives up if the directory cannot be created (logging is optional)
/// - Idempotent: only the first call in a process installs a subscriber
///
/// # Example
///
/// ```rust
/// use cinesearch::observability::init_tracing;
/// use cinesearch::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     data_dir: Some(std::env::temp_dir().join("cinesearch-doc")),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let data_dir = config.resolved_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = FileWriter::new(data_dir.join(LOG_FILE_NAME));
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
