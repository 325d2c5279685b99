//! File-based structured logging.
//!
//! Every component logs through `tracing`; this module installs the subscriber
//! that renders those events as text lines into a rotating log file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → cinesearch.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `<data_dir>/cinesearch.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Span Context**: lookups and detail fetches run inside spans carrying
//!   their term, page, or id
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
