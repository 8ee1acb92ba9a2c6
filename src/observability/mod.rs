//! Structured logging to a rotating file.
//!
//! This module installs the `tracing` subscriber for the process. Every span
//! and event emitted by the library ends up as a line in
//! `<data_dir>/wandernotes.log`; stdout stays reserved for command output.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → wandernotes.log[.1..3]
//! ```
//!
//! # Features
//!
//! - **File Output**: Plain-text lines, no ANSI colours
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize logging early, before opening the store:
//!
//! ```rust,no_run
//! use wandernotes::observability::init_tracing;
//! use wandernotes::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("logging initialized");
//! ```
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
