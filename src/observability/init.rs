//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, setting up the pipeline from
//! `tracing` macros to the rotating log file.

use super::file_writer::FileWriter;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "wandernotes.log";

/// Initializes the tracing subscriber with file output.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters spans and events by level
/// 2. Formats them as plain text lines
/// 3. Writes to a rotating file with backups
///
/// # Parameters
///
/// * `config` - Configuration containing `data_dir` and `trace_level`
///
/// # Level Resolution
///
/// 1. `RUST_LOG`, if set and valid
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently skips setup if directory creation fails (logging is optional)
/// - Idempotent: Safe to call multiple times (only first call takes effect)
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let writer = FileWriter::new(config.data_dir.join(LOG_FILE_NAME));
    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Arc::new(writer));

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
