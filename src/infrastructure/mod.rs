//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves where Wandernotes keeps its data on the host and
//! expands user-supplied paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_data_dir, DATA_DIR_ENV};
