//! Error types for Wandernotes.
//!
//! This module defines the centralized error type [`WandernotesError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Wandernotes operations.
///
/// Every failure path in the crate ends up here: form validation, slot store
/// reads and writes, photo encoding and configuration loading. None of them is
/// fatal to the application state; callers turn them into status messages.
///
/// # Examples
///
/// ```
/// use wandernotes::domain::{ValidationError, WandernotesError};
///
/// let err = WandernotesError::from(ValidationError::new(vec!["title"]));
/// assert_eq!(err.to_string(), "Please add a title, location and some content.");
/// ```
#[derive(Debug, Error)]
pub enum WandernotesError {
    /// A required post field was empty after trimming.
    ///
    /// Raised before any mutation or persistence happens.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Reading or writing a storage slot failed.
    ///
    /// The string contains a description of what went wrong. In-memory state
    /// stays authoritative when this is returned from a write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The selected photo could not be read or encoded.
    #[error("Photo error: {0}")]
    Photo(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the configuration file cannot be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Required post fields that were empty at creation time.
///
/// The display message is the one shown inline next to the creation form; the
/// offending field names are kept for callers that want to highlight inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please add a title, location and some content.")]
pub struct ValidationError {
    /// Names of the empty fields, in form order.
    pub missing: Vec<&'static str>,
}

impl ValidationError {
    /// Creates a validation error listing the empty fields.
    #[must_use]
    pub fn new(missing: Vec<&'static str>) -> Self {
        Self { missing }
    }
}

/// A specialized `Result` type for Wandernotes operations.
///
/// This is a type alias for `std::result::Result<T, WandernotesError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, WandernotesError>;
