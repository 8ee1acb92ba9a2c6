//! JSON encoding of the post collection.
//!
//! The stored form is a bare JSON array of post objects with no version
//! field. Compact output is used for the storage slot and pretty output for
//! exports.

use crate::domain::error::{Result, WandernotesError};
use crate::domain::Post;

/// Serializes the collection compactly for the storage slot.
///
/// # Errors
///
/// Returns a storage error if serialization fails (should never happen with
/// string-only records).
pub fn encode_posts(posts: &[Post]) -> Result<String> {
    serde_json::to_string(posts)
        .map_err(|e| WandernotesError::Storage(format!("failed to serialize posts: {e}")))
}

/// Serializes the collection as pretty-printed JSON (two-space indent).
///
/// # Errors
///
/// Returns a storage error if serialization fails.
pub fn encode_posts_pretty(posts: &[Post]) -> Result<String> {
    serde_json::to_string_pretty(posts)
        .map_err(|e| WandernotesError::Storage(format!("failed to serialize posts: {e}")))
}

/// Parses a stored payload back into posts.
///
/// Anything other than a JSON array of objects is rejected. Inside an object,
/// missing or `null` fields become empty strings and other scalars their JSON
/// text.
///
/// # Errors
///
/// Returns a storage error describing the parse failure.
pub fn decode_posts(payload: &str) -> Result<Vec<Post>> {
    serde_json::from_str(payload)
        .map_err(|e| WandernotesError::Storage(format!("failed to parse JSON: {e}")))
}
