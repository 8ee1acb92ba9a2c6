//! Storage layer for the post collection.
//!
//! This module provides the slot store abstraction that stands in for a
//! browser's local storage, its on-disk and in-memory backends, and the
//! [`PostStore`] that owns the post collection on top of it.
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait
//! - `file`: one-file-per-slot backend with atomic writes
//! - `memory`: in-memory backend
//! - `codec`: JSON encoding of the collection
//! - `samples`: built-in sample posts
//! - `post_store`: the collection owner and its load policy

pub mod backend;
pub mod codec;
pub mod file;
pub mod memory;
pub mod post_store;
pub mod samples;

pub use backend::KeyValueStore;
pub use codec::{decode_posts, encode_posts, encode_posts_pretty};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use post_store::{LoadOutcome, PostStore, CORRUPT_BACKUP_SLOT, EXPORT_FILE_NAME, POSTS_SLOT};
pub use samples::sample_posts;
