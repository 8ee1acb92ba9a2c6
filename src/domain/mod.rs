//! Domain layer for Wandernotes.
//!
//! This module contains the core domain types, independent of storage and
//! rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`mood`]: Mood tags and the mood filter
//! - [`post`]: Post record, creation draft and id generation
//!
//! # Examples
//!
//! ```
//! use wandernotes::domain::{Mood, PostDraft, Result};
//!
//! fn draft() -> Result<PostDraft> {
//!     let draft = PostDraft::new("Sunrise", "Darjeeling", "Clouds below", Mood::Relax);
//!     draft.validate()?;
//!     Ok(draft)
//! }
//! # draft().unwrap();
//! ```

pub mod error;
pub mod mood;
pub mod post;

pub use error::{Result, ValidationError, WandernotesError};
pub use mood::{Mood, MoodFilter, UnknownMood, ALL_MOODS};
pub use post::{format_timestamp, generate_id, Post, PostDraft};
