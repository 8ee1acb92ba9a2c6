//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! runtime (main.rs) and the domain/storage/ui layers. It implements the
//! event-driven architecture behind the page: what a click, a keystroke or a
//! form submission does to the posts and to the transient UI state.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Confirm / Cancel ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: New-post form contents
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Detail surface and confirmation state machine types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use wandernotes::app::{handle_event, AppState, Event};
//! use wandernotes::domain::{Mood, MoodFilter};
//! use wandernotes::storage::{MemoryStore, PostStore};
//! use wandernotes::ui::Theme;
//!
//! let mut state = AppState::new(PostStore::open(MemoryStore::default()), Theme::default());
//! let (render, _actions) = handle_event(&mut state, &Event::MoodFilterChanged(MoodFilter::Only(Mood::Food)))?;
//! assert!(render);
//! # Ok::<(), wandernotes::WandernotesError>(())
//! ```

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use form::PostForm;
pub use handler::{handle_event, select_photo, submit_post, Event, STATUS_SAVED};
pub use modes::{DetailState, PendingConfirmation};
pub use state::{AppState, APP_TITLE};
