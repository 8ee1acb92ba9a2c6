//! State machine types for the detail surface and confirmations.
//!
//! These types determine what overlays the page: the detail modal for one
//! post, and a pending yes/no question guarding a destructive action.
//!
//! # State Machines
//!
//! Detail surface:
//!
//! ```text
//!            Open(id), id known
//! Closed ─────────────────────────→ Open(id)
//!   ↑                                  │ Open(other), other known → Open(other)
//!   └────── Close / backdrop click ────┘
//! ```
//!
//! Clicks inside the open surface leave it unchanged. An `Open` for an id the
//! store does not know is ignored in either state.
//!
//! Confirmation:
//!
//! ```text
//! None ── DeleteRequested / ClearAllRequested ──→ Some(pending)
//! Some(pending) ── Confirm ──→ mutation, None
//! Some(pending) ── Cancel ───→ None
//! ```
//!
//! # Example
//!
//! ```rust
//! use wandernotes::app::modes::{DetailState, PendingConfirmation};
//!
//! let detail = DetailState::Open("abc".to_string());
//! assert_eq!(detail.open_id(), Some("abc"));
//! assert_eq!(PendingConfirmation::ClearAll.prompt(), "This will remove all posts. Continue?");
//! ```

/// Whether the detail surface is showing, and for which post.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    /// Nothing is overlaid on the feed.
    #[default]
    Closed,

    /// The detail surface shows the post with this id.
    Open(String),
}

impl DetailState {
    /// Id of the post being shown, if any.
    #[must_use]
    pub fn open_id(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Open(id) => Some(id),
        }
    }

    /// Returns `true` if the surface is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

/// A destructive action waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingConfirmation {
    /// Delete the post with this id.
    Delete(String),

    /// Remove every post.
    ClearAll,
}

impl PendingConfirmation {
    /// Question shown to the user.
    #[must_use]
    pub const fn prompt(&self) -> &'static str {
        match self {
            Self::Delete(_) => "Delete this post?",
            Self::ClearAll => "This will remove all posts. Continue?",
        }
    }
}
