//! View model types representing renderable page state.
//!
//! This module defines immutable view models computed from application state.
//! View models are display-ready: every string that came from the user has
//! already been escaped, so components interpolate fields directly.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! ```text
//! AppState → compute_viewmodel → FeedViewModel → render_page → HTML
//! ```

use crate::domain::{Mood, MoodFilter};

/// Complete page view model for rendering.
#[derive(Debug, Clone)]
pub struct FeedViewModel {
    /// Page heading and status line.
    pub header: HeaderInfo,

    /// New-post form contents.
    pub form: FormView,

    /// Search box and mood filter.
    pub toolbar: ToolbarInfo,

    /// Cards in display order (already filtered and sorted).
    pub cards: Vec<DisplayCard>,

    /// Shown instead of cards when the derived feed is empty.
    pub empty_state: Option<EmptyState>,

    /// The open detail surface, if any.
    pub detail: Option<DetailView>,

    /// Pending confirmation prompt, if any.
    pub confirmation: Option<ConfirmationView>,

    /// Keyboard hints and totals.
    pub footer: FooterInfo,
}

/// Summary of one post as shown on a feed card.
///
/// All text fields are escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCard {
    pub id: String,
    pub title: String,
    pub location: String,
    pub mood: String,
    pub date_label: String,
    /// First 120 characters of content, with `...` when cut.
    pub excerpt: String,
    /// Photo data URI, or the placeholder for the title.
    pub image_src: String,
}

/// Full view of one post in the detail surface.
///
/// All text fields are escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub location: String,
    pub mood: String,
    pub date_label: String,
    pub content: String,
    pub image_src: String,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Page title.
    pub title: String,

    /// Transient status message (escaped), e.g. a validation hint.
    pub status: Option<String>,
}

/// Current contents of the new-post form (escaped).
#[derive(Debug, Clone)]
pub struct FormView {
    pub title: String,
    pub location: String,
    pub content: String,
    pub mood: Mood,
    /// Data URI of the selected photo, shown as a preview.
    pub photo_preview: Option<String>,
}

/// Search box and filter state.
#[derive(Debug, Clone)]
pub struct ToolbarInfo {
    /// Current search text (escaped).
    pub query: String,

    /// Selected mood filter.
    pub mood_filter: MoodFilter,

    /// Whether the search box should take focus on load.
    pub search_focused: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
}

/// A question awaiting confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmationView {
    pub prompt: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,

    /// Cards shown versus posts stored, e.g. "2 of 5 posts".
    pub summary: String,
}
