//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container, along with
//! view model generation. It serves as the single source of truth for all
//! transient UI state; the posts themselves live in the [`PostStore`] it owns.
//!
//! # Architecture
//!
//! `AppState` separates core data (the post store) from transient UI state
//! (search text, mood filter, open detail, pending confirmation, form, status
//! line). Nothing derived is cached: the feed is re-derived from the store on
//! every [`compute_viewmodel`](AppState::compute_viewmodel) call.
//!
//! # State Components
//!
//! - **Store**: Owner of the post collection and its persistence
//! - **Search / Mood Filter**: Inputs to feed derivation
//! - **Detail**: Which post, if any, the detail surface shows
//! - **Pending**: Destructive action awaiting confirmation
//! - **Form**: New-post field values and photo preview
//! - **Status**: Transient message shown under the heading
//!
//! # Example
//!
//! ```rust
//! use wandernotes::app::AppState;
//! use wandernotes::storage::{MemoryStore, PostStore};
//! use wandernotes::ui::Theme;
//!
//! let mut state = AppState::new(PostStore::open(MemoryStore::default()), Theme::default());
//! state.search_query = "kolkata".to_string();
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.cards.len(), 1);
//! ```

use super::form::PostForm;
use super::modes::{DetailState, PendingConfirmation};
use crate::domain::MoodFilter;
use crate::feed;
use crate::storage::{KeyValueStore, PostStore};
use crate::ui::helpers::escape_html;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ConfirmationView, EmptyState, FeedViewModel, FooterInfo, FormView, HeaderInfo, ToolbarInfo,
};

/// Page heading.
pub const APP_TITLE: &str = "Wandernotes";

/// Shown when nothing is stored at all.
const EMPTY_STORE_MESSAGE: &str = "No posts yet. Add your first story above!";

/// Shown when posts exist but none passes the filters.
const NO_MATCHES_MESSAGE: &str = "No posts match your search.";

const KEYBINDINGS: &str = "Ctrl+K / Cmd+K: search";

/// Central application state container.
///
/// Mutated by the event handler in response to user input. View models are
/// computed on-demand from state snapshots.
#[derive(Debug)]
pub struct AppState<S> {
    /// Owner of the post collection.
    pub store: PostStore<S>,

    /// Current search text, as typed (untrimmed).
    pub search_query: String,

    /// Current mood filter.
    pub mood_filter: MoodFilter,

    /// Detail surface state.
    pub detail: DetailState,

    /// Destructive action awaiting an answer.
    pub pending: Option<PendingConfirmation>,

    /// Transient status message.
    ///
    /// Replaced by the next message; cleared by nothing else.
    pub status: Option<String>,

    /// Whether the search box should have keyboard focus.
    pub search_focused: bool,

    /// New-post form contents.
    pub form: PostForm,

    /// Colour scheme for rendering.
    pub theme: Theme,
}

impl<S: KeyValueStore> AppState<S> {
    /// Creates a new application state around a loaded store.
    ///
    /// # Parameters
    ///
    /// * `store` - Post store, already loaded
    /// * `theme` - Colour scheme for rendering
    #[must_use]
    pub fn new(store: PostStore<S>, theme: Theme) -> Self {
        Self {
            store,
            search_query: String::new(),
            mood_filter: MoodFilter::All,
            detail: DetailState::Closed,
            pending: None,
            status: None,
            search_focused: false,
            form: PostForm::default(),
            theme,
        }
    }

    /// Sets the status line.
    pub fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(status = %message, "status updated");
        self.status = Some(message);
    }

    /// Computes the page view model from the current state.
    ///
    /// Re-derives the feed from the store, summarizes each post, and resolves
    /// the open detail (an id that vanished from the store renders as closed).
    #[must_use]
    pub fn compute_viewmodel(&self) -> FeedViewModel {
        let _span = tracing::debug_span!("compute_viewmodel",
            total_posts = self.store.list().len(),
            detail_open = self.detail.is_open()
        ).entered();

        let posts = self.store.list();
        let derived = feed::derive(posts, &self.search_query, self.mood_filter);
        let cards: Vec<_> = derived
            .iter()
            .map(|post| feed::summarize(post, &self.theme))
            .collect();

        let empty_state = cards.is_empty().then(|| EmptyState {
            message: if posts.is_empty() {
                EMPTY_STORE_MESSAGE
            } else {
                NO_MATCHES_MESSAGE
            }
            .to_string(),
        });

        let detail = self
            .detail
            .open_id()
            .and_then(|id| self.store.get(id))
            .map(|post| feed::open_detail(post, &self.theme));

        let footer = FooterInfo {
            keybindings: KEYBINDINGS.to_string(),
            summary: format!("{} of {} posts", cards.len(), posts.len()),
        };

        FeedViewModel {
            header: HeaderInfo {
                title: APP_TITLE.to_string(),
                status: self.status.as_deref().map(|s| escape_html(s).into_owned()),
            },
            form: FormView {
                title: escape_html(&self.form.title).into_owned(),
                location: escape_html(&self.form.location).into_owned(),
                content: escape_html(&self.form.content).into_owned(),
                mood: self.form.mood,
                photo_preview: self
                    .form
                    .photo_preview
                    .as_deref()
                    .map(|src| escape_html(src).into_owned()),
            },
            toolbar: ToolbarInfo {
                query: escape_html(&self.search_query).into_owned(),
                mood_filter: self.mood_filter,
                search_focused: self.search_focused,
            },
            cards,
            empty_state,
            detail,
            confirmation: self.pending.as_ref().map(|pending| ConfirmationView {
                prompt: pending.prompt().to_string(),
            }),
            footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;
    use crate::storage::{MemoryStore, POSTS_SLOT};

    fn state() -> AppState<MemoryStore> {
        AppState::new(PostStore::open(MemoryStore::default()), Theme::default())
    }

    #[test]
    fn fresh_state_shows_samples() {
        let vm = state().compute_viewmodel();
        assert_eq!(vm.cards.len(), 2);
        assert!(vm.empty_state.is_none());
        assert!(vm.detail.is_none());
        assert_eq!(vm.footer.summary, "2 of 2 posts");
    }

    #[test]
    fn empty_store_and_no_matches_have_distinct_messages() {
        let mut filtered = state();
        filtered.mood_filter = MoodFilter::Only(Mood::Adventure);
        let vm = filtered.compute_viewmodel();
        assert_eq!(vm.empty_state.unwrap().message, NO_MATCHES_MESSAGE);

        let empty = AppState::new(
            PostStore::open(MemoryStore::with_slot(POSTS_SLOT, "[]")),
            Theme::default(),
        );
        assert_eq!(empty.compute_viewmodel().empty_state.unwrap().message, EMPTY_STORE_MESSAGE);
    }

    #[test]
    fn detail_for_vanished_post_renders_closed() {
        let mut state = state();
        state.detail = DetailState::Open("gone".to_string());
        assert!(state.compute_viewmodel().detail.is_none());
    }

    #[test]
    fn user_text_in_state_is_escaped() {
        let mut state = state();
        state.search_query = "\"><script>".to_string();
        state.form.title = "<b>".to_string();
        state.set_status("<i>");

        let vm = state.compute_viewmodel();
        assert_eq!(vm.toolbar.query, "&quot;&gt;&lt;script&gt;");
        assert_eq!(vm.form.title, "&lt;b&gt;");
        assert_eq!(vm.header.status.as_deref(), Some("&lt;i&gt;"));
    }
}
