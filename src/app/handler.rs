//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! translates it into state changes and action sequences. It serves as the
//! primary control flow coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the runtime (the binary, or a test)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and its `PostStore`
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Form**: `FormEdited`, `PhotoSelected`, `PhotoFailed`, `CreatePost`
//! - **Feed**: `SearchInput`, `MoodFilterChanged`, `Key`
//! - **Detail**: `OpenPost`, `CloseDetail`, `BackdropClicked`, `DetailClicked`
//! - **Destructive**: `DeleteRequested`, `ClearAllRequested`, `Confirm`, `Cancel`
//! - **Export**: `Export`
//!
//! Choosing a photo goes through [`select_photo`], which awaits the read and
//! dispatches `PhotoSelected`. Post submission goes through [`submit_post`],
//! which awaits the photo read before dispatching `CreatePost`.
//!
//! # Error Policy
//!
//! Validation and storage failures never escape as errors: they become the
//! status message and the page re-renders. Only export serialization failures
//! are returned.

use crate::app::form::PostForm;
use crate::app::modes::{DetailState, PendingConfirmation};
use crate::app::{Action, AppState};
use crate::domain::error::{Result, WandernotesError};
use crate::domain::{Mood, MoodFilter, PostDraft};
use crate::photo::{self, PhotoReader, PhotoSelection};
use crate::storage::{KeyValueStore, EXPORT_FILE_NAME};

/// Status after a successful write.
pub const STATUS_SAVED: &str = "Saved locally.";

const STATUS_DELETED: &str = "Post deleted.";
const STATUS_CLEARED: &str = "All posts removed.";

/// Events triggered by user input.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the text fields and mood of the new-post form.
    FormEdited {
        title: String,
        location: String,
        content: String,
        mood: Mood,
    },
    /// A photo was chosen (or the choice was cleared) in the form.
    PhotoSelected {
        /// Data URI to preview, or `None` when the choice was cleared.
        preview: Option<String>,
    },
    /// Reading the chosen photo failed.
    PhotoFailed {
        /// Error message describing the failure.
        error: String,
    },
    /// Creates a post from a complete draft (photo already encoded).
    CreatePost(PostDraft),

    /// Replaces the search text.
    SearchInput(String),
    /// Changes the mood filter.
    MoodFilterChanged(MoodFilter),
    /// A key was pressed anywhere on the page.
    Key {
        /// Key name as reported by the runtime, e.g. `"k"` or `"Enter"`.
        key: String,
        ctrl: bool,
        /// Cmd on macOS.
        meta: bool,
    },

    /// Opens the detail surface for a post.
    OpenPost(String),
    /// Closes the detail surface via its close control.
    CloseDetail,
    /// A click landed on the backdrop around the detail surface.
    BackdropClicked,
    /// A click landed inside the detail surface.
    DetailClicked,

    /// Asks to delete a post; requires confirmation.
    DeleteRequested(String),
    /// Asks to remove every post; requires confirmation.
    ClearAllRequested,
    /// Answers the pending question with yes.
    Confirm,
    /// Answers the pending question with no.
    Cancel,

    /// Exports the whole collection as a JSON file.
    Export,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`: whether the page changed, and the side effects
/// to run in order.
///
/// # Errors
///
/// Returns an error only if the export cannot be serialized.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
///
/// # Example
///
/// ```rust
/// use wandernotes::app::{handle_event, AppState, Event};
/// use wandernotes::storage::{MemoryStore, PostStore};
/// use wandernotes::ui::Theme;
///
/// let mut state = AppState::new(PostStore::open(MemoryStore::default()), Theme::default());
/// let id = state.store.list()[0].id.clone();
/// let (render, actions) = handle_event(&mut state, &Event::OpenPost(id))?;
/// assert!(render);
/// assert!(actions.is_empty());
/// # Ok::<(), wandernotes::WandernotesError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event<S: KeyValueStore>(
    state: &mut AppState<S>,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::FormEdited {
            title,
            location,
            content,
            mood,
        } => {
            state.form.title.clone_from(title);
            state.form.location.clone_from(location);
            state.form.content.clone_from(content);
            state.form.mood = *mood;
            Ok((true, vec![]))
        }
        Event::PhotoSelected { preview } => {
            tracing::debug!(selected = preview.is_some(), "photo selection changed");
            state.form.photo_preview.clone_from(preview);
            Ok((true, vec![]))
        }
        Event::PhotoFailed { error } => {
            tracing::warn!(error = %error, "photo read failed");
            state.set_status(format!("Could not read the photo: {error}"));
            Ok((true, vec![]))
        }
        Event::CreatePost(draft) => {
            match state.store.create(draft.clone()) {
                Ok(post) => {
                    tracing::info!(id = %post.id, "post created");
                    state.form = PostForm::default();
                    state.set_status(STATUS_SAVED);
                }
                Err(WandernotesError::Validation(e)) => {
                    tracing::debug!(missing = ?e.missing, "draft rejected");
                    state.set_status(e.to_string());
                }
                Err(e) => {
                    tracing::error!(error = %e, "post kept in memory but not saved");
                    state.form = PostForm::default();
                    state.set_status(not_saved(&e));
                }
            }
            Ok((true, vec![]))
        }

        Event::SearchInput(query) => {
            state.search_query.clone_from(query);
            Ok((true, vec![]))
        }
        Event::MoodFilterChanged(filter) => {
            state.mood_filter = *filter;
            Ok((true, vec![]))
        }
        Event::Key { key, ctrl, meta } => {
            if (*ctrl || *meta) && key.eq_ignore_ascii_case("k") {
                tracing::debug!("search shortcut");
                state.search_focused = true;
                return Ok((true, vec![Action::FocusSearch]));
            }
            Ok((false, vec![]))
        }

        Event::OpenPost(id) => {
            if state.store.get(id).is_none() {
                tracing::debug!(id = %id, "open ignored, unknown post");
                return Ok((false, vec![]));
            }
            state.detail = DetailState::Open(id.clone());
            Ok((true, vec![]))
        }
        Event::CloseDetail | Event::BackdropClicked => {
            let was_open = state.detail.is_open();
            state.detail = DetailState::Closed;
            Ok((was_open, vec![]))
        }
        Event::DetailClicked => Ok((false, vec![])),

        Event::DeleteRequested(id) => {
            if state.store.get(id).is_none() {
                tracing::debug!(id = %id, "delete ignored, unknown post");
                return Ok((false, vec![]));
            }
            Ok(request_confirmation(state, PendingConfirmation::Delete(id.clone())))
        }
        Event::ClearAllRequested => Ok(request_confirmation(state, PendingConfirmation::ClearAll)),
        Event::Confirm => {
            let Some(pending) = state.pending.take() else {
                tracing::debug!("confirm with nothing pending");
                return Ok((false, vec![]));
            };
            match pending {
                PendingConfirmation::Delete(id) => confirm_delete(state, &id),
                PendingConfirmation::ClearAll => confirm_clear_all(state),
            }
            Ok((true, vec![]))
        }
        Event::Cancel => {
            let had_pending = state.pending.take().is_some();
            Ok((had_pending, vec![]))
        }

        Event::Export => {
            let contents = state.store.export_json()?;
            tracing::info!(bytes = contents.len(), "export prepared");
            Ok((
                false,
                vec![Action::ExportFile {
                    filename: EXPORT_FILE_NAME.to_string(),
                    contents,
                }],
            ))
        }
    }
}

/// Validates the form, awaits the photo read, then creates the post.
///
/// Nothing is read when the form is incomplete. When a photo is selected the
/// post is only created after encoding finishes; a failed read creates
/// nothing.
///
/// # Errors
///
/// Propagates errors from [`handle_event`].
///
/// # Example
///
/// ```rust
/// use wandernotes::app::{submit_post, AppState};
/// use wandernotes::photo::{FilePhotoReader, PhotoSelection};
/// use wandernotes::storage::{MemoryStore, PostStore};
/// use wandernotes::ui::Theme;
///
/// # async fn run() -> wandernotes::Result<()> {
/// let mut state = AppState::new(PostStore::open(MemoryStore::default()), Theme::default());
/// state.form.title = "Evening Walk".into();
/// state.form.location = "Pune".into();
/// state.form.content = "Quiet lanes".into();
/// submit_post(&mut state, &FilePhotoReader, &PhotoSelection::NotSelected).await?;
/// assert_eq!(state.store.list()[0].title, "Evening Walk");
/// # Ok(())
/// # }
/// ```
pub async fn submit_post<S, R>(
    state: &mut AppState<S>,
    reader: &R,
    selection: &PhotoSelection,
) -> Result<(bool, Vec<Action>)>
where
    S: KeyValueStore,
    R: PhotoReader + ?Sized,
{
    if let Err(e) = state.form.to_draft(String::new()).validate() {
        tracing::debug!(missing = ?e.missing, "submit rejected before photo read");
        state.set_status(e.to_string());
        return Ok((true, vec![]));
    }

    let photo = match reader.read(selection).await {
        Ok(photo) => photo,
        Err(e) => {
            return handle_event(state, &Event::PhotoFailed { error: e.to_string() });
        }
    };

    let draft = state.form.to_draft(photo.into_stored());
    handle_event(state, &Event::CreatePost(draft))
}

/// Reads the selection for the form's preview image.
///
/// A successful read dispatches `PhotoSelected` (with `None` when nothing was
/// chosen); a failed read dispatches `PhotoFailed`.
///
/// # Errors
///
/// Propagates errors from [`handle_event`].
pub async fn select_photo<S, R>(
    state: &mut AppState<S>,
    reader: &R,
    selection: &PhotoSelection,
) -> Result<(bool, Vec<Action>)>
where
    S: KeyValueStore,
    R: PhotoReader + ?Sized,
{
    match photo::preview(reader, selection).await {
        Ok(preview) => handle_event(state, &Event::PhotoSelected { preview }),
        Err(e) => handle_event(state, &Event::PhotoFailed { error: e.to_string() }),
    }
}

fn request_confirmation<S: KeyValueStore>(
    state: &mut AppState<S>,
    pending: PendingConfirmation,
) -> (bool, Vec<Action>) {
    let prompt = pending.prompt().to_string();
    state.pending = Some(pending);
    (true, vec![Action::RequestConfirmation { prompt }])
}

fn confirm_delete<S: KeyValueStore>(state: &mut AppState<S>, id: &str) {
    if state.detail.open_id() == Some(id) {
        state.detail = DetailState::Closed;
    }
    match state.store.delete(id) {
        Ok(true) => state.set_status(STATUS_DELETED),
        Ok(false) => tracing::debug!(id = %id, "post already gone"),
        Err(e) => {
            tracing::error!(error = %e, "deletion kept in memory but not saved");
            state.set_status(not_saved(&e));
        }
    }
}

fn confirm_clear_all<S: KeyValueStore>(state: &mut AppState<S>) {
    state.detail = DetailState::Closed;
    match state.store.clear_all() {
        Ok(()) => state.set_status(STATUS_CLEARED),
        Err(e) => {
            tracing::error!(error = %e, "clear kept in memory but not saved");
            state.set_status(not_saved(&e));
        }
    }
}

fn not_saved(error: &WandernotesError) -> String {
    format!("Changes were not saved: {error}")
}

/// Short event name for span fields; drafts and photo data stay out of logs.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::FormEdited { .. } => "form_edited",
        Event::PhotoSelected { .. } => "photo_selected",
        Event::PhotoFailed { .. } => "photo_failed",
        Event::CreatePost(_) => "create_post",
        Event::SearchInput(_) => "search_input",
        Event::MoodFilterChanged(_) => "mood_filter_changed",
        Event::Key { .. } => "key",
        Event::OpenPost(_) => "open_post",
        Event::CloseDetail => "close_detail",
        Event::BackdropClicked => "backdrop_clicked",
        Event::DetailClicked => "detail_clicked",
        Event::DeleteRequested(_) => "delete_requested",
        Event::ClearAllRequested => "clear_all_requested",
        Event::Confirm => "confirm",
        Event::Cancel => "cancel",
        Event::Export => "export",
    }
}
