//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler. Actions bridge pure state transformations and
//! effectful operations the library cannot perform itself: asking the user a
//! question, handing a file to the user, moving keyboard focus.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The binary executes them in
//! order. Whether the page needs re-rendering is reported separately, as the
//! `bool` half of the handler's result.
//!
//! # Example
//!
//! ```rust
//! use wandernotes::app::Action;
//!
//! let actions = vec![Action::RequestConfirmation {
//!     prompt: "Delete this post?".to_string(),
//! }];
//! ```

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Ask the user a yes/no question.
    ///
    /// The runtime answers with `Event::Confirm` or `Event::Cancel`. State
    /// holds the pending operation until then.
    RequestConfirmation {
        /// Question to show.
        prompt: String,
    },

    /// Hand a generated file to the user (a download in a browser, a file
    /// write on the command line).
    ExportFile {
        /// Suggested file name.
        filename: String,
        /// Full file contents.
        contents: String,
    },

    /// Move keyboard focus to the search box.
    FocusSearch,
}
