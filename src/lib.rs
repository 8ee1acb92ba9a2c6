//! Wandernotes: a local travel journal with a searchable card feed.
//!
//! Wandernotes keeps mood-tagged travel posts on the local machine and
//! renders them as a standalone HTML page:
//! - Posts with title, location, mood, free text and an optional inline photo
//! - Persistence in a local slot store, one JSON document per slot
//! - Case-insensitive search and mood filtering over a newest-first feed
//! - Detail view, confirmed deletion, clear-all and JSON export
//! - Sample posts on first run, self-healing on corrupt data

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Command-line runtime (main.rs)                     │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Feed / Photo  │
//! │ (ui/)         │   │ (storage/)    │   │ (feed, photo) │
//! │ - HTML pages  │   │ - Slot stores │   │ - Filter/sort │
//! │ - Theming     │   │ - PostStore   │   │ - Summaries   │
//! │ - Components  │   │ - JSON codec  │   │ - Async read  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory resolution (infrastructure/)      │
//! │  - Error types (domain/error)                       │
//! │  - Post and mood models (domain/post, domain/mood)  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Post, Mood, errors)
//! - [`feed`]: Feed derivation, card summaries and detail views
//! - [`infrastructure`]: Data directory and path helpers
//! - [`photo`]: Asynchronous photo reading and data URI encoding
//! - [`storage`]: Slot stores and the post store
//! - [`ui`]: HTML rendering with theme support
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! Configuration is a flat TOML table of strings:
//!
//! ```toml
//! # ~/.config/wandernotes/config.toml
//! data_dir = "~/journal"
//! theme = "wandernotes-dawn"
//! theme_file = "~/journal/my-theme.toml"
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use wandernotes::{handle_event, Event};
//! use wandernotes::storage::{MemoryStore, PostStore};
//! use wandernotes::{AppState, Theme};
//!
//! let mut state = AppState::new(PostStore::open(MemoryStore::default()), Theme::default());
//! handle_event(&mut state, &Event::SearchInput("kolkata".to_string()))?;
//!
//! let page = wandernotes::ui::render(&state);
//! assert!(page.contains("Street Food Crawl"));
//! assert!(!page.contains("Sunrise at Tiger Hill"));
//! # Ok::<(), wandernotes::WandernotesError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Single Owner
//!
//! [`storage::PostStore`] is the only code that mutates posts. Everything else
//! reads `&[Post]` snapshots, and the feed is re-derived from scratch on every
//! render.
//!
//! ## Whole-Collection Writes
//!
//! Every mutation serializes the full collection into one slot. Collections
//! are small and the write is atomic (temporary file plus rename).
//!
//! ## Escaped View Models
//!
//! User text is escaped once, when view models are built, so components never
//! see raw input.

pub mod app;
pub mod domain;
pub mod feed;
pub mod infrastructure;
pub mod photo;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, select_photo, submit_post, Action, AppState, Event};
pub use domain::{Mood, MoodFilter, Post, PostDraft, Result, WandernotesError};
pub use ui::Theme;

use crate::storage::{FileStore, PostStore};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Built-in theme used when none is configured.
pub const DEFAULT_THEME: &str = "wandernotes-dusk";

/// Runtime configuration.
///
/// Values come from a TOML file, the command line, or both (command-line
/// flags win).
///
/// # Example
///
/// ```toml
/// data_dir = "~/journal"
/// theme = "wandernotes-dawn"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the slot files and the log file.
    ///
    /// Default: `WANDERNOTES_DATA_DIR`, else `~/.local/share/wandernotes`.
    pub data_dir: PathBuf,

    /// Built-in theme name to use.
    ///
    /// Options: `wandernotes-dusk`, `wandernotes-dawn`. Ignored if
    /// `theme_file` is set.
    pub theme_name: String,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<PathBuf>,

    /// Log level.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: infrastructure::get_data_dir(),
            theme_name: DEFAULT_THEME.to_string(),
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Extracts and parses typed values with fallback defaults. Unknown keys
    /// are ignored.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`: String → `PathBuf` (tilde expanded; blank falls back)
    /// - `theme`: String → `String` (blank falls back to the default theme)
    /// - `theme_file`: String → `Option<PathBuf>` (tilde expanded)
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::path::PathBuf;
    /// use wandernotes::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_dir".to_string(), "/srv/journal".to_string());
    /// map.insert("theme".to_string(), "wandernotes-dawn".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.data_dir, PathBuf::from("/srv/journal"));
    /// assert_eq!(config.theme_name, "wandernotes-dawn");
    /// assert_eq!(config.theme_file, None);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        Self {
            data_dir: non_blank(config, "data_dir")
                .map_or_else(infrastructure::get_data_dir, infrastructure::expand_tilde),
            theme_name: non_blank(config, "theme").unwrap_or(DEFAULT_THEME).to_string(),
            theme_file: non_blank(config, "theme_file").map(infrastructure::expand_tilde),
            trace_level: non_blank(config, "trace_level").map(str::to_string),
        }
    }

    /// Reads configuration from a TOML file of string values.
    ///
    /// # Errors
    ///
    /// Returns [`WandernotesError::Config`] if the file cannot be read or is
    /// not a flat table of strings.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            WandernotesError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        let map: BTreeMap<String, String> = toml::from_str(&contents).map_err(|e| {
            WandernotesError::Config(format!("failed to parse {}: {e}", path.display()))
        })?;

        Ok(Self::from_map(&map))
    }

    /// Resolves the configured theme.
    ///
    /// A theme file that fails to load, or an unknown theme name, falls back
    /// to the default theme with a warning.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = ?theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        Theme::from_name(&self.theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %self.theme_name, "unknown theme, using default");
            Theme::default()
        })
    }
}

/// Trimmed value for `key`, or `None` when absent or blank.
fn non_blank<'a>(config: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    config
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

/// Opens the on-disk store and builds the application state.
///
/// # Parameters
///
/// * `config` - Runtime configuration
///
/// # Returns
///
/// An initialized `AppState` with the persisted posts loaded (or seeded).
///
/// # Errors
///
/// Returns an error if the data directory cannot be created.
///
/// # Example
///
/// ```rust
/// use wandernotes::{initialize, Config};
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config { data_dir: dir.path().to_path_buf(), ..Config::default() };
/// let state = initialize(&config)?;
/// assert_eq!(state.store.list().len(), 2);
/// # Ok::<(), wandernotes::WandernotesError>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppState<FileStore>> {
    let _span = tracing::debug_span!("initialize", data_dir = ?config.data_dir).entered();

    let backend = FileStore::open(config.data_dir.clone())?;
    let mut store = PostStore::new(backend);
    let outcome = store.load();
    tracing::info!(outcome = ?outcome, posts = store.list().len(), "store loaded");

    Ok(AppState::new(store, config.load_theme()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fall_back() {
        let mut map = BTreeMap::new();
        map.insert("theme".to_string(), "  ".to_string());
        map.insert("trace_level".to_string(), String::new());

        let config = Config::from_map(&map);
        assert_eq!(config.theme_name, DEFAULT_THEME);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/srv/j\"\ntrace_level = \"debug\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/j"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn non_string_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "trace_level = 3\n").unwrap();

        assert!(matches!(Config::from_file(&path), Err(WandernotesError::Config(_))));
    }

    #[test]
    fn theme_resolution_falls_back() {
        let config = Config {
            theme_name: "neon".to_string(),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, DEFAULT_THEME);

        let config = Config {
            theme_file: Some(PathBuf::from("/nonexistent/theme.toml")),
            theme_name: "wandernotes-dawn".to_string(),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, DEFAULT_THEME);
    }
}
