//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into a standalone HTML page through
//! composable rendering components. It provides escaping and formatting
//! helpers, the view model types, and theme support.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → FeedViewModel → render_page → HTML
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable page state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable HTML component renderers
//! - [`helpers`]: Escaping, excerpts, date labels and the placeholder image
//! - [`theme`]: Colour palettes and CSS variable generation

pub mod viewmodel;
pub mod renderer;
pub mod components;
pub mod helpers;
pub mod theme;

pub use viewmodel::{
    ConfirmationView, DetailView, DisplayCard, EmptyState, FeedViewModel, FooterInfo, FormView,
    HeaderInfo, ToolbarInfo,
};
pub use renderer::{render, render_page};
pub use theme::Theme;
