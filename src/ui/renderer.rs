//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to page components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `FeedViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers and wrap
//!    the result in a standalone HTML document styled from the theme
//!
//! # Example
//!
//! ```rust
//! use wandernotes::app::AppState;
//! use wandernotes::storage::{MemoryStore, PostStore};
//! use wandernotes::ui::{render, Theme};
//!
//! let state = AppState::new(PostStore::open(MemoryStore::default()), Theme::default());
//! let html = render(&state);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

use crate::app::AppState;
use crate::storage::KeyValueStore;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FeedViewModel;

/// Page stylesheet. Colours come from the `:root` variables emitted by
/// [`Theme::css_variables`].
const STYLESHEET: &str = "\
*{box-sizing:border-box}\
body{margin:0;padding:24px;font-family:system-ui,sans-serif;background:var(--bg);color:var(--text)}\
h1{margin:0 0 4px}\
.status{min-height:1.2em;color:var(--muted)}\
.composer,.toolbar{display:flex;flex-wrap:wrap;gap:8px;margin:16px 0}\
input,select,textarea{background:var(--surface);color:var(--text);border:1px solid var(--border);border-radius:8px;padding:8px}\
textarea{flex-basis:100%;min-height:96px}\
.btn{background:var(--surface);color:var(--text);border:1px solid var(--border);border-radius:8px;padding:6px 12px;cursor:pointer}\
.btn.primary{background:var(--accent);color:var(--bg)}\
.preview{max-width:240px;border-radius:8px}\
.feed{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:16px}\
.card,.modal-card{background:var(--surface);border:1px solid var(--border);border-radius:12px;padding:12px}\
.photo{width:100%;aspect-ratio:5/3;object-fit:cover;border-radius:8px}\
.meta{display:flex;justify-content:space-between;align-items:center;margin-top:8px}\
.tag{background:var(--tag);border-radius:999px;padding:2px 10px;font-size:12px}\
.title{font-weight:600;margin-top:4px}\
.small{font-size:13px}\
.muted,.empty{color:var(--muted)}\
.empty{grid-column:1/-1;text-align:center}\
.actions{display:flex;gap:8px;margin-top:8px}\
.content{white-space:pre-wrap}\
.footer{display:flex;justify-content:space-between;margin-top:24px;color:var(--muted)}\
.modal{display:none;position:fixed;inset:0;background:rgba(0,0,0,.6);align-items:center;justify-content:center;padding:24px}\
.modal.open{display:flex}\
.modal-card{max-width:720px;width:100%;max-height:100%;overflow:auto}";

/// Renders the full page for the current application state.
///
/// # Returns
///
/// A standalone HTML document.
pub fn render<S: KeyValueStore>(state: &AppState<S>) -> String {
    let viewmodel = state.compute_viewmodel();

    render_page(&viewmodel, &state.theme)
}

/// Wraps the rendered body in an HTML document with the theme's variables.
pub fn render_page(vm: &FeedViewModel, theme: &Theme) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\" />\n\
         <title>{title}</title>\n<style>{vars}{STYLESHEET}</style>\n</head>\n\
         <body>\n{body}\n</body>\n</html>\n",
        title = vm.header.title,
        vars = theme.css_variables(),
        body = components::render_body(vm),
    )
}
