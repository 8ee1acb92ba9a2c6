//! Composable HTML component renderers.
//!
//! This module provides specialized rendering components for different page
//! elements. Each component is a pure function from a view model fragment to
//! an HTML string; none of them escapes, because view models hold escaped
//! text already.
//!
//! # Components
//!
//! - [`header`]: Page title and status line
//! - [`form`]: New-post form with photo preview
//! - [`toolbar`]: Search box, mood filter, export and clear buttons
//! - [`feed`]: Card grid
//! - [`empty`]: Empty state message for an empty feed
//! - [`detail`]: Detail modal for one post
//! - [`confirm`]: Confirmation dialog
//! - [`footer`]: Keybinding hints and post count
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Form]
//! [Toolbar]
//! [Feed | Empty state]
//! [Footer]
//! [Detail modal]        (when open)
//! [Confirmation dialog] (when pending)
//! ```

pub mod confirm;
pub mod detail;
pub mod empty;
pub mod feed;
pub mod footer;
pub mod form;
pub mod header;
pub mod toolbar;

pub use feed::{render_card, render_feed};

use crate::ui::viewmodel::FeedViewModel;

use confirm::render_confirmation;
use detail::render_detail;
use footer::render_footer;
use form::render_form;
use header::render_header;
use toolbar::render_toolbar;

/// Renders the page body in layout order.
pub fn render_body(vm: &FeedViewModel) -> String {
    let mut body = String::new();

    body.push_str(&render_header(&vm.header));
    body.push_str(&render_form(&vm.form));
    body.push_str(&render_toolbar(&vm.toolbar));
    body.push_str(&render_feed(&vm.cards, vm.empty_state.as_ref()));
    body.push_str(&render_footer(&vm.footer));

    if let Some(detail) = &vm.detail {
        body.push_str(&render_detail(detail));
    }
    if let Some(confirmation) = &vm.confirmation {
        body.push_str(&render_confirmation(confirmation));
    }

    body
}
