//! Empty state component renderer.
//!
//! This module renders the single indicator shown when the derived feed is
//! empty, whether because nothing is stored or because the filters match
//! nothing.

use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// Spans every grid column so it sits centred across the feed.
pub fn render_empty_state(empty: &EmptyState) -> String {
    format!("<div class=\"empty\">{}</div>", empty.message)
}
