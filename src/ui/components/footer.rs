//! Footer component renderer.
//!
//! This module renders the footer with keybinding hints and the post count.

use crate::ui::viewmodel::FooterInfo;

/// Renders the footer bar.
///
/// # Example
///
/// ```text
/// <footer class="footer"><span class="small">Ctrl+K / Cmd+K: search</span>
/// <span class="small">2 of 2 posts</span></footer>
/// ```
pub fn render_footer(footer: &FooterInfo) -> String {
    format!(
        "<footer class=\"footer\"><span class=\"small\">{}</span>\
         <span class=\"small\">{}</span></footer>",
        footer.keybindings, footer.summary
    )
}
