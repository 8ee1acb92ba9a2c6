//! Header component renderer.
//!
//! This module renders the page heading and the status line below it.

use crate::ui::viewmodel::HeaderInfo;

/// Renders the page header.
///
/// The status paragraph is always present so its `role="status"` region
/// exists before any message arrives; it is empty when there is no status.
///
/// # Parameters
///
/// * `header` - Header information (title and optional status message)
///
/// # Returns
///
/// The `<header>` element as a string.
pub fn render_header(header: &HeaderInfo) -> String {
    format!(
        "<header class=\"header\"><h1>{title}</h1>\
         <p id=\"status\" class=\"status\" role=\"status\">{status}</p></header>",
        title = header.title,
        status = header.status.as_deref().unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_slot_is_always_rendered() {
        let header = HeaderInfo { title: "Wandernotes".to_string(), status: None };
        let html = render_header(&header);
        assert!(html.contains("<h1>Wandernotes</h1>"));
        assert!(html.contains("role=\"status\"></p>"));
    }
}
