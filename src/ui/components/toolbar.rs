//! Toolbar component renderer.
//!
//! This module renders the search box, the mood filter and the collection
//! actions (export and clear all).

use crate::domain::{Mood, MoodFilter};
use crate::ui::viewmodel::ToolbarInfo;

/// Renders the `<option>` list for the mood filter.
fn render_filter_options(selected: MoodFilter) -> String {
    std::iter::once(MoodFilter::All)
        .chain(Mood::ALL.into_iter().map(MoodFilter::Only))
        .map(|filter| {
            let label = match filter {
                MoodFilter::All => "All moods",
                MoodFilter::Only(mood) => mood.label(),
            };
            let marker = if filter == selected { " selected" } else { "" };
            format!("<option value=\"{}\"{marker}>{label}</option>", filter.as_str())
        })
        .collect()
}

/// Renders the toolbar.
///
/// The search input gets `autofocus` when search focus was requested, which
/// is how the Ctrl+K / Cmd+K shortcut surfaces in a static page.
///
/// # Parameters
///
/// * `toolbar` - Escaped query, selected filter and focus flag
pub fn render_toolbar(toolbar: &ToolbarInfo) -> String {
    let autofocus = if toolbar.search_focused { " autofocus" } else { "" };
    format!(
        "<div class=\"toolbar\">\
         <input id=\"q\" type=\"search\" placeholder=\"Search posts\" value=\"{query}\"{autofocus} />\
         <select id=\"filterMood\">{options}</select>\
         <button id=\"exportBtn\" class=\"btn\" data-action=\"export\">Export JSON</button>\
         <button id=\"clearBtn\" class=\"btn\" data-action=\"clear\">Clear all</button>\
         </div>",
        query = toolbar.query,
        options = render_filter_options(toolbar.mood_filter),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_filter_and_focus_are_marked() {
        let toolbar = ToolbarInfo {
            query: "tea".to_string(),
            mood_filter: MoodFilter::Only(Mood::Food),
            search_focused: true,
        };
        let html = render_toolbar(&toolbar);

        assert!(html.contains("value=\"tea\" autofocus"));
        assert!(html.contains("<option value=\"food\" selected>"));
        assert!(html.contains("<option value=\"all\">All moods</option>"));
        assert_eq!(html.matches("selected").count(), 1);
    }
}
