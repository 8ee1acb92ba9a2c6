//! New-post form component renderer.

use crate::domain::Mood;
use crate::ui::viewmodel::FormView;

/// Renders the new-post form, pre-filled with the current field values.
///
/// The photo preview is only emitted when a photo has been selected.
pub fn render_form(form: &FormView) -> String {
    let moods: String = Mood::ALL
        .into_iter()
        .map(|mood| {
            let marker = if mood == form.mood { " selected" } else { "" };
            format!("<option value=\"{}\"{marker}>{}</option>", mood.as_str(), mood.label())
        })
        .collect();

    let preview = form
        .photo_preview
        .as_deref()
        .map(|src| format!("<img id=\"preview\" class=\"preview\" src=\"{src}\" alt=\"Selected photo\" />"))
        .unwrap_or_default();

    format!(
        "<form id=\"composer\" class=\"composer\">\
         <input id=\"title\" placeholder=\"Title\" value=\"{title}\" />\
         <input id=\"location\" placeholder=\"Location\" value=\"{location}\" />\
         <select id=\"mood\">{moods}</select>\
         <textarea id=\"content\" placeholder=\"What happened?\">{content}</textarea>\
         <input id=\"photo\" type=\"file\" accept=\"image/*\" />{preview}\
         <button id=\"postBtn\" class=\"btn primary\" type=\"submit\">Post</button>\
         </form>",
        title = form.title,
        location = form.location,
        content = form.content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_has_no_preview() {
        let form = FormView {
            title: String::new(),
            location: String::new(),
            content: String::new(),
            mood: Mood::Relax,
            photo_preview: None,
        };
        let html = render_form(&form);
        assert!(!html.contains("id=\"preview\""));
        assert!(html.contains("<option value=\"relax\" selected>"));
        assert!(html.contains("value=\"\""));
    }
}
