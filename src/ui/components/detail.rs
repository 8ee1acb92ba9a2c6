//! Detail surface component renderer.
//!
//! The detail surface is a modal: a full-page backdrop holding a card with the
//! whole post. The backdrop and the card carry distinct `data-action`
//! attributes so a click on the backdrop closes the surface while a click
//! inside the card does nothing.

use crate::ui::viewmodel::DetailView;

/// Renders the open detail surface.
///
/// # Parameters
///
/// * `detail` - Escaped post fields with full content
///
/// # Layout
///
/// ```text
/// ┌ backdrop (data-action="backdrop") ─────────────┐
/// │  ┌ card (data-action="detail") ─────────────┐  │
/// │  │ image                                     │  │
/// │  │ title                                     │  │
/// │  │ location • date                   [mood] │  │
/// │  │ content                                   │  │
/// │  │ [Close]                                   │  │
/// │  └───────────────────────────────────────────┘  │
/// └─────────────────────────────────────────────────┘
/// ```
pub fn render_detail(detail: &DetailView) -> String {
    format!(
        "<div id=\"modal\" class=\"modal open\" data-action=\"backdrop\">\
         <article class=\"modal-card\" data-action=\"detail\" data-id=\"{id}\">\
         <img class=\"photo\" src=\"{src}\" alt=\"{title}\" />\
         <h2>{title}</h2>\
         <div class=\"meta\"><div class=\"small\">{location} &bull; {date}</div>\
         <div class=\"tag\">{mood}</div></div>\
         <p class=\"content\">{content}</p>\
         <button class=\"btn\" data-action=\"close\">Close</button>\
         </article></div>",
        id = detail.id,
        src = detail.image_src,
        title = detail.title,
        location = detail.location,
        date = detail.date_label,
        mood = detail.mood,
        content = detail.content,
    )
}
