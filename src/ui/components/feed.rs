//! Feed component renderer.
//!
//! This module renders the card grid. Each card carries `Open` and `Delete`
//! buttons keyed by the post id through `data-id`.

use crate::ui::components::empty::render_empty_state;
use crate::ui::viewmodel::{DisplayCard, EmptyState};

/// Renders a single feed card.
///
/// # Layout
///
/// ```text
/// image
/// date                 [mood]
/// title
/// location
/// excerpt...
/// [Open] [Delete]
/// ```
pub fn render_card(card: &DisplayCard) -> String {
    format!(
        "<article class=\"card\" data-id=\"{id}\">\
         <img src=\"{src}\" class=\"photo\" loading=\"lazy\" alt=\"{title}\" />\
         <div class=\"meta\"><div class=\"small\">{date}</div><div class=\"tag\">{mood}</div></div>\
         <div class=\"title\">{title}</div>\
         <div class=\"small muted\">{location}</div>\
         <p class=\"excerpt\">{excerpt}</p>\
         <div class=\"actions\">\
         <button class=\"btn\" data-id=\"{id}\" data-action=\"open\">Open</button>\
         <button class=\"btn\" data-id=\"{id}\" data-action=\"delete\">Delete</button>\
         </div></article>",
        id = card.id,
        src = card.image_src,
        title = card.title,
        date = card.date_label,
        mood = card.mood,
        location = card.location,
        excerpt = card.excerpt,
    )
}

/// Renders the feed section: one card per entry, or the empty state.
///
/// # Parameters
///
/// * `cards` - Cards in display order
/// * `empty` - Empty state to show when there are no cards
pub fn render_feed(cards: &[DisplayCard], empty: Option<&EmptyState>) -> String {
    let body = match empty {
        Some(empty) if cards.is_empty() => render_empty_state(empty),
        _ => cards.iter().map(render_card).collect(),
    };
    format!("<section id=\"feed\" class=\"feed\">{body}</section>")
}
