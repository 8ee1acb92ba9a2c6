//! Shared rendering utilities and helpers.
//!
//! This module provides the low-level text handling used across the HTML
//! components: escaping user text, cutting excerpts, formatting dates and
//! building the placeholder image.
//!
//! # Features
//!
//! - **Escaping**: every piece of user text goes through [`escape_html`],
//!   which is safe in both element content and quoted attribute values
//! - **Excerpts**: cut on Unicode scalar values, never inside a code point
//! - **Placeholder**: a self-contained SVG data URI keyed by the title
//!
//! # Example
//!
//! ```rust
//! use wandernotes::ui::helpers::{escape_html, excerpt};
//!
//! assert_eq!(escape_html("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;&#x2F;b&gt;");
//! assert_eq!(excerpt("short"), "short");
//! ```

use crate::ui::theme::Theme;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// Maximum number of characters of content shown on a card.
pub const EXCERPT_CHARS: usize = 120;

/// Suffix appended to a truncated excerpt.
const ELLIPSIS: &str = "...";

/// Caption used by the placeholder when a post has no title.
const PLACEHOLDER_FALLBACK: &str = "photo";

/// Label shown for posts whose stored date does not parse.
const UNKNOWN_DATE: &str = "Unknown date";

/// Escapes text for insertion into HTML content or a quoted attribute value.
///
/// Replaces `&`, `<`, `>`, `"`, `'` and `/` with character references.
/// Returns the input unchanged (borrowed) when nothing needs escaping.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_safe(text)
}

/// Cuts `content` to [`EXCERPT_CHARS`] characters.
///
/// Appends `...` only when something was cut. The result is raw text and
/// still needs escaping.
///
/// # Example
///
/// ```rust
/// use wandernotes::ui::helpers::excerpt;
///
/// let long = "é".repeat(130);
/// let cut = excerpt(&long);
/// assert_eq!(cut.chars().count(), 123);
/// assert!(cut.ends_with("..."));
/// ```
#[must_use]
pub fn excerpt(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &content[..cut]),
        None => content.to_string(),
    }
}

/// Short date label for cards (`Jun 1, 2024`).
#[must_use]
pub fn card_date_label(created_at: Option<DateTime<Utc>>) -> String {
    created_at.map_or_else(
        || UNKNOWN_DATE.to_string(),
        |at| at.format("%b %-d, %Y").to_string(),
    )
}

/// Date and time label for the detail view (`Jun 1, 2024 18:05 UTC`).
#[must_use]
pub fn detail_date_label(created_at: Option<DateTime<Utc>>) -> String {
    created_at.map_or_else(
        || UNKNOWN_DATE.to_string(),
        |at| at.format("%b %-d, %Y %H:%M UTC").to_string(),
    )
}

/// Builds the placeholder image shown for posts without a photo.
///
/// The image is an 800x480 SVG with the title centred on a flat background,
/// encoded as a base64 data URI. The same title and theme always produce
/// the same URI.
///
/// # Parameters
///
/// * `title` - Caption text; an empty title falls back to `photo`
/// * `theme` - Supplies the background and caption colours
#[must_use]
pub fn placeholder_image(title: &str, theme: &Theme) -> String {
    let caption = if title.trim().is_empty() {
        PLACEHOLDER_FALLBACK
    } else {
        title
    };

    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='800' height='480'>\
         <rect width='100%' height='100%' fill='{bg}'/>\
         <text x='50%' y='50%' fill='{fg}' font-size='28' font-family='sans-serif' \
         dominant-baseline='middle' text-anchor='middle'>{caption}</text></svg>",
        bg = Theme::css_color(&theme.colors.placeholder_bg),
        fg = Theme::css_color(&theme.colors.placeholder_fg),
        caption = escape_html(caption),
    );

    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn decode_placeholder(uri: &str) -> String {
        let payload = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap()
    }

    #[test]
    fn escapes_script_tags_and_quotes() {
        let escaped = escape_html("<script>alert(1)</script> \"a\" 'b' & c");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        assert!(escaped.starts_with("&lt;script&gt;alert(1)&lt;&#x2F;script&gt;"));
        assert!(escaped.ends_with("&amp; c"));
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_html("Darjeeling, India"), Cow::Borrowed(_)));
    }

    #[test]
    fn excerpt_keeps_exactly_120_characters() {
        let exact = "a".repeat(EXCERPT_CHARS);
        assert_eq!(excerpt(&exact), exact);

        let longer = "b".repeat(EXCERPT_CHARS + 1);
        assert_eq!(excerpt(&longer), format!("{}...", "b".repeat(EXCERPT_CHARS)));
    }

    #[test]
    fn excerpt_counts_scalar_values_not_bytes() {
        let text = "日本".repeat(70);
        let cut = excerpt(&text);
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + ELLIPSIS.len());
    }

    #[test]
    fn placeholder_is_deterministic_and_themed() {
        let theme = Theme::default();
        let first = placeholder_image("Sunrise at Tiger Hill", &theme);
        assert_eq!(first, placeholder_image("Sunrise at Tiger Hill", &theme));
        assert_ne!(first, placeholder_image("Street Food Crawl", &theme));

        let svg = decode_placeholder(&first);
        assert!(svg.contains("fill='#072e3d'"));
        assert!(svg.contains("fill='#a8c0cf'"));
        assert!(svg.contains(">Sunrise at Tiger Hill</text>"));
    }

    #[test]
    fn placeholder_escapes_title_and_falls_back() {
        let theme = Theme::default();
        let svg = decode_placeholder(&placeholder_image("<b>", &theme));
        assert!(svg.contains(">&lt;b&gt;</text>"));

        let blank = decode_placeholder(&placeholder_image("  ", &theme));
        assert!(blank.contains(">photo</text>"));
    }

    #[test]
    fn date_labels() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 18, 5, 0).unwrap();
        assert_eq!(card_date_label(Some(at)), "Jun 1, 2024");
        assert_eq!(detail_date_label(Some(at)), "Jun 1, 2024 18:05 UTC");
        assert_eq!(card_date_label(None), "Unknown date");
    }
}
