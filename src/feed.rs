//! Feed derivation and card summaries.
//!
//! [`derive`] turns a snapshot of the store into the sequence the feed shows.
//! [`summarize`] and [`open_detail`] turn a post into escaped display data.
//! All three are pure functions of their inputs; the store is never touched.
//!
//! # Filtering Algorithm
//!
//! 1. **Mood**: pass if the filter is `All` or equals the stored mood exactly
//! 2. **Text**: trim and lowercase the term; pass if it is empty or occurs in
//!    the lowercased `title location content` haystack
//! 3. **Order**: stable sort by creation date, newest first; undated posts last

use crate::domain::{MoodFilter, Post};
use crate::ui::helpers::{
    card_date_label, detail_date_label, escape_html, excerpt, placeholder_image,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, DisplayCard};
use chrono::{DateTime, Utc};

/// Returns `true` if `post` passes the text filter for an already
/// trimmed and lowercased `needle`.
fn matches_text(post: &Post, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = format!("{} {} {}", post.title, post.location, post.content).to_lowercase();
    haystack.contains(needle)
}

/// Derives the displayed feed from `posts` and the current filter state.
///
/// # Examples
///
/// ```
/// use wandernotes::domain::MoodFilter;
/// use wandernotes::feed::derive;
/// use wandernotes::storage::{MemoryStore, PostStore};
///
/// let store = PostStore::open(MemoryStore::default());
/// let feed = derive(store.list(), "  KOLKATA ", MoodFilter::All);
/// assert_eq!(feed.len(), 1);
/// assert_eq!(feed[0].title, "Street Food Crawl");
/// ```
#[must_use]
pub fn derive<'a>(posts: &'a [Post], search_term: &str, mood: MoodFilter) -> Vec<&'a Post> {
    let needle = search_term.trim().to_lowercase();

    let _span = tracing::debug_span!("derive_feed",
        total_posts = posts.len(),
        query_len = needle.len(),
        mood = mood.as_str()
    ).entered();

    let mut keyed: Vec<(Option<DateTime<Utc>>, &Post)> = posts
        .iter()
        .filter(|post| mood.matches(&post.mood) && matches_text(post, &needle))
        .map(|post| (post.created_at(), post))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));

    tracing::debug!(filtered_count = keyed.len(), "feed derived");
    keyed.into_iter().map(|(_, post)| post).collect()
}

/// Image source for a post: its own photo, or the title placeholder.
fn image_src(post: &Post, theme: &Theme) -> String {
    if post.has_photo() {
        escape_html(&post.photo).into_owned()
    } else {
        placeholder_image(&post.title, theme)
    }
}

/// Builds the card summary for `post`.
///
/// # Example
///
/// ```
/// use wandernotes::domain::Post;
/// use wandernotes::feed::summarize;
/// use wandernotes::ui::Theme;
///
/// let post = Post { title: "<script>alert(1)</script>".into(), ..Post::default() };
/// let card = summarize(&post, &Theme::default());
/// assert_eq!(card.title, "&lt;script&gt;alert(1)&lt;&#x2F;script&gt;");
/// ```
#[must_use]
pub fn summarize(post: &Post, theme: &Theme) -> DisplayCard {
    DisplayCard {
        id: escape_html(&post.id).into_owned(),
        title: escape_html(&post.title).into_owned(),
        location: escape_html(&post.location).into_owned(),
        mood: escape_html(&post.mood).into_owned(),
        date_label: card_date_label(post.created_at()),
        excerpt: escape_html(&excerpt(&post.content)).into_owned(),
        image_src: image_src(post, theme),
    }
}

/// Builds the detail view for `post`, with the full content.
#[must_use]
pub fn open_detail(post: &Post, theme: &Theme) -> DetailView {
    DetailView {
        id: escape_html(&post.id).into_owned(),
        title: escape_html(&post.title).into_owned(),
        location: escape_html(&post.location).into_owned(),
        mood: escape_html(&post.mood).into_owned(),
        date_label: detail_date_label(post.created_at()),
        content: escape_html(&post.content).into_owned(),
        image_src: image_src(post, theme),
    }
}
