//! Contents of the new-post form.

use crate::domain::{Mood, PostDraft};

/// Field values typed into the new-post form, plus the photo preview.
///
/// Reset to [`Default`] after a post is stored so the next one starts blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostForm {
    pub title: String,
    pub location: String,
    pub content: String,
    pub mood: Mood,
    /// Data URI of the selected photo, for the preview image.
    pub photo_preview: Option<String>,
}

impl PostForm {
    /// Builds a draft from the current values with the given encoded photo.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wandernotes::app::PostForm;
    /// use wandernotes::domain::Mood;
    ///
    /// let form = PostForm {
    ///     title: "Evening Walk".into(),
    ///     location: "Pune".into(),
    ///     content: "Quiet lanes".into(),
    ///     mood: Mood::Relax,
    ///     photo_preview: None,
    /// };
    /// assert!(form.to_draft(String::new()).validate().is_ok());
    /// ```
    #[must_use]
    pub fn to_draft(&self, photo: String) -> PostDraft {
        PostDraft::new(
            self.title.clone(),
            self.location.clone(),
            self.content.clone(),
            self.mood,
        )
        .with_photo(photo)
    }
}
