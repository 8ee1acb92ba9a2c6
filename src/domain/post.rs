//! Post domain model.
//!
//! A [`Post`] is a single journal entry. Posts are created whole from a
//! validated [`PostDraft`], never edited, and removed only by id. The record
//! mirrors the persisted JSON object field for field.

use super::error::ValidationError;
use super::mood::Mood;
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

/// Number of random base-36 characters appended to the time component of an id.
const ID_RANDOM_LEN: usize = 5;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A persisted journal entry.
///
/// Every field is a string in the stored form. Missing or `null` fields in
/// stored data deserialize to empty strings, and numbers or booleans to their
/// JSON text, so records written by older or hand-edited layouts still load.
///
/// # Fields
///
/// - `id`: opaque unique identifier, assigned at creation
/// - `title`, `location`, `content`: trimmed free text
/// - `mood`: stored mood tag, not re-validated on load
/// - `photo`: empty, or a data URI holding the whole image
/// - `date`: ISO-8601 creation timestamp
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mood: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub photo: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
}

impl Post {
    /// Builds a post from a validated draft.
    ///
    /// Text fields are stored trimmed. The draft must already have passed
    /// [`PostDraft::validate`].
    #[must_use]
    pub fn from_draft(draft: PostDraft, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            location: draft.location.trim().to_string(),
            content: draft.content.trim().to_string(),
            mood: draft.mood.as_str().to_string(),
            photo: draft.photo,
            date: format_timestamp(created_at),
        }
    }

    /// Parses the stored creation date.
    ///
    /// Returns `None` if the stored string is not a valid RFC 3339 timestamp.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Returns `true` if the post carries its own photo.
    #[must_use]
    pub fn has_photo(&self) -> bool {
        !self.photo.is_empty()
    }
}

/// User input for a new post, before id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostDraft {
    pub title: String,
    pub location: String,
    pub content: String,
    pub mood: Mood,
    /// Encoded photo data URI, or empty when no photo was chosen.
    pub photo: String,
}

impl PostDraft {
    /// Creates a draft without a photo.
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        content: impl Into<String>,
        mood: Mood,
    ) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            content: content.into(),
            mood,
            photo: String::new(),
        }
    }

    /// Attaches an encoded photo.
    #[must_use]
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = photo.into();
        self
    }

    /// Checks that title, location and content are non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming every empty field.
    ///
    /// # Examples
    ///
    /// ```
    /// use wandernotes::domain::{Mood, PostDraft};
    ///
    /// let draft = PostDraft::new("  ", "Kyoto", "Temples", Mood::Culture);
    /// let err = draft.validate().unwrap_err();
    /// assert_eq!(err.missing, vec!["title"]);
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = [
            ("title", &self.title),
            ("location", &self.location),
            ("content", &self.content),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(missing))
        }
    }
}

/// Reads any JSON value as a stored string field.
///
/// `null` becomes the empty string, strings pass through, and anything else
/// is kept as its JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Formats a timestamp the way posts store it (`2024-05-01T06:30:00.000Z`).
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Generates a post id from a time component and a random component.
///
/// The id is the base-36 millisecond timestamp followed by five random base-36
/// characters. There is a single writer, so no central allocator is needed.
#[must_use]
pub fn generate_id(now: DateTime<Utc>) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let mut id = to_base36(millis);

    let mut rng = rand::rng();
    for _ in 0..ID_RANDOM_LEN {
        let digit = rng.random_range(0..BASE36_DIGITS.len());
        id.push(char::from(BASE36_DIGITS[digit]));
    }

    id
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        // value % 36 always fits the digit table
        #[allow(clippy::cast_possible_truncation)]
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn base36_matches_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn ids_share_time_prefix_and_differ() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 6, 30, 0).unwrap();
        let prefix = to_base36(u64::try_from(now.timestamp_millis()).unwrap());

        let ids: HashSet<String> = (0..200).map(|_| generate_id(now)).collect();
        assert!(ids.len() > 190);
        assert!(ids.iter().all(|id| id.starts_with(&prefix)));
        assert!(ids.iter().all(|id| id.len() == prefix.len() + ID_RANDOM_LEN));
    }

    #[test]
    fn from_draft_trims_and_stamps() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 6, 30, 0).unwrap();
        let draft = PostDraft::new("  Evening Walk ", " Pune ", " Quiet lanes\n", Mood::Relax);

        let post = Post::from_draft(draft, "abc".to_string(), now);

        assert_eq!(post.title, "Evening Walk");
        assert_eq!(post.location, "Pune");
        assert_eq!(post.content, "Quiet lanes");
        assert_eq!(post.mood, "relax");
        assert_eq!(post.date, "2024-05-01T06:30:00.000Z");
        assert_eq!(post.created_at(), Some(now));
        assert!(!post.has_photo());
    }

    #[test]
    fn validate_lists_every_blank_field() {
        let draft = PostDraft::new("", " \t", "ok", Mood::Food);
        let err = draft.validate().unwrap_err();
        assert_eq!(err.missing, vec!["title", "location"]);
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let post: Post = serde_json::from_str(r#"{"id":"x1","title":"Only a title"}"#).unwrap();
        assert_eq!(post.title, "Only a title");
        assert!(post.photo.is_empty());
        assert!(post.date.is_empty());
        assert_eq!(post.created_at(), None);
    }
}
