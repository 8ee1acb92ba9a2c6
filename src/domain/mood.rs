//! Mood tags and the feed's mood filter.
//!
//! Moods form a small fixed vocabulary chosen from the creation form. Stored
//! posts keep the mood as plain text, so the enum only guards the input side;
//! the filter compares against the stored text exactly.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sentinel value of the mood filter selector that disables mood filtering.
pub const ALL_MOODS: &str = "all";

/// A mood tag selectable when creating a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mood {
    /// Slow days, views, tea.
    #[default]
    Relax,
    /// Street food, markets, restaurants.
    Food,
    /// Hikes, treks, anything with a trailhead.
    Adventure,
    /// Museums, temples, festivals.
    Culture,
}

impl Mood {
    /// Every mood, in selector order.
    pub const ALL: [Self; 4] = [Self::Relax, Self::Food, Self::Adventure, Self::Culture];

    /// The stored form of the tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relax => "relax",
            Self::Food => "food",
            Self::Adventure => "adventure",
            Self::Culture => "culture",
        }
    }

    /// Human-readable label for selector options.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relax => "Relax",
            Self::Food => "Food",
            Self::Adventure => "Adventure",
            Self::Culture => "Culture",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known mood tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood '{0}' (expected one of: relax, food, adventure, culture)")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

/// Mood filter applied to the feed.
///
/// # Examples
///
/// ```
/// use wandernotes::domain::{Mood, MoodFilter};
///
/// let filter: MoodFilter = "food".parse().unwrap();
/// assert_eq!(filter, MoodFilter::Only(Mood::Food));
/// assert!(filter.matches("food"));
/// assert!(!filter.matches("Food"));
/// assert!(MoodFilter::All.matches("anything"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodFilter {
    /// Every post passes.
    #[default]
    All,
    /// Only posts whose stored mood equals this tag exactly.
    Only(Mood),
}

impl MoodFilter {
    /// Returns `true` if a post with the given stored mood passes the filter.
    ///
    /// Comparison is exact and case-sensitive.
    #[must_use]
    pub fn matches(self, mood: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted.as_str() == mood,
        }
    }

    /// The selector value for this filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => ALL_MOODS,
            Self::Only(mood) => mood.as_str(),
        }
    }
}

impl FromStr for MoodFilter {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_MOODS {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_mood() {
        for mood in Mood::ALL {
            assert_eq!(mood.as_str().parse::<Mood>(), Ok(mood));
        }
    }

    #[test]
    fn rejects_unknown_and_differently_cased_moods() {
        assert!("Relax".parse::<Mood>().is_err());
        assert_eq!(
            "party".parse::<Mood>(),
            Err(UnknownMood("party".to_string()))
        );
    }

    #[test]
    fn filter_sentinel_parses_to_all() {
        assert_eq!("all".parse::<MoodFilter>(), Ok(MoodFilter::All));
        assert_eq!(MoodFilter::All.as_str(), "all");
    }

    #[test]
    fn only_filter_is_case_sensitive() {
        let filter = MoodFilter::Only(Mood::Relax);
        assert!(filter.matches("relax"));
        assert!(!filter.matches("RELAX"));
        assert!(!filter.matches(" relax"));
    }
}
