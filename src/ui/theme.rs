//! Theme management and CSS colour generation.
//!
//! This module defines the colour scheme system for the rendered page,
//! supporting built-in palettes and custom palettes loaded from TOML files.
//! Colours end up in CSS custom properties and in the placeholder image.
//!
//! # Built-in Themes
//!
//! - `wandernotes-dusk`: Dark teal palette (default)
//! - `wandernotes-dawn`: Light paper palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! background = "#04141c"
//! surface = "#0b2533"
//! text = "#e6f1f6"
//! muted = "#8aa4b2"
//! accent = "#f2a65a"
//! border = "#16394a"
//! tag_bg = "#123244"
//! placeholder_bg = "#072e3d"
//! placeholder_fg = "#a8c0cf"
//! ```
//!
//! # Example
//!
//! ```rust
//! use wandernotes::ui::Theme;
//!
//! let theme = Theme::from_name("wandernotes-dawn").unwrap();
//! assert!(theme.css_variables().contains("--accent:#d9663b"));
//! ```

use crate::domain::error::{Result, WandernotesError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Colour scheme configuration for page rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Colour palette for all page elements.
    pub colors: ThemeColors,
}

/// Colour definitions for all page elements.
///
/// All colours are hex strings (e.g., "#cdd6f4"). Values that are not valid
/// six-digit hex fall back to white when rendered.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Page background.
    pub background: String,
    /// Card, form and modal background.
    pub surface: String,
    /// Body text.
    pub text: String,
    /// Secondary text (dates, locations, empty state).
    pub muted: String,
    /// Buttons and focus rings.
    pub accent: String,
    /// Card borders and separators.
    pub border: String,
    /// Mood tag background.
    pub tag_bg: String,
    /// Placeholder image fill.
    pub placeholder_bg: String,
    /// Placeholder image caption.
    pub placeholder_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "wandernotes-dusk" => include_str!("../../themes/wandernotes-dusk.toml"),
            "wandernotes-dawn" => include_str!("../../themes/wandernotes-dawn.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`WandernotesError::Theme`] if the file cannot be read or the
    /// TOML content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| WandernotesError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| WandernotesError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex colour to an RGB tuple.
    ///
    /// Strips `#` prefix if present, validates length, and parses hex digits.
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Normalizes a configured colour to `#rrggbb`.
    ///
    /// Only the normalized form reaches the page, so a theme file cannot
    /// inject arbitrary CSS.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wandernotes::ui::Theme;
    ///
    /// assert_eq!(Theme::css_color("F2A65A"), "#f2a65a");
    /// assert_eq!(Theme::css_color("red;}body{"), "#ffffff");
    /// ```
    #[must_use]
    pub fn css_color(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Renders the palette as a `:root` block of CSS custom properties.
    #[must_use]
    pub fn css_variables(&self) -> String {
        let c = &self.colors;
        let vars = [
            ("bg", &c.background),
            ("surface", &c.surface),
            ("text", &c.text),
            ("muted", &c.muted),
            ("accent", &c.accent),
            ("border", &c.border),
            ("tag", &c.tag_bg),
        ];

        let body: String = vars
            .iter()
            .map(|(name, value)| format!("--{name}:{};", Self::css_color(value)))
            .collect();
        format!(":root{{{body}}}")
    }
}

impl Default for Theme {
    /// Returns the default theme (Wandernotes Dusk).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("wandernotes-dusk")
            .expect("Built-in wandernotes-dusk theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::default().name, "wandernotes-dusk");
        assert_eq!(Theme::from_name("wandernotes-dawn").unwrap().name, "wandernotes-dawn");
        assert!(Theme::from_name("catppuccin-mocha").is_none());
    }

    #[test]
    fn default_placeholder_colours() {
        let theme = Theme::default();
        assert_eq!(Theme::css_color(&theme.colors.placeholder_bg), "#072e3d");
        assert_eq!(Theme::css_color(&theme.colors.placeholder_fg), "#a8c0cf");
    }

    #[test]
    fn custom_theme_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.toml");
        let dusk = include_str!("../../themes/wandernotes-dusk.toml").replace("wandernotes-dusk", "mine");
        fs::write(&path, dusk).unwrap();

        assert_eq!(Theme::from_file(&path).unwrap().name, "mine");
    }

    #[test]
    fn broken_theme_file_is_a_theme_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "name = ").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(WandernotesError::Theme(_))));
        assert!(matches!(
            Theme::from_file(dir.path().join("missing.toml")),
            Err(WandernotesError::Theme(_))
        ));
    }

    #[test]
    fn css_variables_are_normalized() {
        let mut theme = Theme::default();
        theme.colors.accent = "ABCDEF".to_string();
        let css = theme.css_variables();
        assert!(css.starts_with(":root{--bg:#04141c;"));
        assert!(css.contains("--accent:#abcdef;"));
    }
}
