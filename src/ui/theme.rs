//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the terminal UI, supporting
//! both built-in themes and custom themes loaded from TOML files. It provides
//! utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `noir`: Black background with cyan accents (default)
//! - `catppuccin-mocha`: Dark theme with warm tones
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#ffffff"
//! header_accent = "#22d3ee"
//! text_normal = "#d4d4d8"
//! text_dim = "#71717a"
//! border = "#27272a"
//! accent = "#06b6d4"
//! chip_fg = "#cffafe"
//! chip_bg = "#172554"
//! selection_fg = "#ffffff"
//! selection_bg = "#2563eb"
//! input_border = "#155e75"
//! error_fg = "#f87171"
//! loader_fg = "#22d3ee"
//! ```

use crate::domain::{FridgeChefError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "noir";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#22d3ee"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Product name in the header.
    pub header_fg: String,
    /// Highlighted "AI" suffix in the header.
    pub header_accent: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Body text.
    pub text_normal: String,
    /// Secondary text (tagline, footer, placeholders).
    pub text_dim: String,

    /// Separator lines and box borders.
    pub border: String,

    /// Section labels, step numbers and ingredient amounts.
    pub accent: String,

    /// Ingredient chip text.
    pub chip_fg: String,
    /// Ingredient chip background.
    pub chip_bg: String,

    /// Selected meal type text.
    pub selection_fg: String,
    /// Selected meal type background.
    pub selection_bg: String,

    /// Border of the inventory box.
    pub input_border: String,

    /// Error banner text and border.
    pub error_fg: String,

    /// Loading indicator.
    pub loader_fg: String,
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub const BUILT_IN: [&'static str; 3] = ["noir", "catppuccin-mocha", "catppuccin-latte"];

    /// Loads a built-in theme by name, or `None` if the name is unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fridgechef::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("sepia").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "noir" => include_str!("../../themes/noir.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FridgeChefError::Theme`] if the file cannot be read or is not
    /// a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            FridgeChefError::Theme(format!("failed to read theme file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| FridgeChefError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, falling back to white on bad input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color sequence for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the built-in `noir` theme.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse, which the unit tests rule
    /// out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in noir theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_built_in_theme_parses() {
        for name in Theme::BUILT_IN {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} failed to parse"));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn default_is_noir() {
        assert_eq!(Theme::default().name, "noir");
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#22d3ee"), "\u{1b}[38;2;34;211;238m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("#fff"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_custom_theme_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        assert_eq!(Theme::from_file(&path).unwrap(), theme);
    }

    #[test]
    fn bad_theme_file_is_theme_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "name = \"broken\"\n").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(FridgeChefError::Theme(_))));
        assert!(matches!(
            Theme::from_file(dir.path().join("missing.toml")),
            Err(FridgeChefError::Theme(_))
        ));
    }
}
