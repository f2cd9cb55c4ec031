//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin, supporting both
//! built-in themes (Catppuccin variants) and custom themes loaded from TOML files.
//! The gallery keeps one theme for dark mode and one for light mode and switches
//! between them when the dark-mode preference flips.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default dark)
//! - `catppuccin-latte`: Light theme with soft pastels (default light)
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! favorite_fg = "#f38ba8"
//! category_fg = "#94e2d5"
//! active_filter_fg = "#1e1e2e"
//! active_filter_bg = "#cba6f7"
//! lightbox_border = "#b4befe"
//! ```

use crate::domain::error::{Result, WallgridError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in theme used in dark mode unless configured otherwise.
pub const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";

/// Built-in theme used in light mode unless configured otherwise.
pub const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card foreground color.
    pub selection_fg: String,
    /// Selected card background color.
    pub selection_bg: String,

    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Informational message and placeholder color.
    pub empty_state_fg: String,
    /// Fetch error message color.
    pub error_fg: String,

    /// Favorite glyph color.
    pub favorite_fg: String,
    /// Category label color on cards.
    pub category_fg: String,

    /// Active category chip colors.
    pub active_filter_fg: String,
    pub active_filter_bg: String,

    pub lightbox_border: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe`, `catppuccin-macchiato`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wallgrid::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`WallgridError::Theme`] if the file cannot be read or its TOML
    /// content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| WallgridError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| WallgridError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Plain palette used only if a built-in theme fails to parse.
    fn fallback(name: &str) -> Self {
        let white = "#ffffff".to_string();
        let grey = "#808080".to_string();
        let black = "#000000".to_string();

        Self {
            name: name.to_string(),
            colors: ThemeColors {
                header_fg: white.clone(),
                header_bg: None,
                selection_fg: black.clone(),
                selection_bg: white.clone(),
                text_normal: white.clone(),
                text_dim: grey.clone(),
                border: grey.clone(),
                search_bar_border: white.clone(),
                match_highlight_fg: black.clone(),
                match_highlight_bg: white.clone(),
                empty_state_fg: white.clone(),
                error_fg: white.clone(),
                favorite_fg: white.clone(),
                category_fg: grey.clone(),
                active_filter_fg: black,
                active_filter_bg: white.clone(),
                lightbox_border: white,
            },
        }
    }

    /// Loads a built-in theme, falling back to a plain palette.
    #[must_use]
    pub fn builtin(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %name, "unknown built-in theme, using plain palette");
            Self::fallback(name)
        })
    }

    /// Converts a hex color to RGB tuple.
    ///
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

    /// ANSI 24-bit foreground color escape sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wallgrid::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
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

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The default dark theme (Catppuccin Mocha).
    fn default() -> Self {
        Self::builtin(DEFAULT_DARK_THEME)
    }
}

/// The two themes the dark-mode toggle switches between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePair {
    pub dark: Theme,
    pub light: Theme,
}

impl ThemePair {
    #[must_use]
    pub const fn select(&self, dark_mode: bool) -> &Theme {
        if dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}

impl Default for ThemePair {
    fn default() -> Self {
        Self {
            dark: Theme::builtin(DEFAULT_DARK_THEME),
            light: Theme::builtin(DEFAULT_LIGHT_THEME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_theme_parses() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} failed to parse"));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_builtin_is_none() {
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::builtin("solarized").name, "solarized");
    }

    #[test]
    fn hex_parsing_falls_back_to_white() {
        assert_eq!(Theme::fg("#zzzzzz"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("123"), "\u{1b}[48;2;255;255;255m");
        assert_eq!(Theme::bg("#010203"), "\u{1b}[48;2;1;2;3m");
    }

    #[test]
    fn pair_selects_by_mode() {
        let pair = ThemePair::default();
        assert_eq!(pair.select(true).name, DEFAULT_DARK_THEME);
        assert_eq!(pair.select(false).name, DEFAULT_LIGHT_THEME);
    }

    #[test]
    fn custom_theme_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        std::fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        assert_eq!(Theme::from_file(&path).unwrap(), theme);
    }

    #[test]
    fn bad_theme_file_is_a_theme_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = ").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(WallgridError::Theme(_))));
        assert!(matches!(
            Theme::from_file(dir.path().join("missing.toml")),
            Err(WallgridError::Theme(_))
        ));
    }
}
