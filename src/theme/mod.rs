// Ghostty theme model
//
// A Theme is the parsed form of one Ghostty theme file: the 16-slot ANSI
// palette plus the handful of named base colors. Parsing lives in the
// `parser` submodule; everything derived from these colors lives in
// `crate::derive`.

mod parser;

pub use parser::{parse_theme_file, parse_theme_str, Directive, ThemeBuilder};

use crate::color::Rgb;
use std::collections::HashMap;

// ─────────────────────────────────────────────────────────────────────────────
// Defaults for fields absent from the source file
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(0x00, 0x00, 0x00);
pub const DEFAULT_FOREGROUND: Rgb = Rgb::new(0xff, 0xff, 0xff);
/// Cursor defaults to the foreground default, cursor text to the background.
pub const DEFAULT_CURSOR_COLOR: Rgb = DEFAULT_FOREGROUND;
pub const DEFAULT_CURSOR_TEXT: Rgb = DEFAULT_BACKGROUND;
pub const DEFAULT_SELECTION_BACKGROUND: Rgb = Rgb::new(0xff, 0xff, 0xff);
pub const DEFAULT_SELECTION_FOREGROUND: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// A parsed Ghostty theme.
///
/// Palette slots follow terminal convention: 0-7 are the standard ANSI
/// colors, 8-15 the bright variants. Slots absent from the source file are
/// simply missing from the map; lookups go through [`Theme::palette_or`]
/// which supplies the documented fallback.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Source file name; all generated artifacts are named after it.
    pub name: String,
    pub palette: HashMap<u8, Rgb>,
    pub background: Rgb,
    pub foreground: Rgb,
    pub cursor_color: Rgb,
    pub cursor_text: Rgb,
    pub selection_background: Rgb,
    pub selection_foreground: Rgb,
}

impl Theme {
    /// Classify dark vs. light from background luminance.
    ///
    /// This single boolean picks the lighten/darken direction for every
    /// color the derivation engine produces.
    pub fn is_dark(&self) -> bool {
        self.background.luminance() < 0.5
    }

    /// Palette slot lookup with a fixed fallback for missing slots.
    pub fn palette_or(&self, index: u8, fallback: Rgb) -> Rgb {
        self.palette.get(&index).copied().unwrap_or(fallback)
    }

    /// Human-readable name: underscores become spaces, words title-cased.
    /// `catppuccin_mocha` -> `Catppuccin Mocha`.
    pub fn display_name(&self) -> String {
        self.name
            .replace('_', " ")
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Deterministic plugin identifier: lowercased name with spaces and
    /// hyphens collapsed to underscores, under a fixed namespace.
    pub fn plugin_id(&self) -> String {
        let slug: String = self
            .name
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();
        format!("com.ghostty.theme.{slug}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_theme(name: &str) -> Theme {
        ThemeBuilder::new(name.to_string()).finish()
    }

    #[test]
    fn test_defaults_applied() {
        let theme = bare_theme("empty");
        assert_eq!(theme.background, DEFAULT_BACKGROUND);
        assert_eq!(theme.foreground, DEFAULT_FOREGROUND);
        assert_eq!(theme.cursor_color, DEFAULT_CURSOR_COLOR);
        assert_eq!(theme.cursor_text, DEFAULT_CURSOR_TEXT);
        assert_eq!(theme.selection_background, DEFAULT_SELECTION_BACKGROUND);
        assert_eq!(theme.selection_foreground, DEFAULT_SELECTION_FOREGROUND);
        assert!(theme.palette.is_empty());
    }

    #[test]
    fn test_default_theme_is_dark() {
        // Black default background classifies as dark
        assert!(bare_theme("empty").is_dark());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(bare_theme("catppuccin_mocha").display_name(), "Catppuccin Mocha");
        assert_eq!(bare_theme("nord").display_name(), "Nord");
    }

    #[test]
    fn test_plugin_id() {
        assert_eq!(
            bare_theme("Rose Pine-Dawn").plugin_id(),
            "com.ghostty.theme.rose_pine_dawn"
        );
    }

    #[test]
    fn test_palette_fallback() {
        let theme = bare_theme("empty");
        let fallback = Rgb::new(1, 2, 3);
        assert_eq!(theme.palette_or(4, fallback), fallback);
    }
}
