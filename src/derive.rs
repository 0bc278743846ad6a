// Color derivation engine
//
// Pure function of a parsed Theme: computes every additional color the
// emitted IDE theme needs. The single branching decision is the theme's
// dark/light classification, which flips the lighten/darken direction of
// each brightness adjustment.
//
// All deltas and fallback colors are policy constants hoisted into the
// tables below. They are compatibility values, not tunables.

use crate::color::Rgb;
use crate::theme::Theme;

// ─────────────────────────────────────────────────────────────────────────────
// Policy tables
// ─────────────────────────────────────────────────────────────────────────────

/// A brightness delta pair: one direction for dark themes, one for light.
#[derive(Debug, Clone, Copy)]
pub struct Shade {
    pub dark: f64,
    pub light: f64,
}

impl Shade {
    const fn new(dark: f64, light: f64) -> Self {
        Self { dark, light }
    }

    /// Apply to a color given the theme classification.
    pub fn apply(self, color: Rgb, is_dark: bool) -> Rgb {
        color.adjust_brightness(if is_dark { self.dark } else { self.light })
    }
}

pub const PANEL_BACKGROUND: Shade = Shade::new(0.10, -0.05);
pub const BORDER: Shade = Shade::new(0.20, -0.15);
pub const HOVER_BACKGROUND: Shade = Shade::new(0.15, -0.10);
pub const PRESSED_BACKGROUND: Shade = Shade::new(-0.10, -0.20);
pub const DISABLED_FOREGROUND: Shade = Shade::new(-0.40, 0.40);
pub const SCROLLBAR_THUMB: Shade = Shade::new(0.30, -0.30);
pub const INACTIVE_BACKGROUND: Shade = Shade::new(0.05, -0.03);
pub const HIGHLIGHT_BACKGROUND: Shade = Shade::new(0.30, -0.10);
pub const SELECTION_INACTIVE: Shade = Shade::new(-0.20, 0.20);

/// Accent blend ratio for notification backgrounds.
pub const NOTIFICATION_BLEND: f64 = 0.1;
/// Tint ratio for file-scope background colors in the editor tab strip.
pub const FILE_COLOR_BLEND: f64 = 0.05;

// Accent fallbacks, used when the source palette misses the slot.
pub const FALLBACK_ACCENT: Rgb = Rgb::new(0x00, 0x78, 0xd4); // palette 4, blue
pub const FALLBACK_ERROR: Rgb = Rgb::new(0xff, 0x00, 0x00); // palette 1, red
pub const FALLBACK_WARNING: Rgb = Rgb::new(0xff, 0xaa, 0x00); // palette 3, yellow
pub const FALLBACK_SUCCESS: Rgb = Rgb::new(0x00, 0xaa, 0x00); // palette 2, green

// Syntax role fallbacks (slot, color) pairs.
pub const FALLBACK_KEYWORD: Rgb = Rgb::new(0xff, 0x00, 0xff); // palette 5, magenta
pub const FALLBACK_STRING: Rgb = Rgb::new(0x00, 0xff, 0x00); // palette 2, green
pub const FALLBACK_NUMBER: Rgb = Rgb::new(0xff, 0x00, 0x00); // palette 1, red
pub const FALLBACK_COMMENT: Rgb = Rgb::new(0x55, 0x55, 0x55); // palette 8, bright black
pub const FALLBACK_FUNCTION: Rgb = Rgb::new(0x00, 0x00, 0xff); // palette 4, blue
pub const FALLBACK_CLASS: Rgb = Rgb::new(0xff, 0xff, 0x00); // palette 3, yellow
pub const FALLBACK_CONSTANT: Rgb = Rgb::new(0x00, 0xff, 0xff); // palette 6, cyan

/// Directional brightness shift: lightens on dark themes, darkens on light
/// (or the reverse for a negative delta). Used for the one-off sub-shades
/// in the UI descriptor that don't warrant a named table entry.
pub fn directional(color: Rgb, delta: f64, is_dark: bool) -> Rgb {
    color.adjust_brightness(if is_dark { delta } else { -delta })
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived color set
// ─────────────────────────────────────────────────────────────────────────────

/// Syntax-highlight role colors for the editor scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxColors {
    pub keyword: Rgb,
    pub string: Rgb,
    pub number: Rgb,
    pub comment: Rgb,
    pub identifier: Rgb,
    pub function: Rgb,
    pub class_name: Rgb,
    pub constant: Rgb,
}

/// Everything computed from a Theme that the emitter needs.
///
/// Ephemeral: built per conversion, never persisted on its own.
#[derive(Debug, Clone)]
pub struct DerivedColors {
    pub is_dark: bool,

    // Structural UI shades
    pub panel_background: Rgb,
    pub border: Rgb,
    pub hover_background: Rgb,
    pub pressed_background: Rgb,
    pub disabled_foreground: Rgb,
    pub scrollbar_thumb: Rgb,
    pub inactive_background: Rgb,
    pub highlight_background: Rgb,
    pub selection_inactive: Rgb,

    // Accent family
    pub accent: Rgb,
    pub accent_secondary: Rgb,
    pub accent_tertiary: Rgb,
    pub error: Rgb,
    pub warning: Rgb,
    pub success: Rgb,

    // Background-tinted notification variants
    pub notification_error_background: Rgb,
    pub notification_warning_background: Rgb,
    pub notification_info_background: Rgb,

    pub syntax: SyntaxColors,
}

/// Derive the full color set from a parsed theme.
///
/// Deterministic and side-effect free: identical themes always produce
/// identical output.
pub fn derive(theme: &Theme) -> DerivedColors {
    let is_dark = theme.is_dark();
    let bg = theme.background;
    let fg = theme.foreground;

    let accent = theme.palette_or(4, FALLBACK_ACCENT);
    let error = theme.palette_or(1, FALLBACK_ERROR);
    let warning = theme.palette_or(3, FALLBACK_WARNING);
    let success = theme.palette_or(2, FALLBACK_SUCCESS);

    DerivedColors {
        is_dark,

        panel_background: PANEL_BACKGROUND.apply(bg, is_dark),
        border: BORDER.apply(bg, is_dark),
        hover_background: HOVER_BACKGROUND.apply(bg, is_dark),
        pressed_background: PRESSED_BACKGROUND.apply(bg, is_dark),
        disabled_foreground: DISABLED_FOREGROUND.apply(fg, is_dark),
        scrollbar_thumb: SCROLLBAR_THUMB.apply(bg, is_dark),
        inactive_background: INACTIVE_BACKGROUND.apply(bg, is_dark),
        highlight_background: HIGHLIGHT_BACKGROUND.apply(bg, is_dark),
        selection_inactive: SELECTION_INACTIVE.apply(theme.selection_background, is_dark),

        accent,
        accent_secondary: directional(accent, -0.1, is_dark),
        accent_tertiary: directional(accent, -0.2, is_dark),
        error,
        warning,
        success,

        notification_error_background: bg.blend(error, NOTIFICATION_BLEND),
        notification_warning_background: bg.blend(warning, NOTIFICATION_BLEND),
        notification_info_background: bg.blend(accent, NOTIFICATION_BLEND),

        syntax: SyntaxColors {
            keyword: theme.palette_or(5, FALLBACK_KEYWORD),
            string: theme.palette_or(2, FALLBACK_STRING),
            number: theme.palette_or(1, FALLBACK_NUMBER),
            comment: theme.palette_or(8, FALLBACK_COMMENT),
            identifier: fg,
            function: theme.palette_or(4, FALLBACK_FUNCTION),
            class_name: theme.palette_or(3, FALLBACK_CLASS),
            constant: theme.palette_or(6, FALLBACK_CONSTANT),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{parse_theme_str, ThemeBuilder};

    #[test]
    fn test_dark_classification_and_error_notification() {
        let theme = parse_theme_str(
            "vs_dark",
            "background = #1e1e1e\nforeground = #d4d4d4\npalette = 1=#ff5555\n",
        );
        assert!(theme.background.luminance() < 0.5);

        let derived = derive(&theme);
        assert!(derived.is_dark);

        let bg = Rgb::from_hex("#1e1e1e").unwrap();
        let red = Rgb::from_hex("#ff5555").unwrap();
        assert_eq!(derived.notification_error_background, bg.blend(red, 0.1));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let theme = parse_theme_str("t", "background = #282828\npalette = 4=#83a598\n");
        let a = derive(&theme);
        let b = derive(&theme);
        assert_eq!(a.panel_background, b.panel_background);
        assert_eq!(a.syntax, b.syntax);
        assert_eq!(a.accent_tertiary, b.accent_tertiary);
    }

    #[test]
    fn test_dark_theme_lightens_panel() {
        let theme = parse_theme_str("dark", "background = #101010\n");
        let derived = derive(&theme);
        assert!(derived.panel_background.luminance() > theme.background.luminance());
        // Pressed state goes the other way even on dark themes
        assert!(derived.pressed_background.luminance() <= theme.background.luminance());
    }

    #[test]
    fn test_light_theme_darkens_panel() {
        let theme = parse_theme_str("light", "background = #fafafa\nforeground = #333333\n");
        let derived = derive(&theme);
        assert!(!derived.is_dark);
        assert!(derived.panel_background.luminance() < theme.background.luminance());
    }

    #[test]
    fn test_empty_palette_uses_fallbacks() {
        let theme = ThemeBuilder::new("bare".to_string()).finish();
        let derived = derive(&theme);

        assert_eq!(derived.syntax.keyword, FALLBACK_KEYWORD);
        assert_eq!(derived.syntax.string, FALLBACK_STRING);
        assert_eq!(derived.syntax.number, FALLBACK_NUMBER);
        assert_eq!(derived.syntax.comment, FALLBACK_COMMENT);
        assert_eq!(derived.syntax.function, FALLBACK_FUNCTION);
        assert_eq!(derived.syntax.class_name, FALLBACK_CLASS);
        assert_eq!(derived.syntax.constant, FALLBACK_CONSTANT);
        assert_eq!(derived.accent, FALLBACK_ACCENT);
        assert_eq!(derived.error, FALLBACK_ERROR);
        assert_eq!(derived.warning, FALLBACK_WARNING);
        assert_eq!(derived.success, FALLBACK_SUCCESS);
    }

    #[test]
    fn test_identifier_tracks_foreground() {
        let theme = parse_theme_str("fg", "foreground = #abcdef\n");
        assert_eq!(derive(&theme).syntax.identifier, Rgb::from_hex("#abcdef").unwrap());
    }
}
