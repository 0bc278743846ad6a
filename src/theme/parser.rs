// Ghostty theme file parser
//
// Ghostty config files are line-oriented `key = value` text with `#`
// comments. Palette entries nest one more `=`: `palette = 4=#0078d4`.
//
// Parsing is lossy-tolerant by contract: each line classifies into an
// explicit Directive, unrecognized or malformed lines become
// Directive::Ignored, and nothing about file *content* can fail the parse.
// Only reading the file itself can error.

use super::{
    Theme, DEFAULT_BACKGROUND, DEFAULT_CURSOR_COLOR, DEFAULT_CURSOR_TEXT, DEFAULT_FOREGROUND,
    DEFAULT_SELECTION_BACKGROUND, DEFAULT_SELECTION_FOREGROUND,
};
use crate::color::Rgb;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// One classified line of a theme file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Palette(u8, Rgb),
    Background(Rgb),
    Foreground(Rgb),
    CursorColor(Rgb),
    CursorText(Rgb),
    SelectionBackground(Rgb),
    SelectionForeground(Rgb),
    /// Comments, blank lines, unknown keys, malformed values.
    Ignored,
}

impl Directive {
    /// Classify a single line. Total: every input maps to some directive.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Self::Ignored;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Self::Ignored;
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "palette" => {
                // palette = <index>=<hex>; anything else about the value
                // (missing inner '=', non-numeric index, bad hex) skips it
                let Some((index, color)) = value.split_once('=') else {
                    return Self::Ignored;
                };
                let Ok(index) = index.trim().parse::<u8>() else {
                    return Self::Ignored;
                };
                match Rgb::from_hex(color) {
                    Some(color) => Self::Palette(index, color),
                    None => Self::Ignored,
                }
            }
            "background" => Self::color(value, Self::Background),
            "foreground" => Self::color(value, Self::Foreground),
            "cursor-color" => Self::color(value, Self::CursorColor),
            "cursor-text" => Self::color(value, Self::CursorText),
            "selection-background" => Self::color(value, Self::SelectionBackground),
            "selection-foreground" => Self::color(value, Self::SelectionForeground),
            // Unknown keys never cause failure (forward compatibility)
            _ => Self::Ignored,
        }
    }

    fn color(value: &str, wrap: fn(Rgb) -> Self) -> Self {
        match Rgb::from_hex(value) {
            Some(color) => wrap(color),
            None => Self::Ignored,
        }
    }
}

/// Accumulates directives into one mutable record, finalized once.
///
/// Fields left unset by the source file take the documented defaults
/// at `finish()` time.
#[derive(Debug, Default)]
pub struct ThemeBuilder {
    name: String,
    palette: HashMap<u8, Rgb>,
    background: Option<Rgb>,
    foreground: Option<Rgb>,
    cursor_color: Option<Rgb>,
    cursor_text: Option<Rgb>,
    selection_background: Option<Rgb>,
    selection_foreground: Option<Rgb>,
}

impl ThemeBuilder {
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, directive: Directive) {
        match directive {
            Directive::Palette(index, color) => {
                self.palette.insert(index, color);
            }
            Directive::Background(c) => self.background = Some(c),
            Directive::Foreground(c) => self.foreground = Some(c),
            Directive::CursorColor(c) => self.cursor_color = Some(c),
            Directive::CursorText(c) => self.cursor_text = Some(c),
            Directive::SelectionBackground(c) => self.selection_background = Some(c),
            Directive::SelectionForeground(c) => self.selection_foreground = Some(c),
            Directive::Ignored => {}
        }
    }

    pub fn finish(self) -> Theme {
        Theme {
            name: self.name,
            palette: self.palette,
            background: self.background.unwrap_or(DEFAULT_BACKGROUND),
            foreground: self.foreground.unwrap_or(DEFAULT_FOREGROUND),
            cursor_color: self.cursor_color.unwrap_or(DEFAULT_CURSOR_COLOR),
            cursor_text: self.cursor_text.unwrap_or(DEFAULT_CURSOR_TEXT),
            selection_background: self
                .selection_background
                .unwrap_or(DEFAULT_SELECTION_BACKGROUND),
            selection_foreground: self
                .selection_foreground
                .unwrap_or(DEFAULT_SELECTION_FOREGROUND),
        }
    }
}

/// Parse theme content that is already in memory.
pub fn parse_theme_str(name: &str, contents: &str) -> Theme {
    let mut builder = ThemeBuilder::new(name.to_string());
    for line in contents.lines() {
        builder.apply(Directive::parse(line));
    }
    builder.finish()
}

/// Parse a Ghostty theme file.
///
/// The theme is named after the file. Invalid UTF-8 is replaced rather
/// than rejected, so the only error path is failing to read the file.
pub fn parse_theme_file(path: &Path) -> Result<Theme> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read theme file {}", path.display()))?;
    let contents = String::from_utf8_lossy(&bytes);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "theme".to_string());

    Ok(parse_theme_str(&name, &contents))
}
