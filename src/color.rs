// RGB color value type and the transforms the derivation engine is built on
//
// Everything here is plain arithmetic on 24-bit RGB values: hex parsing,
// HSV-based brightness/saturation adjustment, per-channel blending, and
// relative luminance for dark/light classification. All operations are
// total - no transform can fail given a valid Rgb.

use std::fmt;

/// A 24-bit RGB color. No alpha channel; Ghostty themes don't carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` or `rrggbb` hex string.
    ///
    /// Returns `None` for anything that isn't exactly six hex digits
    /// (after an optional leading `#`). Callers in the parser treat a
    /// `None` as an unparseable line and skip it.
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Lowercase `#rrggbb` form, the one used in `.theme.json` output.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Uppercase `#RRGGBB` form, used by the editor scheme `<colors>` section.
    pub fn to_hex_upper(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Uppercase `RRGGBB` without the hash, used by scheme attribute values.
    pub fn to_hex_bare_upper(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Relative luminance in `[0, 1]` from gamma-corrected sRGB channels.
    ///
    /// Channels are linearized with the standard sRGB piecewise transfer
    /// function, then weighted 0.2126 / 0.7152 / 0.0722.
    pub fn luminance(self) -> f64 {
        fn to_linear(c: f64) -> f64 {
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let r = to_linear(self.r as f64 / 255.0);
        let g = to_linear(self.g as f64 / 255.0);
        let b = to_linear(self.b as f64 / 255.0);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Shift brightness by `delta` (the HSV value channel, clamped to `[0, 1]`).
    /// Positive lightens, negative darkens.
    pub fn adjust_brightness(self, delta: f64) -> Self {
        let (h, s, v) = rgb_to_hsv(self);
        hsv_to_rgb(h, s, (v + delta).clamp(0.0, 1.0))
    }

    /// Shift saturation by `delta` (the HSV saturation channel, clamped to `[0, 1]`).
    #[allow(dead_code)] // Companion primitive to adjust_brightness; kept for palette tooling
    pub fn adjust_saturation(self, delta: f64) -> Self {
        let (h, s, v) = rgb_to_hsv(self);
        hsv_to_rgb(h, (s + delta).clamp(0.0, 1.0), v)
    }

    /// Per-channel linear interpolation towards `other`.
    /// `ratio` 0.0 is `self`, 1.0 is `other`; out-of-range ratios are clamped.
    pub fn blend(self, other: Rgb, ratio: f64) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| ((a as f64) * (1.0 - ratio) + (b as f64) * ratio).round() as u8;
        Self {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// RGB -> HSV with all channels normalized to `[0, 1]`.
fn rgb_to_hsv(c: Rgb) -> (f64, f64, f64) {
    let r = c.r as f64 / 255.0;
    let g = c.g as f64 / 255.0;
    let b = c.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        (((g - b) / delta).rem_euclid(6.0)) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    (h, s, max)
}

/// HSV -> RGB, rounding each channel back to u8.
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let to_byte = |x: f64| (x * 255.0).round() as u8;

    if s == 0.0 {
        let b = to_byte(v);
        return Rgb::new(b, b, b);
    }

    let h = h.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(to_byte(r), to_byte(g), to_byte(b))
}
