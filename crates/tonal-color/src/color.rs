// SPDX-License-Identifier: MIT
//
// tonal color primitives — 8-bit sRGB colors, hex text and luminance.
//
// Single-character variable names (r, g, b, h, s, l) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Every palette token ends up as a `#rrggbb` string, so the canonical color
// here is the quantized one: three 8-bit channels. Anything that produces a
// Color goes through `from_channels`, which clamps, rounds, and maps
// non-finite input to zero. There is no way to build an out-of-range Color.
//
// Conversion pipeline:
//
//   hex text ↔ Color (u8 × 3) ↔ normalized sRGB (f64) ↔ HSL
//                                        │
//                                        └→ linear sRGB → relative luminance

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::hsl::Hsl;

// ─── ParseError ──────────────────────────────────────────────────────────────

/// Why a string could not be read as a hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing left after trimming whitespace and the leading `#`.
    #[error("empty color string")]
    Empty,

    /// Not 3 or 6 hex digits.
    #[error("invalid hex length {0} (expected 3 or 6 digits)")]
    InvalidLength(usize),

    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {0:?}")]
    InvalidHex(char),
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8-bit channels.
///
/// # Examples
///
/// ```
/// use tonal_color::Color;
///
/// let blue = Color::from_hex("#3B82F6").unwrap();
/// assert_eq!(blue.to_hex(), "#3b82f6");
///
/// // Out-of-range and non-finite channels are clamped, never propagated.
/// let c = Color::from_channels(300.0, f64::NAN, -4.0);
/// assert_eq!(c, Color::rgb(255, 0, 0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Pure black. Also the resolution of every malformed color input.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from channel values on the 0–255 scale.
    ///
    /// Values are rounded and clamped into [0, 255]; NaN and ±∞ become 0.
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_to_u8(r),
            g: channel_to_u8(g),
            b: channel_to_u8(b),
        }
    }

    /// Create a color from normalized sRGB values (0.0–1.0).
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::from_channels(r * 255.0, g * 255.0, b * 255.0)
    }

    /// Parse `#RGB` or `#RRGGBB` (the `#` is optional, case-insensitive,
    /// surrounding whitespace ignored).
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first problem found.
    pub fn from_hex(s: &str) -> Result<Self, ParseError> {
        parse_hex(s)
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Channels as an array, in R, G, B order.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Normalized sRGB values (0.0–1.0).
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Canonical textual form: `#` followed by six lowercase hex digits.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL (hue in degrees, saturation and lightness in percent).
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = f64::midpoint(max, min);

        if max == min {
            // Achromatic — hue is undefined, default to 0
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h * 60.0, s * 100.0, l * 100.0)
    }

    /// Relative luminance per WCAG 2.1 / Rec. 709, in [0.0, 1.0].
    ///
    ///   Y = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let (r, g, b) = self.to_unit();
        let r_lin = srgb_to_linear(r);
        let g_lin = srgb_to_linear(g);
        let b_lin = srgb_to_linear(b);
        0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl.to_color()
    }
}

// ─── sRGB Transfer Function ──────────────────────────────────────────────────

/// Convert a single sRGB component (0.0–1.0) to linear light (remove gamma).
///
/// Piecewise: linear segment at or below 0.04045, 2.4 power law above.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Round and clamp a 0–255 channel value. Non-finite input maps to 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_u8(v: f64) -> u8 {
    if v.is_finite() {
        v.round().clamp(0.0, 255.0) as u8
    } else {
        0
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Result<Color, ParseError> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut digits = [0u8; 6];
    let count = s.chars().count();
    if count != 3 && count != 6 {
        return Err(ParseError::InvalidLength(count));
    }
    for (slot, ch) in digits.iter_mut().zip(s.chars()) {
        *slot = parse_hex_digit(ch).ok_or(ParseError::InvalidHex(ch))?;
    }

    Ok(if count == 3 {
        // #RGB — each digit doubles (f → ff)
        Color::rgb(digits[0] * 17, digits[1] * 17, digits[2] * 17)
    } else {
        Color::rgb(
            digits[0] << 4 | digits[1],
            digits[2] << 4 | digits[3],
            digits[4] << 4 | digits[5],
        )
    })
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn parse_hex_digit(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
