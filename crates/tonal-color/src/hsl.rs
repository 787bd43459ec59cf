// SPDX-License-Identifier: MIT
//
// HSL — the cylindrical form palettes are built in.
//
// Hue is circular and always stored normalized to [0, 360). Saturation and
// lightness are percentages clamped to [0, 100]. `Hsl::new` is the only
// constructor that matters: it sanitizes, so every Hsl value in the program
// is in range.
#![allow(clippy::many_single_char_names)]

use crate::color::Color;

/// A color in HSL: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, [0, 360).
    pub h: f64,
    /// Saturation, [0, 100].
    pub s: f64,
    /// Lightness, [0, 100].
    pub l: f64,
}

impl Hsl {
    /// Create a sanitized HSL value.
    ///
    /// Hue wraps (negatives included); saturation and lightness clamp.
    /// Any non-finite component becomes 0.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    /// Convert to an 8-bit sRGB color.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_color(self) -> Color {
        let Self { h, s, l } = Self::new(self.h, self.s, self.l);
        let s = s / 100.0;
        let l = l / 100.0;

        let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
        let hp = h / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match hp.floor() as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Color::from_unit(r + m, g + m, b + m)
    }

    /// Same saturation and lightness, hue rotated by `degrees`.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        color.to_hsl()
    }
}

/// Normalize a hue angle to the range [0, 360).
///
/// Non-finite input maps to 0.
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // -1e-20 + 360.0 rounds to exactly 360.0
    if h >= 360.0 { 0.0 } else { h }
}

/// Signed shortest-arc difference `to − from`, in (−180, 180].
#[inline]
#[must_use]
pub fn hue_delta(from: f64, to: f64) -> f64 {
    let d = normalize_hue(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Clamp a percentage to [0, 100]. Non-finite input maps to 0.
#[inline]
const fn clamp_percent(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 100.0) } else { 0.0 }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
