//! Hue drift across the scale — the "natural" shading model.
//!
//! Painters shift hue as they shade: highlights drift one way around the
//! wheel, shadows the other. The model here has two factors:
//!
//! - lightness intensity: how far the level sits from the anchor, as a
//!   fraction of the scale's range, signed (+ lighter, − darker)
//! - hue intensity: a sensitivity bump times a temperature term
//!   (`cos(h)`, positive on the warm half of the wheel, negative on the
//!   cool half)
//!
//! The shift is their product times [`MAX_HUE_SHIFT`]. `Unnatural` mode
//! negates it, `Fixed` turns it off.

use std::f64::consts::FRAC_PI_3;
use std::fmt;

use serde::{Deserialize, Serialize};
use tonal_color::normalize_hue;

use crate::scale::LightnessScale;

/// Largest hue rotation, in degrees, at full intensity.
pub const MAX_HUE_SHIFT: f64 = 30.0;

/// Below this magnitude a hue intensity counts as zero.
const SIGN_EPSILON: f64 = 1e-9;

// ---------------------------------------------------------------------------
// HueShiftMode
// ---------------------------------------------------------------------------

/// How hue behaves across the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HueShiftMode {
    /// Every level keeps the seed hue.
    Fixed,
    /// Hue drifts following the perceptual/thermal model.
    #[default]
    Natural,
    /// The natural drift, negated.
    Unnatural,
}

impl HueShiftMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Natural => "natural",
            Self::Unnatural => "unnatural",
        }
    }

    /// Parse a mode from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|m| m.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Fixed, Self::Natural, Self::Unnatural]
    }
}

impl fmt::Display for HueShiftMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for HueShiftMode {
    /// Unknown names fall back to the default (`natural`).
    fn from(name: String) -> Self {
        Self::from_name(&name).unwrap_or_else(|| {
            log::warn!(target: "tonal", "unknown hue shift mode {name:?}, using natural");
            Self::default()
        })
    }
}

impl From<HueShiftMode> for String {
    fn from(mode: HueShiftMode) -> Self {
        mode.name().to_string()
    }
}

// ---------------------------------------------------------------------------
// Intensity terms
// ---------------------------------------------------------------------------

/// Perceptual sensitivity bump, in [0.3, 0.8]: `0.3 + 0.5 · (1 + cos(h − π/3)) / 2`.
#[must_use]
pub fn hue_sensitivity(hue: f64) -> f64 {
    let r = normalize_hue(hue).to_radians();
    0.5f64.mul_add(f64::midpoint(1.0, (r - FRAC_PI_3).cos()), 0.3)
}

/// Temperature direction: `cos(h)`. Positive for warm hues, negative for cool.
#[must_use]
pub fn temperature_direction(hue: f64) -> f64 {
    normalize_hue(hue).to_radians().cos()
}

/// Signed hue-based intensity: sensitivity × temperature.
#[must_use]
pub fn hue_intensity(hue: f64) -> f64 {
    hue_sensitivity(hue) * temperature_direction(hue)
}

/// Signed distance from base to target as a fraction of the scale's range,
/// clamped to [−1, 1]. A flat scale or non-finite input gives 0.
#[must_use]
pub fn lightness_intensity(base_lightness: f64, target_lightness: f64, scale: &LightnessScale) -> f64 {
    let range = scale.range();
    let diff = target_lightness - base_lightness;
    if range <= 0.0 || !diff.is_finite() {
        return 0.0;
    }
    (diff / range).clamp(-1.0, 1.0)
}

/// Hue for a level whose target lightness is `target_lightness`, given the
/// anchor's hue and lightness.
///
/// `Fixed` returns `base_hue` exactly as given; the drifting modes return a
/// hue in [0, 360).
#[must_use]
pub fn calculate_hue_shift(
    base_hue: f64,
    base_lightness: f64,
    target_lightness: f64,
    scale: &LightnessScale,
    mode: HueShiftMode,
) -> f64 {
    if mode == HueShiftMode::Fixed {
        return base_hue;
    }
    let base_hue = normalize_hue(base_hue);

    let raw = hue_intensity(base_hue)
        * lightness_intensity(base_lightness, target_lightness, scale)
        * MAX_HUE_SHIFT;
    let shift = match mode {
        HueShiftMode::Unnatural => -raw,
        HueShiftMode::Natural | HueShiftMode::Fixed => raw,
    };

    normalize_hue(base_hue + shift)
}

// ---------------------------------------------------------------------------
// Explanation
// ---------------------------------------------------------------------------

/// Coarse hue bucket used to describe drift in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HueFamily {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
}

impl HueFamily {
    /// Bucket a hue: red < 30 or ≥ 330, then 30/60/90/150/210/270 boundaries.
    #[must_use]
    pub fn of(hue: f64) -> Self {
        let h = normalize_hue(hue);
        if !(30.0..330.0).contains(&h) {
            Self::Red
        } else if h < 60.0 {
            Self::Orange
        } else if h < 90.0 {
            Self::Yellow
        } else if h < 150.0 {
            Self::Green
        } else if h < 210.0 {
            Self::Cyan
        } else if h < 270.0 {
            Self::Blue
        } else {
            Self::Purple
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }

    /// Where natural drift takes (lighter, darker) shades of this family.
    const fn tendencies(self) -> (&'static str, &'static str) {
        match self {
            Self::Red => ("orange", "magenta"),
            Self::Orange => ("yellow", "red"),
            Self::Yellow => ("green", "orange"),
            Self::Green => ("yellow", "cyan"),
            Self::Cyan => ("green", "blue"),
            Self::Blue => ("cyan", "purple"),
            Self::Purple => ("magenta", "blue"),
        }
    }
}

impl fmt::Display for HueFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a hue rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftSign {
    /// Hue angle increases.
    Positive,
    /// Hue angle decreases.
    Negative,
    /// No rotation.
    Zero,
}

impl ShiftSign {
    fn of(value: f64) -> Self {
        if value > SIGN_EPSILON {
            Self::Positive
        } else if value < -SIGN_EPSILON {
            Self::Negative
        } else {
            Self::Zero
        }
    }

    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Positive => '+',
            Self::Negative => '-',
            Self::Zero => '0',
        }
    }
}

/// Where one side of the scale drifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tendency {
    /// Human-readable destination, or `"no change"`.
    pub toward: &'static str,
    pub sign: ShiftSign,
}

/// Human-readable account of how hue will drift for a seed hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueShiftExplanation {
    pub family: HueFamily,
    pub mode: HueShiftMode,
    pub lighter: Tendency,
    pub darker: Tendency,
}

/// Describe the drift for `base_hue` under `mode`.
#[must_use]
pub fn hue_shift_explanation(base_hue: f64, mode: HueShiftMode) -> HueShiftExplanation {
    let family = HueFamily::of(base_hue);
    let (lighter_text, darker_text) = family.tendencies();
    let sign = ShiftSign::of(hue_intensity(base_hue));

    let natural_lighter = Tendency { toward: lighter_text, sign };
    let natural_darker = Tendency { toward: darker_text, sign: sign.negate() };
    let unchanged = Tendency { toward: "no change", sign: ShiftSign::Zero };

    let (lighter, darker) = match mode {
        HueShiftMode::Fixed => (unchanged, unchanged),
        HueShiftMode::Natural => (natural_lighter, natural_darker),
        HueShiftMode::Unnatural => (
            Tendency { toward: darker_text, sign: natural_lighter.sign.negate() },
            Tendency { toward: lighter_text, sign: natural_darker.sign.negate() },
        ),
    };

    HueShiftExplanation { family, mode, lighter, darker }
}

impl fmt::Display for HueShiftExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode == HueShiftMode::Fixed {
            return write!(f, "{} seed, fixed hue: no change across the scale", self.family);
        }
        write!(
            f,
            "{} seed, {} drift: lighter shades tend toward {} ({}), darker shades tend toward {} ({})",
            self.family,
            self.mode,
            self.lighter.toward,
            self.lighter.sign.symbol(),
            self.darker.toward,
            self.darker.sign.symbol(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
