//! Ordinal levels and the lightness scale anchored at the seed.
//!
//! Levels are the 11 design-token stops 50, 100, 200 … 900, 950. They are
//! an enum, and a scale is a fixed `[f64; 11]` indexed by `Level::rank()`,
//! so a lookup can never miss. Raw numbers only appear at the boundary
//! (`Level::from_value`, config files, token names).

use std::fmt;
use std::ops::Index;

use crate::lightness::LightnessMethod;

/// Lightness of the lightest level (50).
pub const MAX_LIGHTNESS: f64 = 96.0;

/// Lightness of the darkest level (950).
pub const MIN_LIGHTNESS: f64 = 16.0;

/// Canonical CIE L* per level, 50 … 950.
const PERCEPTUAL_REFERENCE: [f64; Level::COUNT] =
    [96.0, 92.0, 83.0, 74.0, 65.0, 56.0, 47.0, 38.0, 29.0, 20.0, 16.0];

/// Ordinal units between neighbouring step positions.
const STEP_UNITS: f64 = 50.0;

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// One of the 11 scale stops. Lower values are lighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    L50,
    L100,
    L200,
    L300,
    L400,
    L500,
    L600,
    L700,
    L800,
    L900,
    L950,
}

impl Level {
    /// Number of levels.
    pub const COUNT: usize = 11;

    /// All levels, lightest first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::L50, Self::L100, Self::L200, Self::L300, Self::L400, Self::L500,
        Self::L600, Self::L700, Self::L800, Self::L900, Self::L950,
    ];

    pub const LIGHTEST: Self = Self::L50;
    pub const DARKEST: Self = Self::L950;

    /// The numeric token value (50, 100, … 950).
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::L50 => 50,
            Self::L100 => 100,
            Self::L200 => 200,
            Self::L300 => 300,
            Self::L400 => 400,
            Self::L500 => 500,
            Self::L600 => 600,
            Self::L700 => 700,
            Self::L800 => 800,
            Self::L900 => 900,
            Self::L950 => 950,
        }
    }

    /// Position in [`Level::ALL`], 0 (lightest) to 10 (darkest).
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Inverse of [`rank`](Self::rank).
    #[must_use]
    pub const fn from_rank(rank: usize) -> Option<Self> {
        if rank < Self::COUNT { Some(Self::ALL[rank]) } else { None }
    }

    /// Parse a numeric token value. Anything outside the 11 stops is `None`.
    #[must_use]
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.iter().find(|l| l.value() == value).copied()
    }

    /// Move `delta` ranks (negative = lighter), stopping at either end.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn offset(self, delta: isize) -> Self {
        let rank = (self.rank() as isize + delta).clamp(0, Self::COUNT as isize - 1);
        Self::ALL[rank as usize]
    }

    /// Neighbour one rank darker, if any.
    #[must_use]
    pub const fn darker(self) -> Option<Self> {
        Self::from_rank(self.rank() + 1)
    }

    /// Neighbour one rank lighter, if any.
    #[must_use]
    pub const fn lighter(self) -> Option<Self> {
        match self.rank() {
            0 => None,
            r => Self::from_rank(r - 1),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ---------------------------------------------------------------------------
// Reference lightness and closest level
// ---------------------------------------------------------------------------

/// Straight ramp by level number: 96 at 50, 16 at 950.
#[must_use]
pub fn linear_reference(level: Level) -> f64 {
    let t = (f64::from(level.value()) - 50.0) / 900.0;
    (MAX_LIGHTNESS - MIN_LIGHTNESS).mul_add(-t, MAX_LIGHTNESS)
}

/// The lightness a level "should" have under `method`.
#[must_use]
pub fn reference_lightness(level: Level, method: LightnessMethod) -> f64 {
    match method {
        LightnessMethod::Perceptual => PERCEPTUAL_REFERENCE[level.rank()],
        LightnessMethod::Hsl | LightnessMethod::Average => linear_reference(level),
        LightnessMethod::Hybrid => {
            0.3f64.mul_add(PERCEPTUAL_REFERENCE[level.rank()], 0.7 * linear_reference(level))
        }
    }
}

/// The level whose reference lightness is nearest `lightness`.
///
/// On an exact tie the lighter level wins. Non-finite input is treated as 50.
#[must_use]
pub fn find_closest_level(lightness: f64, method: LightnessMethod) -> Level {
    let lightness = if lightness.is_finite() { lightness } else { 50.0 };

    let mut best = Level::LIGHTEST;
    let mut best_dist = f64::INFINITY;
    for level in Level::ALL {
        let dist = (lightness - reference_lightness(level, method)).abs();
        // Strict `<` keeps the first level on ties.
        if dist < best_dist {
            best_dist = dist;
            best = level;
        }
    }
    best
}

// ---------------------------------------------------------------------------
// LightnessScale
// ---------------------------------------------------------------------------

/// Target lightness for every level. Never increases from 50 to 950.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightnessScale {
    values: [f64; Level::COUNT],
}

impl LightnessScale {
    /// Build a scale with `lightness` at `anchor`, spreading the remaining
    /// headroom evenly up to 96 and down to 16.
    ///
    /// `lightness` is clamped to [16, 96] first (non-finite → 50).
    #[must_use]
    pub fn even(lightness: f64, anchor: Level) -> Self {
        let value = if lightness.is_finite() {
            lightness.clamp(MIN_LIGHTNESS, MAX_LIGHTNESS)
        } else {
            50.0
        };

        let anchor_pos = f64::from(anchor.value());
        let steps_above = (anchor_pos - f64::from(Level::LIGHTEST.value())) / STEP_UNITS;
        let steps_below = (f64::from(Level::DARKEST.value()) - anchor_pos) / STEP_UNITS;
        let step_up = if steps_above > 0.0 { (MAX_LIGHTNESS - value) / steps_above } else { 0.0 };
        let step_down = if steps_below > 0.0 { (value - MIN_LIGHTNESS) / steps_below } else { 0.0 };

        let mut values = [value; Level::COUNT];
        for level in Level::ALL {
            let steps = (f64::from(level.value()) - anchor_pos).abs() / STEP_UNITS;
            values[level.rank()] = match level.cmp(&anchor) {
                std::cmp::Ordering::Equal => value,
                std::cmp::Ordering::Less => step_up.mul_add(steps, value),
                std::cmp::Ordering::Greater => step_down.mul_add(-steps, value),
            }
            .clamp(MIN_LIGHTNESS, MAX_LIGHTNESS);
        }

        Self { values }
    }

    /// Build a scale from explicit values, lightest first.
    ///
    /// Returns `None` unless the values are finite and non-increasing.
    #[must_use]
    pub fn from_values(values: [f64; Level::COUNT]) -> Option<Self> {
        let scale = Self { values };
        (values.iter().all(|v| v.is_finite()) && scale.is_monotonic()).then_some(scale)
    }

    /// Lightness at `level`.
    #[must_use]
    pub const fn get(&self, level: Level) -> f64 {
        self.values[level.rank()]
    }

    /// `(level, lightness)` pairs, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (Level, f64)> + '_ {
        Level::ALL.iter().map(|&level| (level, self.get(level)))
    }

    /// Largest value (the lightest level).
    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest value (the darkest level).
    #[must_use]
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// `max − min`.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max() - self.min()
    }

    /// Whether lightness never increases as the level increases.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.values.windows(2).all(|w| w[0] >= w[1])
    }
}

impl Index<Level> for LightnessScale {
    type Output = f64;

    fn index(&self, level: Level) -> &f64 {
        &self.values[level.rank()]
    }
}

/// [`LightnessScale::even`] with a raw anchor value; anything that is not
/// one of the 11 stops falls back to 500.
#[must_use]
pub fn calculate_even_scale(lightness: f64, anchor: u16) -> LightnessScale {
    LightnessScale::even(lightness, Level::from_value(anchor).unwrap_or(Level::L500))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
