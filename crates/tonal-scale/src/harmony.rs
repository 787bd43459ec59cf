//! Color harmonies: companion seeds at fixed hue angles from the main seed.
//!
//! Each combination rotates the seed's HSL hue by a fixed set of offsets,
//! keeping saturation and lightness. A companion seed gets its own full
//! palette under the prefix `{prefix}-{combination}-{n}`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tonal_color::{Color, Hsl};

use crate::config::PaletteConfig;

// ---------------------------------------------------------------------------
// Combination
// ---------------------------------------------------------------------------

/// Which companion hues to derive alongside the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Combination {
    /// The seed alone.
    #[default]
    Monochromatic,
    /// Opposite hue (+180).
    Complementary,
    /// Neighbours at -30 and +30.
    Analogous,
    /// Both sides of the complement (+150, +210).
    SplitComplementary,
    /// 120-degree spacing.
    Triadic,
    /// 90-degree spacing.
    Tetradic,
}

impl Combination {
    /// Lowercase name used in config files and token prefixes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
        }
    }

    /// Parse a combination from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|c| c.name() == lower).copied()
    }

    /// All combinations.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochromatic,
            Self::Complementary,
            Self::Analogous,
            Self::SplitComplementary,
            Self::Triadic,
            Self::Tetradic,
        ]
    }

    /// Hue offsets in degrees of the companions, excluding the seed itself.
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Monochromatic => &[],
            Self::Complementary => &[180.0],
            Self::Analogous => &[-30.0, 30.0],
            Self::SplitComplementary => &[150.0, 210.0],
            Self::Triadic => &[120.0, 240.0],
            Self::Tetradic => &[90.0, 180.0, 270.0],
        }
    }

    /// Companion seed colors for `seed`, in offset order.
    #[must_use]
    pub fn companions(self, seed: Color) -> Vec<Color> {
        let hsl = seed.to_hsl();
        self.offsets().iter().map(|&offset| hsl.rotate(offset).to_color()).collect()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Combination {
    /// Unknown names fall back to `monochromatic`.
    fn from(name: String) -> Self {
        Self::from_name(&name).unwrap_or_else(|| {
            log::warn!(target: "tonal", "unknown combination {name:?}, using monochromatic");
            Self::default()
        })
    }
}

impl From<Combination> for String {
    fn from(combination: Combination) -> Self {
        combination.name().to_string()
    }
}

// ---------------------------------------------------------------------------
// Companion configs
// ---------------------------------------------------------------------------

/// One config per companion hue, inheriting everything but the prefix, the
/// seed and the combination (companions have none of their own).
///
/// Returns nothing when the seed does not parse; the main palette reports
/// that on its own.
#[must_use]
pub fn companion_configs(config: &PaletteConfig) -> Vec<PaletteConfig> {
    let Ok(seed) = Color::from_hex(&config.seed) else {
        return Vec::new();
    };
    let combination = config.combination;

    combination
        .companions(seed)
        .into_iter()
        .enumerate()
        .map(|(i, color)| PaletteConfig {
            prefix: format!("{}-{}-{}", config.prefix, combination.name(), i + 1),
            seed: color.to_hex(),
            combination: Combination::Monochromatic,
            ..config.clone()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Random seeds
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG. No external `rand` crate needed.
struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    const fn next(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Random f64 in [lo, hi].
    fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        let t = f64::from(self.next()) / f64::from(u32::MAX);
        (hi - lo).mul_add(t, lo)
    }
}

/// A usable seed color picked deterministically from `seed`: any hue, fairly
/// saturated, mid lightness.
#[must_use]
pub fn random_seed_color(seed: u32) -> Color {
    let mut rng = Xorshift32::new(seed);
    let hue = rng.range_f64(0.0, 360.0);
    let saturation = rng.range_f64(55.0, 90.0);
    let lightness = rng.range_f64(40.0, 60.0);
    Hsl::new(hue, saturation, lightness).to_color()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
