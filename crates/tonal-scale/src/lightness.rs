//! Lightness measurement and inversion under four competing definitions.
//!
//! Every palette level is produced by asking "which color with this hue and
//! saturation has lightness L?" — so each method needs both directions:
//!
//! - `measure`: Color → lightness in [0, 100]
//! - `invert`:  (hue, saturation, lightness) → Color
//!
//! HSL lightness inverts by substitution. The other three have no usable
//! closed form (CIE L* goes through gamma and a cube root), so inversion is a
//! bisection over the HSL lightness parameter. That works because, for a
//! fixed hue and saturation, every channel is non-decreasing in HSL
//! lightness, and so is every method's measurement.

use std::fmt;

use serde::{Deserialize, Serialize};
use tonal_color::{Color, Hsl, normalize_hue};

/// Bisection iteration cap for non-HSL inversion.
pub const MAX_ITERATIONS: u32 = 100;

/// Convergence threshold for both the residual error and the interval width.
pub const TOLERANCE: f64 = 0.001;

/// CIE L* threshold on relative luminance (≈ (6/29)³).
const LAB_EPSILON: f64 = 0.008_856;

/// CIE L* slope of the linear segment below `LAB_EPSILON`.
const LAB_KAPPA: f64 = 903.3;

/// Weight of perceptual lightness in the hybrid blend (HSL gets the rest).
const HYBRID_PERCEPTUAL_WEIGHT: f64 = 0.3;

// ---------------------------------------------------------------------------
// LightnessMethod
// ---------------------------------------------------------------------------

/// Which scalar definition of lightness to measure and invert with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LightnessMethod {
    /// HSL lightness: midpoint of the largest and smallest channel.
    Hsl,
    /// CIE L* from Rec. 709 relative luminance.
    Perceptual,
    /// Mean of the three channels.
    Average,
    /// 30% perceptual + 70% HSL. Tracks perception better than HSL while
    /// keeping steps even across hues.
    #[default]
    Hybrid,
}

impl LightnessMethod {
    /// Lowercase name used in config files and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hsl => "hsl",
            Self::Perceptual => "perceptual",
            Self::Average => "average",
            Self::Hybrid => "hybrid",
        }
    }

    /// Parse a method from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|m| m.name() == lower).copied()
    }

    /// All methods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Hsl, Self::Perceptual, Self::Average, Self::Hybrid]
    }

    /// Measure `color`'s lightness under this method, in [0, 100].
    #[must_use]
    pub fn measure(self, color: Color) -> f64 {
        match self {
            Self::Hsl => hsl_lightness(color),
            Self::Perceptual => perceptual_lightness(color),
            Self::Average => average_lightness(color),
            Self::Hybrid => hybrid_lightness(color),
        }
    }

    /// Find the color with the given hue and saturation whose lightness under
    /// this method is as close as possible to `target`.
    #[must_use]
    pub fn invert(self, hue: f64, saturation: f64, target: f64) -> Color {
        self.invert_detailed(hue, saturation, target).color
    }

    /// [`invert`](Self::invert), also reporting how the search went.
    #[must_use]
    pub fn invert_detailed(self, hue: f64, saturation: f64, target: f64) -> Inversion {
        let hue = normalize_hue(hue);
        let saturation = if saturation.is_finite() { saturation.clamp(0.0, 100.0) } else { 0.0 };
        let target = if target.is_finite() { target.clamp(0.0, 100.0) } else { 50.0 };

        match self {
            Self::Hsl => {
                let color = Hsl::new(hue, saturation, target).to_color();
                Inversion {
                    color,
                    hsl_lightness: target,
                    error: (hsl_lightness(color) - target).abs(),
                    iterations: 0,
                }
            }
            Self::Perceptual | Self::Average | Self::Hybrid => {
                self.bisect(hue, saturation, target)
            }
        }
    }

    /// Binary search on HSL lightness, keeping the best midpoint seen.
    ///
    /// The best candidate is returned rather than the last midpoint: near
    /// 0 and 100 the 8-bit quantization makes the measurement flat, and the
    /// final midpoints can wander away from the closest one found.
    fn bisect(self, hue: f64, saturation: f64, target: f64) -> Inversion {
        let mut lo: f64 = 0.0;
        let mut hi: f64 = 100.0;
        let mut best_l = 50.0;
        let mut best_error = f64::INFINITY;
        let mut iterations = 0;

        for _ in 0..MAX_ITERATIONS {
            iterations += 1;
            let mid = f64::midpoint(lo, hi);
            let measured = self.measure(Hsl::new(hue, saturation, mid).to_color());
            let diff = measured - target;

            if diff.abs() < best_error {
                best_error = diff.abs();
                best_l = mid;
            }
            if best_error < TOLERANCE || hi - lo < TOLERANCE {
                break;
            }

            // Too light → search the darker half.
            if diff > 0.0 {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        Inversion {
            color: Hsl::new(hue, saturation, best_l).to_color(),
            hsl_lightness: best_l,
            error: best_error,
            iterations,
        }
    }
}

impl fmt::Display for LightnessMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for LightnessMethod {
    /// Unknown names fall back to the default (`hybrid`).
    fn from(name: String) -> Self {
        Self::from_name(&name).unwrap_or_else(|| {
            log::warn!(target: "tonal", "unknown lightness method {name:?}, using hybrid");
            Self::default()
        })
    }
}

impl From<LightnessMethod> for String {
    fn from(method: LightnessMethod) -> Self {
        method.name().to_string()
    }
}

/// Outcome of one inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inversion {
    /// The chosen color.
    pub color: Color,
    /// HSL lightness parameter the color was built from.
    pub hsl_lightness: f64,
    /// |measured − target| for the chosen color, before 8-bit quantization
    /// for the bisecting methods.
    pub error: f64,
    /// Bisection steps taken (0 for the direct HSL path).
    pub iterations: u32,
}

// ---------------------------------------------------------------------------
// Measurement functions
// ---------------------------------------------------------------------------

/// HSL lightness: (max + min) / 2, scaled to 0–100.
#[must_use]
pub fn hsl_lightness(color: Color) -> f64 {
    let [r, g, b] = color.channels();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    f64::midpoint(f64::from(max), f64::from(min)) / 255.0 * 100.0
}

/// Mean of the three channels, scaled to 0–100.
#[must_use]
pub fn average_lightness(color: Color) -> f64 {
    let [r, g, b] = color.channels();
    (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0 / 255.0 * 100.0
}

/// CIE L* of the color's relative luminance, in [0, 100].
///
/// Cube-root branch above `LAB_EPSILON`, linear branch (κ = 903.3) below.
#[must_use]
pub fn perceptual_lightness(color: Color) -> f64 {
    let y = color.relative_luminance();
    let l = if y > LAB_EPSILON {
        116.0f64.mul_add(y.cbrt(), -16.0)
    } else {
        LAB_KAPPA * y
    };
    if l.is_finite() { l.clamp(0.0, 100.0) } else { 0.0 }
}

/// 0.3 × perceptual + 0.7 × HSL.
#[must_use]
pub fn hybrid_lightness(color: Color) -> f64 {
    HYBRID_PERCEPTUAL_WEIGHT.mul_add(
        perceptual_lightness(color),
        (1.0 - HYBRID_PERCEPTUAL_WEIGHT) * hsl_lightness(color),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
