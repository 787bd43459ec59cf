//! Faux transparency — inverting "source over" compositing.
//!
//! A transparent token is a (foreground, alpha) pair chosen so that, drawn
//! over a known background, it lands on the solid color of its level:
//!
//!   target = α·fg + (1 − α)·bg   ⇒   fg = (target − (1 − α)·bg) / α
//!
//! Alpha itself comes from the level's distance to the transparency anchor:
//! fully opaque at the anchor, fading linearly to `min_alpha` at both ends.
//! Lighter levels are inverted against the light background, darker ones
//! against the dark background.

use std::fmt;

use tonal_color::Color;

use crate::config::TransparencyConfig;
use crate::diagnostics::DiagnosticSink;
use crate::scale::Level;

/// Default alpha at the ends of the scale.
pub const DEFAULT_MIN_ALPHA: f64 = 0.1;

/// Default alpha at the transparency anchor.
pub const DEFAULT_MAX_ALPHA: f64 = 1.0;

/// Returned when either color cannot be parsed.
pub const FALLBACK_RGBA: &str = "rgba(0, 0, 0, 1.000)";

// ---------------------------------------------------------------------------
// Rgba
// ---------------------------------------------------------------------------

/// A foreground color with alpha, formatted as CSS `rgba(r, g, b, a.aaa)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub color: Color,
    pub alpha: f64,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Color { r, g, b } = self.color;
        write!(f, "rgba({r}, {g}, {b}, {:.3})", self.alpha)
    }
}

// ---------------------------------------------------------------------------
// Alpha per level
// ---------------------------------------------------------------------------

/// Alpha for `level` when `anchor` is fully opaque.
///
/// Lighter levels ramp from `min_alpha` (level 50) up to `max_alpha`;
/// darker levels ramp back down to `min_alpha` (level 950). Each side has
/// its own step size. Inputs are clamped to [0, 1] and ordered.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn alpha_for_level(level: Level, anchor: Level, min_alpha: f64, max_alpha: f64) -> f64 {
    let (min_alpha, max_alpha) = sanitize_range(min_alpha, max_alpha);
    if level == anchor {
        return max_alpha;
    }

    let span = max_alpha - min_alpha;
    let rank = level.rank() as f64;
    let anchor_rank = anchor.rank() as f64;

    let alpha = if level < anchor {
        // Steps from the lightest level (rank 0) to the anchor.
        let steps = anchor_rank;
        if steps > 0.0 { (span / steps).mul_add(rank, min_alpha) } else { min_alpha }
    } else {
        let steps = Level::DARKEST.rank() as f64 - anchor_rank;
        if steps > 0.0 { (span / steps).mul_add(-(rank - anchor_rank), max_alpha) } else { min_alpha }
    };

    alpha.clamp(min_alpha, max_alpha)
}

fn sanitize_range(min_alpha: f64, max_alpha: f64) -> (f64, f64) {
    let min_alpha = if min_alpha.is_finite() { min_alpha.clamp(0.0, 1.0) } else { DEFAULT_MIN_ALPHA };
    let max_alpha = if max_alpha.is_finite() { max_alpha.clamp(0.0, 1.0) } else { DEFAULT_MAX_ALPHA };
    if min_alpha <= max_alpha { (min_alpha, max_alpha) } else { (max_alpha, min_alpha) }
}

// ---------------------------------------------------------------------------
// Compositing inversion
// ---------------------------------------------------------------------------

/// Foreground that reproduces `target` when composited over `background`
/// at `alpha`.
///
/// Alpha is clamped to [0, 1] (non-finite → 1). At alpha 0 there is no
/// foreground that works, so the background itself is returned, fully
/// transparent.
#[must_use]
pub fn invert_over(target: Color, background: Color, alpha: f64) -> Rgba {
    let alpha = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 1.0 };
    if alpha == 0.0 {
        return Rgba { color: background, alpha };
    }

    let solve = |t: u8, b: u8| (1.0 - alpha).mul_add(-f64::from(b), f64::from(t)) / alpha;
    Rgba {
        color: Color::from_channels(
            solve(target.r, background.r),
            solve(target.g, background.g),
            solve(target.b, background.b),
        ),
        alpha,
    }
}

/// String-level [`invert_over`]: parses both colors and formats the result.
///
/// A color that does not parse is reported to `sink` and yields
/// [`FALLBACK_RGBA`].
#[must_use]
pub fn calculate_transparent_color(
    target: &str,
    background: &str,
    alpha: f64,
    sink: &dyn DiagnosticSink,
) -> String {
    let parsed = Color::from_hex(target).and_then(|t| Color::from_hex(background).map(|b| (t, b)));
    match parsed {
        Ok((target, background)) => invert_over(target, background, alpha).to_string(),
        Err(err) => {
            let error = err.to_string();
            sink.error(
                "cannot compute transparent color",
                &[("target", target), ("background", background), ("error", error.as_str())],
            );
            FALLBACK_RGBA.to_string()
        }
    }
}

/// Transparent variant of the solid color `target` at `level`.
///
/// Levels at or above the anchor (lighter) use the light background.
#[must_use]
pub fn transparent_for_level(
    target: &str,
    level: Level,
    anchor: Level,
    config: &TransparencyConfig,
    sink: &dyn DiagnosticSink,
) -> String {
    let background = if level <= anchor { &config.light_background } else { &config.dark_background };
    let alpha = alpha_for_level(level, anchor, config.min_alpha, config.max_alpha);
    calculate_transparent_color(target, background, alpha, sink)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
