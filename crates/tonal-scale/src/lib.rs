//! # tonal-scale — palette derivation from a single seed color
//!
//! Turns one seed color into an 11-level tonal palette (50 … 950) of CSS
//! custom properties. The seed keeps its exact value at the level closest
//! to its own lightness; every other level is re-derived at an evenly
//! spaced target lightness, with a hue drift that mimics how real pigments
//! warm up or cool down as they get lighter or darker.
//!
//! # Architecture
//!
//! ```text
//! PaletteConfig (seed, method, hue-shift mode, options)
//!     │
//!     ▼
//! lightness.rs: measure the seed (hsl / perceptual / average / hybrid)
//!     │
//!     ▼
//! scale.rs:     closest level → anchor, even scale 96 … 16 around it
//!     │
//!     ▼
//! hue_shift.rs: per-level hue drift (natural / unnatural / fixed)
//!     │
//!     ▼
//! lightness.rs: invert (hue, saturation, target L) → color
//!     │
//!     ▼
//! palette.rs:   tokens, aliases, text colors
//!     │          └── alpha.rs: faux-transparent variants
//!     ▼
//! GeneratedPalette (ordered token map → CSS)
//! ```
//!
//! `harmony.rs` adds companion palettes at fixed hue angles, `config.rs`
//! reads the TOML palette file, and `diagnostics.rs` is the sink through
//! which the engine reports inputs it had to repair. Derivation itself
//! never fails.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Level ranks and iteration counts are small integers cast to f64.
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/saturation variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod alpha;
pub mod config;
pub mod diagnostics;
pub mod harmony;
pub mod hue_shift;
pub mod lightness;
pub mod palette;
pub mod scale;

pub use config::{ConfigError, PaletteConfig, PaletteFile, TransparencyConfig};
pub use diagnostics::{DiagnosticSink, LogSink, NoopSink};
pub use harmony::{Combination, random_seed_color};
pub use hue_shift::{HueShiftMode, hue_shift_explanation};
pub use lightness::LightnessMethod;
pub use palette::{GeneratedPalette, TokenValue, generate_palette, generate_palette_with, generate_palettes};
pub use scale::{Level, LightnessScale, calculate_even_scale, find_closest_level};
