// SPDX-License-Identifier: MIT
//
// tonal-color — sRGB color primitives for the tonal palette engine.
//
// Small on purpose: 8-bit colors, HSL, hex text, and the sRGB transfer
// function. Nothing in here fails loudly — parsing returns a Result, and
// every numeric constructor clamps instead of panicking. The palette engine
// (tonal-scale) decides what to do with a bad string.

pub mod color;
pub mod hsl;

pub use color::{Color, ParseError, srgb_to_linear};
pub use hsl::{Hsl, hue_delta, normalize_hue};
