//! Palette assembly — from one seed color to a map of CSS custom properties.
//!
//! ```text
//! seed ──measure──▶ L ──closest level──▶ anchor ──even scale──▶ [L50 … L950]
//!                                                                  │
//!          per level: hue drift + inversion at the target lightness ◀┘
//! ```
//!
//! The anchor level always carries the seed itself, so a designer's brand
//! color survives untouched. Everything else is derived around it.

use std::fmt;

use indexmap::IndexMap;
use tonal_color::Color;

use crate::alpha::transparent_for_level;
use crate::config::PaletteConfig;
use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::harmony::companion_configs;
use crate::hue_shift::calculate_hue_shift;
use crate::lightness::perceptual_lightness;
use crate::scale::{Level, LightnessScale, find_closest_level};

/// Text on a light surface needs the color at or below this perceptual L.
pub const TEXT_ON_LIGHT_MAX: f64 = 65.0;

/// Text on a dark surface needs the color at or above this perceptual L.
pub const TEXT_ON_DARK_MIN: f64 = 40.0;

/// Anchor colors lighter than this get dark text on top of them.
pub const TEXT_PIVOT: f64 = 60.0;

/// Reference chains longer than this are treated as unresolvable.
const MAX_REFERENCE_DEPTH: usize = 16;

/// Alias suffixes and their rank offsets from the anchor.
const ALIASES: [(&str, isize); 5] =
    [("color", 0), ("lighter", -2), ("light", -1), ("dark", 1), ("darker", 2)];

// ---------------------------------------------------------------------------
// TokenValue
// ---------------------------------------------------------------------------

/// A palette entry: a concrete CSS color, or a pointer to another token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// `#rrggbb` or `rgba(…)`.
    Literal(String),
    /// Key of another token, e.g. `--brand-500`.
    Reference(String),
}

impl TokenValue {
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }

    /// The literal text or the referenced key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) | Self::Reference(s) => s,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.write_str(value),
            Self::Reference(key) => write!(f, "var({key})"),
        }
    }
}

// ---------------------------------------------------------------------------
// GeneratedPalette
// ---------------------------------------------------------------------------

/// Token name → value, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedPalette {
    tokens: IndexMap<String, TokenValue>,
}

impl GeneratedPalette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a token. An overwritten key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: TokenValue) {
        self.tokens.insert(key.into(), value);
    }

    /// Merge `other` into `self`; its values win on conflicting keys.
    pub fn extend(&mut self, other: Self) {
        self.tokens.extend(other.tokens);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.tokens.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Follow references from `key` to a literal.
    ///
    /// Returns `None` for a missing key, a dangling reference, or a chain
    /// deeper than 16 (which includes cycles).
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<&str> {
        let mut current = key;
        for _ in 0..=MAX_REFERENCE_DEPTH {
            match self.tokens.get(current)? {
                TokenValue::Literal(value) => return Some(value),
                TokenValue::Reference(next) => current = next,
            }
        }
        None
    }

    /// Render as a CSS rule with one custom property per token.
    #[must_use]
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::with_capacity(self.tokens.len() * 32 + selector.len() + 8);
        out.push_str(selector);
        out.push_str(" {\n");
        for (key, value) in &self.tokens {
            out.push_str("  ");
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&value.to_string());
            out.push_str(";\n");
        }
        out.push_str("}\n");
        out
    }
}

impl<'a> IntoIterator for &'a GeneratedPalette {
    type Item = (&'a String, &'a TokenValue);
    type IntoIter = indexmap::map::Iter<'a, String, TokenValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// `--{prefix}-{suffix}`.
#[must_use]
pub fn token_key(prefix: &str, suffix: impl fmt::Display) -> String {
    format!("--{prefix}-{suffix}")
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Every intermediate of one palette's derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    /// Parsed seed (black if the seed text was invalid).
    pub seed: Color,
    /// Seed lightness under the configured method.
    pub measured: f64,
    /// Level that carries the seed.
    pub anchor: Level,
    pub scale: LightnessScale,
    /// Solid color per level, lightest first.
    pub colors: [Color; Level::COUNT],
}

impl Derivation {
    #[must_use]
    pub const fn color(&self, level: Level) -> Color {
        self.colors[level.rank()]
    }
}

/// Run the scale derivation for `config` without building tokens.
#[must_use]
pub fn derive(config: &PaletteConfig, sink: &dyn DiagnosticSink) -> Derivation {
    let seed = Color::from_hex(&config.seed).unwrap_or_else(|err| {
        let error = err.to_string();
        sink.warn(
            "invalid seed color, using black",
            &[
                ("prefix", config.prefix.as_str()),
                ("seed", config.seed.as_str()),
                ("error", error.as_str()),
            ],
        );
        Color::BLACK
    });

    let method = config.method;
    let measured = method.measure(seed);
    let anchor = find_closest_level(measured, method);
    let scale = LightnessScale::even(measured, anchor);
    let hsl = seed.to_hsl();

    let mut colors = [seed; Level::COUNT];
    for level in Level::ALL {
        if level == anchor {
            continue;
        }
        let hue = calculate_hue_shift(hsl.h, scale[anchor], scale[level], &scale, config.hue_shift);
        colors[level.rank()] = method.invert(hue, hsl.s, scale[level]);
    }

    Derivation { seed, measured, anchor, scale, colors }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// [`generate_palette_with`] that discards diagnostics.
#[must_use]
pub fn generate_palette(config: &PaletteConfig) -> GeneratedPalette {
    generate_palette_with(config, &NoopSink)
}

/// Build the tokens for one palette: 11 levels, the five aliases, and the
/// optional transparent and text-color tokens.
#[must_use]
pub fn generate_palette_with(config: &PaletteConfig, sink: &dyn DiagnosticSink) -> GeneratedPalette {
    let derivation = derive(config, sink);
    let prefix = config.prefix.as_str();
    let anchor = derivation.anchor;
    let mut palette = GeneratedPalette::new();

    for level in Level::ALL {
        palette.insert(token_key(prefix, level), TokenValue::Literal(derivation.color(level).to_hex()));
    }

    for (suffix, delta) in ALIASES {
        palette.insert(
            token_key(prefix, suffix),
            TokenValue::Reference(token_key(prefix, anchor.offset(delta))),
        );
    }

    if let Some(transparency) = &config.transparency {
        let transparent_anchor = transparency.anchor.map_or(anchor, |value| {
            Level::from_value(value).unwrap_or_else(|| {
                sink.warn(
                    "invalid transparency anchor, using palette anchor",
                    &[("prefix", prefix), ("anchor", value.to_string().as_str())],
                );
                anchor
            })
        });
        for level in Level::ALL {
            let solid = derivation.color(level).to_hex();
            let value = transparent_for_level(&solid, level, transparent_anchor, transparency, sink);
            palette.insert(token_key(prefix, format_args!("{level}-transparent")), TokenValue::Literal(value));
        }
    }

    if config.text_color {
        let level = text_on_anchor(&derivation);
        palette.insert(token_key(prefix, "text-color"), TokenValue::Reference(token_key(prefix, level)));
    }
    if config.text_color_on_light {
        let level = text_on_light(&derivation);
        palette.insert(
            token_key(prefix, "text-color-on-light"),
            TokenValue::Reference(token_key(prefix, level)),
        );
    }
    if config.text_color_on_dark {
        let level = text_on_dark(&derivation);
        palette.insert(
            token_key(prefix, "text-color-on-dark"),
            TokenValue::Reference(token_key(prefix, level)),
        );
    }

    let anchor_text = anchor.to_string();
    sink.info(
        "generated palette",
        &[
            ("prefix", prefix),
            ("seed", derivation.seed.to_hex().as_str()),
            ("method", config.method.name()),
            ("anchor", anchor_text.as_str()),
        ],
    );

    palette
}

/// Generate every config plus its harmony companions into one palette.
/// Later keys overwrite earlier ones.
#[must_use]
pub fn generate_palettes(configs: &[PaletteConfig], sink: &dyn DiagnosticSink) -> GeneratedPalette {
    let mut merged = GeneratedPalette::new();
    for config in configs {
        merged.extend(generate_palette_with(config, sink));
        for companion in companion_configs(config) {
            merged.extend(generate_palette_with(&companion, sink));
        }
    }
    merged
}

// ---------------------------------------------------------------------------
// Text colors
// ---------------------------------------------------------------------------

/// Readable text on the anchor color itself: the darkest level over a light
/// anchor, the lightest over a dark one.
fn text_on_anchor(derivation: &Derivation) -> Level {
    if perceptual_lightness(derivation.color(derivation.anchor)) > TEXT_PIVOT {
        Level::DARKEST
    } else {
        Level::LIGHTEST
    }
}

/// Anchor if dark enough for a light surface, else the first darker level
/// that is.
fn text_on_light(derivation: &Derivation) -> Level {
    walk(derivation, Level::darker, |l| l <= TEXT_ON_LIGHT_MAX).unwrap_or(Level::DARKEST)
}

/// Anchor if light enough for a dark surface, else the first lighter level
/// that is.
fn text_on_dark(derivation: &Derivation) -> Level {
    walk(derivation, Level::lighter, |l| l >= TEXT_ON_DARK_MIN).unwrap_or(Level::LIGHTEST)
}

fn walk(
    derivation: &Derivation,
    step: fn(Level) -> Option<Level>,
    readable: impl Fn(f64) -> bool,
) -> Option<Level> {
    let mut level = Some(derivation.anchor);
    while let Some(current) = level {
        if readable(perceptual_lightness(derivation.color(current))) {
            return Some(current);
        }
        level = step(current);
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TransparencyConfig;
    use crate::diagnostics::RecordingSink;
    use crate::harmony::Combination;
    use crate::hue_shift::HueShiftMode;
    use crate::lightness::LightnessMethod;
    use log::Level as LogLevel;
    use pretty_assertions::assert_eq;

    const SEEDS: [&str; 10] = [
        "#3b82f6", "#ef4444", "#22c55e", "#eab308", "#a855f7", "#f8fafc", "#0f172a", "#808080",
        "#000000", "#ffffff",
    ];

    fn literal(palette: &GeneratedPalette, key: &str) -> String {
        let value = palette.get(key).unwrap_or_else(|| panic!("{key}: missing"));
        assert!(!value.is_reference(), "{key}: expected literal, got {value:?}");
        value.as_str().to_string()
    }

    fn reference(palette: &GeneratedPalette, key: &str) -> String {
        let value = palette.get(key).unwrap_or_else(|| panic!("{key}: missing"));
        assert!(value.is_reference(), "{key}: expected reference, got {value:?}");
        value.as_str().to_string()
    }

    // ── Scenario ────────────────────────────────────────────────────

    #[test]
    fn blue_seed_palette() {
        let palette = generate_palette(&PaletteConfig::new("brand", "#3b82f6"));
        assert_eq!(palette.len(), 16);

        let hex: Vec<_> = Level::ALL.iter().map(|&l| literal(&palette, &token_key("brand", l))).collect();
        assert_eq!(hex.len(), 11);
        assert!(hex.iter().all(|h| Color::from_hex(h).is_ok()));

        let anchor_key = reference(&palette, "--brand-color");
        assert_eq!(literal(&palette, &anchor_key), "#3b82f6");

        let lighter = reference(&palette, "--brand-lighter");
        let light = reference(&palette, "--brand-light");
        let dark = reference(&palette, "--brand-dark");
        let darker = reference(&palette, "--brand-darker");
        assert_ne!(lighter, light);
        assert_ne!(darker, dark);
        assert_ne!(light, anchor_key);
        assert_ne!(dark, anchor_key);
    }

    #[test]
    fn keys_in_insertion_order() {
        let palette = generate_palette(&PaletteConfig::new("x", "#3b82f6"));
        let keys: Vec<_> = palette.keys().collect();
        assert_eq!(keys[0], "--x-50");
        assert_eq!(keys[10], "--x-950");
        assert_eq!(&keys[11..], ["--x-color", "--x-lighter", "--x-light", "--x-dark", "--x-darker"]);
    }

    // ── Invariants ──────────────────────────────────────────────────

    #[test]
    fn anchor_carries_seed_exactly() {
        for seed in SEEDS {
            for &method in LightnessMethod::all() {
                for &mode in HueShiftMode::all() {
                    let config = PaletteConfig::new("p", seed).with_method(method).with_hue_shift(mode);
                    let palette = generate_palette(&config);
                    let parsed = Color::from_hex(seed).unwrap();
                    let anchor = find_closest_level(method.measure(parsed), method);
                    assert_eq!(
                        literal(&palette, &token_key("p", anchor)),
                        parsed.to_hex(),
                        "{seed} {method} {mode}"
                    );
                }
            }
        }
    }

    #[test]
    fn uppercase_seed_is_normalized() {
        let palette = generate_palette(&PaletteConfig::new("p", "#3B82F6"));
        let key = reference(&palette, "--p-color");
        assert_eq!(literal(&palette, &key), "#3b82f6");
    }

    #[test]
    fn scale_never_increases() {
        for seed in SEEDS {
            for &method in LightnessMethod::all() {
                let d = derive(&PaletteConfig::new("p", seed).with_method(method), &NoopSink);
                assert!(d.scale.is_monotonic(), "{seed} {method}: {:?}", d.scale);
            }
        }
    }

    #[test]
    fn derived_levels_hit_target_lightness() {
        for seed in SEEDS {
            for &method in LightnessMethod::all() {
                let d = derive(&PaletteConfig::new("p", seed).with_method(method), &NoopSink);
                for level in Level::ALL.into_iter().filter(|&l| l != d.anchor) {
                    let got = method.measure(d.color(level));
                    let want = d.scale[level];
                    assert!((got - want).abs() < 3.0, "{seed} {method} {level}: {got} vs {want}");
                }
            }
        }
    }

    #[test]
    fn fixed_mode_keeps_gray_gray() {
        let d = derive(
            &PaletteConfig::new("p", "#808080").with_hue_shift(HueShiftMode::Fixed),
            &NoopSink,
        );
        for color in d.colors {
            assert!(color.r == color.g && color.g == color.b, "{color:?}");
        }
    }

    // ── Edge cases ──────────────────────────────────────────────────

    #[test]
    fn invalid_seed_derives_from_black_and_warns() {
        let sink = RecordingSink::default();
        let palette = generate_palette_with(&PaletteConfig::new("p", "not-a-color"), &sink);
        assert_eq!(sink.count(LogLevel::Warn), 1);
        assert_eq!(palette.len(), 16);
        let anchor = reference(&palette, "--p-color");
        assert_eq!(anchor, "--p-950");
        assert_eq!(literal(&palette, "--p-950"), "#000000");
    }

    #[test]
    fn aliases_clamp_at_light_end() {
        let palette = generate_palette(&PaletteConfig::new("p", "#ffffff"));
        assert_eq!(reference(&palette, "--p-color"), "--p-50");
        assert_eq!(reference(&palette, "--p-lighter"), "--p-50");
        assert_eq!(reference(&palette, "--p-light"), "--p-50");
        assert_eq!(reference(&palette, "--p-dark"), "--p-100");
        assert_eq!(reference(&palette, "--p-darker"), "--p-200");
    }

    #[test]
    fn aliases_clamp_at_dark_end() {
        let palette = generate_palette(&PaletteConfig::new("p", "#000000"));
        assert_eq!(reference(&palette, "--p-color"), "--p-950");
        assert_eq!(reference(&palette, "--p-darker"), "--p-950");
        assert_eq!(reference(&palette, "--p-dark"), "--p-950");
        assert_eq!(reference(&palette, "--p-light"), "--p-900");
        assert_eq!(reference(&palette, "--p-lighter"), "--p-800");
    }

    // ── Transparency ────────────────────────────────────────────────

    #[test]
    fn transparent_tokens() {
        let config = PaletteConfig::new("p", "#3b82f6").with_transparency(TransparencyConfig::default());
        let palette = generate_palette(&config);
        assert_eq!(palette.len(), 27);
        for level in Level::ALL {
            let value = literal(&palette, &format!("--p-{level}-transparent"));
            assert!(value.starts_with("rgba("), "{value}");
        }
        let anchor = reference(&palette, "--p-color");
        assert_eq!(literal(&palette, &format!("{anchor}-transparent")), "rgba(59, 130, 246, 1.000)");
    }

    #[test]
    fn transparency_anchor_override_and_fallback() {
        let sink = RecordingSink::default();
        let config = PaletteConfig::new("p", "#3b82f6").with_transparency(TransparencyConfig {
            anchor: Some(200),
            ..TransparencyConfig::default()
        });
        let palette = generate_palette_with(&config, &sink);
        assert!(literal(&palette, "--p-200-transparent").ends_with("1.000)"));
        assert_eq!(sink.count(LogLevel::Warn), 0);

        let bad = PaletteConfig::new("p", "#3b82f6").with_transparency(TransparencyConfig {
            anchor: Some(450),
            ..TransparencyConfig::default()
        });
        let palette = generate_palette_with(&bad, &sink);
        assert_eq!(sink.count(LogLevel::Warn), 1);
        let anchor = reference(&palette, "--p-color");
        assert!(literal(&palette, &format!("{anchor}-transparent")).ends_with("1.000)"));
    }

    #[test]
    fn bad_background_falls_back_per_token() {
        let sink = RecordingSink::default();
        let config = PaletteConfig::new("p", "#3b82f6").with_transparency(TransparencyConfig {
            dark_background: "midnight".to_string(),
            ..TransparencyConfig::default()
        });
        let palette = generate_palette_with(&config, &sink);
        assert_eq!(literal(&palette, "--p-950-transparent"), crate::alpha::FALLBACK_RGBA);
        assert!(sink.count(LogLevel::Error) > 0);
    }

    // ── Text colors ─────────────────────────────────────────────────

    #[test]
    fn text_colors_for_blue() {
        let palette = generate_palette(&PaletteConfig::new("p", "#3b82f6").with_text_colors(true));
        assert_eq!(palette.len(), 19);
        let anchor = reference(&palette, "--p-color");
        assert_eq!(reference(&palette, "--p-text-color-on-light"), anchor);
        assert_eq!(reference(&palette, "--p-text-color-on-dark"), anchor);
        assert_eq!(reference(&palette, "--p-text-color"), "--p-50");
    }

    #[test]
    fn text_color_on_light_walks_darker() {
        let config = PaletteConfig::new("p", "#fef3c7").with_text_colors(true);
        let d = derive(&config, &NoopSink);
        let palette = generate_palette(&config);
        let chosen = reference(&palette, "--p-text-color-on-light");
        let level = Level::ALL.into_iter().find(|&l| token_key("p", l) == chosen).unwrap();
        assert!(level > d.anchor);
        assert!(perceptual_lightness(d.color(level)) <= TEXT_ON_LIGHT_MAX);
        for l in Level::ALL.into_iter().filter(|&l| l >= d.anchor && l < level) {
            assert!(perceptual_lightness(d.color(l)) > TEXT_ON_LIGHT_MAX, "{l}");
        }
        assert_eq!(reference(&palette, "--p-text-color"), "--p-950");
    }

    #[test]
    fn text_color_on_dark_walks_lighter() {
        let config = PaletteConfig::new("p", "#1e1b4b").with_text_colors(true);
        let d = derive(&config, &NoopSink);
        let palette = generate_palette(&config);
        let chosen = reference(&palette, "--p-text-color-on-dark");
        let level = Level::ALL.into_iter().find(|&l| token_key("p", l) == chosen).unwrap();
        assert!(level < d.anchor);
        assert!(perceptual_lightness(d.color(level)) >= TEXT_ON_DARK_MIN);
        for l in Level::ALL.into_iter().filter(|&l| l > level && l <= d.anchor) {
            assert!(perceptual_lightness(d.color(l)) < TEXT_ON_DARK_MIN, "{l}");
        }
        assert_eq!(reference(&palette, "--p-text-color"), "--p-50");
    }

    // ── Merging ─────────────────────────────────────────────────────

    #[test]
    fn empty_config_list() {
        assert!(generate_palettes(&[], &NoopSink).is_empty());
    }

    #[test]
    fn later_palettes_overwrite() {
        let configs = [PaletteConfig::new("p", "#3b82f6"), PaletteConfig::new("p", "#ef4444")];
        let merged = generate_palettes(&configs, &NoopSink);
        assert_eq!(merged, generate_palette(&configs[1]));
    }

    #[test]
    fn distinct_prefixes_union() {
        let configs = [PaletteConfig::new("a", "#3b82f6"), PaletteConfig::new("b", "#ef4444")];
        let merged = generate_palettes(&configs, &NoopSink);
        assert_eq!(merged.len(), 32);
        assert_eq!(merged.keys().next(), Some("--a-50"));
        assert_eq!(merged.keys().nth(16), Some("--b-50"));
    }

    #[test]
    fn companions_are_generated() {
        let config = PaletteConfig::new("brand", "#3b82f6").with_combination(Combination::Triadic);
        let merged = generate_palettes(&[config], &NoopSink);
        assert_eq!(merged.len(), 48);
        assert!(merged.get("--brand-triadic-1-500").is_some());
        assert!(merged.get("--brand-triadic-2-color").is_some());
    }

    // ── Rendering ───────────────────────────────────────────────────

    #[test]
    fn resolve_follows_references() {
        let palette = generate_palette(&PaletteConfig::new("p", "#3b82f6").with_text_colors(true));
        assert_eq!(palette.resolve("--p-color"), Some("#3b82f6"));
        assert_eq!(palette.resolve("--p-text-color"), palette.resolve("--p-50"));
        assert_eq!(palette.resolve("--missing"), None);
    }

    #[test]
    fn resolve_stops_on_cycles() {
        let mut palette = GeneratedPalette::new();
        palette.insert("--a", TokenValue::Reference("--b".into()));
        palette.insert("--b", TokenValue::Reference("--a".into()));
        palette.insert("--c", TokenValue::Reference("--gone".into()));
        assert_eq!(palette.resolve("--a"), None);
        assert_eq!(palette.resolve("--c"), None);
    }

    #[test]
    fn token_value_kinds() {
        let literal = TokenValue::Literal("#3b82f6".into());
        let reference = TokenValue::Reference("--p-500".into());
        assert!(!literal.is_reference());
        assert!(reference.is_reference());
        assert_eq!(literal.to_string(), "#3b82f6");
        assert_eq!(reference.to_string(), "var(--p-500)");
    }

    #[test]
    fn css_output() {
        let mut palette = GeneratedPalette::new();
        palette.insert("--p-500", TokenValue::Literal("#3b82f6".into()));
        palette.insert("--p-color", TokenValue::Reference("--p-500".into()));
        assert_eq!(
            palette.to_css(":root"),
            ":root {\n  --p-500: #3b82f6;\n  --p-color: var(--p-500);\n}\n"
        );
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut palette = GeneratedPalette::new();
        palette.insert("--a", TokenValue::Literal("#000000".into()));
        palette.insert("--b", TokenValue::Literal("#111111".into()));
        palette.insert("--a", TokenValue::Literal("#ffffff".into()));
        let entries: Vec<_> = palette.iter().map(|(k, v)| (k, v.as_str())).collect();
        assert_eq!(entries, [("--a", "#ffffff"), ("--b", "#111111")]);
    }
}
