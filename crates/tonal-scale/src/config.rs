//! Palette configuration and the TOML file that lists palettes.
//!
//! ```toml
//! [[palette]]
//! prefix = "brand"
//! seed = "#3b82f6"
//! method = "hybrid"          # hsl | perceptual | average | hybrid
//! hue_shift = "natural"      # fixed | natural | unnatural
//! text_color = true
//! combination = "triadic"    # monochromatic | complementary | analogous | ...
//!
//! [palette.transparency]
//! light_background = "#ffffff"
//! dark_background = "#0b0b0f"
//! anchor = 500
//! ```
//!
//! Every field has a default. Unknown enum names fall back to the default
//! variant instead of rejecting the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alpha::{DEFAULT_MAX_ALPHA, DEFAULT_MIN_ALPHA};
use crate::harmony::Combination;
use crate::hue_shift::HueShiftMode;
use crate::lightness::LightnessMethod;

/// Token prefix used when a palette does not name one.
pub const DEFAULT_PREFIX: &str = "color";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to load or write a palette file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {}: {message}", path.display())]
    Read { path: PathBuf, message: String },

    /// The file is not valid TOML or has fields of the wrong type.
    #[error("invalid palette file: {0}")]
    Parse(String),

    /// The configuration could not be rendered as TOML.
    #[error("cannot serialize palette file: {0}")]
    Serialize(String),
}

// ---------------------------------------------------------------------------
// TransparencyConfig
// ---------------------------------------------------------------------------

/// Backgrounds and alpha range for the `-transparent` tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransparencyConfig {
    /// Background for levels at or lighter than the anchor.
    pub light_background: String,
    /// Background for levels darker than the anchor.
    pub dark_background: String,
    /// Fully opaque level. `None` (or an invalid value) means the palette's
    /// own anchor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<u16>,
    pub min_alpha: f64,
    pub max_alpha: f64,
}

impl Default for TransparencyConfig {
    fn default() -> Self {
        Self {
            light_background: "#ffffff".to_string(),
            dark_background: "#000000".to_string(),
            anchor: None,
            min_alpha: DEFAULT_MIN_ALPHA,
            max_alpha: DEFAULT_MAX_ALPHA,
        }
    }
}

// ---------------------------------------------------------------------------
// PaletteConfig
// ---------------------------------------------------------------------------

/// Everything needed to derive one palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct PaletteConfig {
    /// Token prefix: keys look like `--{prefix}-500`.
    pub prefix: String,
    /// Seed color as hex text. Invalid text derives from black.
    pub seed: String,
    pub method: LightnessMethod,
    pub hue_shift: HueShiftMode,
    /// Emit `--{prefix}-text-color`.
    pub text_color: bool,
    /// Emit `--{prefix}-text-color-on-light`.
    pub text_color_on_light: bool,
    /// Emit `--{prefix}-text-color-on-dark`.
    pub text_color_on_dark: bool,
    /// Companion palettes at fixed hue offsets from the seed.
    pub combination: Combination,
    /// Emit `-transparent` tokens when present. Kept last so the TOML
    /// sub-table follows the plain keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparency: Option<TransparencyConfig>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            seed: String::new(),
            method: LightnessMethod::default(),
            hue_shift: HueShiftMode::default(),
            text_color: false,
            text_color_on_light: false,
            text_color_on_dark: false,
            combination: Combination::default(),
            transparency: None,
        }
    }
}

impl PaletteConfig {
    /// A config with defaults for everything but the prefix and seed.
    #[must_use]
    pub fn new(prefix: impl Into<String>, seed: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            seed: seed.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_method(mut self, method: LightnessMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub const fn with_hue_shift(mut self, mode: HueShiftMode) -> Self {
        self.hue_shift = mode;
        self
    }

    #[must_use]
    pub fn with_transparency(mut self, transparency: TransparencyConfig) -> Self {
        self.transparency = Some(transparency);
        self
    }

    /// Turn all three text-color tokens on or off.
    #[must_use]
    pub const fn with_text_colors(mut self, enabled: bool) -> Self {
        self.text_color = enabled;
        self.text_color_on_light = enabled;
        self.text_color_on_dark = enabled;
        self
    }

    #[must_use]
    pub const fn with_combination(mut self, combination: Combination) -> Self {
        self.combination = combination;
        self
    }
}

// ---------------------------------------------------------------------------
// PaletteFile
// ---------------------------------------------------------------------------

/// A TOML file with any number of `[[palette]]` tables, applied in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaletteFile {
    #[serde(rename = "palette", default)]
    pub palettes: Vec<PaletteConfig>,
}

impl PaletteFile {
    /// Parse palette definitions from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or mistyped fields.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a palette file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not a valid palette file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Render back to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
