// SPDX-License-Identifier: MIT
//
// tonal — derive tonal CSS palettes from a single seed color.
//
// This is the command-line front end over the two library crates:
//
//   tonal-color → sRGB colors, hex parsing, HSL
//   tonal-scale → lightness scales, hue drift, transparency, token map
//
// Three ways in, one way out:
//
//   tonal palettes.toml            every [[palette]] in the file
//   tonal --seed '#3b82f6' [opts]  one palette from the command line
//   tonal --random 42 [opts]       one palette from a deterministic seed
//
//   → a single CSS rule of custom properties on stdout
//
// Engine diagnostics (bad seeds, bad backgrounds) go through `log`; set
// RUST_LOG=tonal=info to see every palette as it is generated.

use std::env;
use std::path::PathBuf;
use std::process;

use thiserror::Error;
use tonal_scale::config::DEFAULT_PREFIX;
use tonal_scale::palette::derive;
use tonal_scale::{
    Combination, ConfigError, DiagnosticSink, HueShiftMode, LightnessMethod, LogSink, NoopSink,
    PaletteConfig, PaletteFile, generate_palettes, hue_shift_explanation, random_seed_color,
};

const USAGE: &str = "\
usage: tonal <palettes.toml> [--selector s] [--explain]
       tonal --seed <hex> [options]
       tonal --random <u32> [options]

options:
  --prefix <name>         token prefix (default: color)
  --method <name>         hsl | perceptual | average | hybrid (default: hybrid)
  --hue-shift <mode>      fixed | natural | unnatural (default: natural)
  --combination <name>    monochromatic | complementary | analogous |
                          split-complementary | triadic | tetradic
  --text-colors           emit text-color tokens
  --selector <css>        rule selector (default: :root)
  --explain               describe each derivation in a leading comment
  -h, --help              show this help
";

// ─── Errors ─────────────────────────────────────────────────────────────────

/// Bad command line.
#[derive(Debug, Error, PartialEq, Eq)]
enum UsageError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown option {0}")]
    UnknownOption(String),

    #[error("unknown {kind} {value:?}")]
    UnknownName { kind: &'static str, value: String },

    #[error("invalid random seed {0:?}, expected an unsigned 32-bit integer")]
    InvalidRandom(String),

    #[error("expected a palette file, --seed or --random")]
    NoSource,

    #[error("only one of a palette file, --seed or --random may be given")]
    MultipleSources,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

// ─── Arguments ──────────────────────────────────────────────────────────────

/// Where the palettes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    File(PathBuf),
    Seed(String),
    Random(u32),
}

/// Parsed command line for a palette run.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    source: Source,
    prefix: Option<String>,
    method: Option<LightnessMethod>,
    hue_shift: Option<HueShiftMode>,
    combination: Option<Combination>,
    text_colors: bool,
    selector: String,
    explain: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Run(Options),
}

/// Parse everything after the program name.
fn parse_args(args: &[String]) -> Result<Command, UsageError> {
    let mut source = None;
    let mut prefix = None;
    let mut method = None;
    let mut hue_shift = None;
    let mut combination = None;
    let mut text_colors = false;
    let mut selector = ":root".to_string();
    let mut explain = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .cloned()
                .ok_or_else(|| UsageError::MissingValue(arg.clone()))
        };
        let next_source = match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--seed" => Some(Source::Seed(value()?)),
            "--random" => {
                let raw = value()?;
                let n = raw.trim().parse().map_err(|_| UsageError::InvalidRandom(raw.clone()))?;
                Some(Source::Random(n))
            }
            "--prefix" => {
                prefix = Some(value()?);
                None
            }
            "--method" => {
                method = Some(named(&value()?, "lightness method", LightnessMethod::from_name)?);
                None
            }
            "--hue-shift" => {
                hue_shift = Some(named(&value()?, "hue-shift mode", HueShiftMode::from_name)?);
                None
            }
            "--combination" => {
                combination = Some(named(&value()?, "combination", Combination::from_name)?);
                None
            }
            "--selector" => {
                selector = value()?;
                None
            }
            "--text-colors" => {
                text_colors = true;
                None
            }
            "--explain" => {
                explain = true;
                None
            }
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(UsageError::UnknownOption(other.to_string()));
            }
            path => Some(Source::File(PathBuf::from(path))),
        };

        if let Some(next) = next_source {
            if source.replace(next).is_some() {
                return Err(UsageError::MultipleSources);
            }
        }
    }

    let source = source.ok_or(UsageError::NoSource)?;
    Ok(Command::Run(Options {
        source,
        prefix,
        method,
        hue_shift,
        combination,
        text_colors,
        selector,
        explain,
    }))
}

/// Strict name lookup for command-line enums.
fn named<T>(value: &str, kind: &'static str, parse: fn(&str) -> Option<T>) -> Result<T, UsageError> {
    parse(value).ok_or_else(|| UsageError::UnknownName { kind, value: value.to_string() })
}

// ─── Running ────────────────────────────────────────────────────────────────

impl Options {
    /// The palette configs this run will generate.
    fn configs(&self) -> Result<Vec<PaletteConfig>, ConfigError> {
        let seed = match &self.source {
            Source::File(path) => {
                if self.has_palette_overrides() {
                    log::warn!(target: "tonal", "palette options are ignored when reading a file");
                }
                return Ok(PaletteFile::load(path)?.palettes);
            }
            Source::Seed(seed) => seed.clone(),
            Source::Random(n) => random_seed_color(*n).to_hex(),
        };

        let prefix = self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX);
        let mut config = PaletteConfig::new(prefix, seed)
            .with_method(self.method.unwrap_or_default())
            .with_hue_shift(self.hue_shift.unwrap_or_default())
            .with_combination(self.combination.unwrap_or_default());
        if self.text_colors {
            config = config.with_text_colors(true);
        }
        Ok(vec![config])
    }

    const fn has_palette_overrides(&self) -> bool {
        self.prefix.is_some()
            || self.method.is_some()
            || self.hue_shift.is_some()
            || self.combination.is_some()
            || self.text_colors
    }
}

/// Generate the CSS for a parsed command line.
fn render(options: &Options, sink: &dyn DiagnosticSink) -> Result<String, CliError> {
    let configs = options.configs()?;
    let palette = generate_palettes(&configs, sink);

    let mut out = String::new();
    if options.explain {
        out.push_str("/*\n");
        for config in &configs {
            out.push_str(&explain(config));
        }
        out.push_str(" */\n");
    }
    out.push_str(&palette.to_css(&options.selector));
    Ok(out)
}

/// One comment paragraph per palette: seed, measured lightness, anchor, and
/// the direction the hue will drift.
fn explain(config: &PaletteConfig) -> String {
    let d = derive(config, &NoopSink);
    let lightness: Vec<String> = d.scale.iter().map(|(_, l)| format!("{l:.1}")).collect();
    format!(
        " * {}: seed {}, {} lightness {:.1}, anchored at {}\n *   scale: {}\n *   {}\n",
        config.prefix,
        d.seed,
        config.method,
        d.measured,
        d.anchor,
        lightness.join(" "),
        hue_shift_explanation(d.seed.to_hsl().h, config.hue_shift),
    )
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("tonal: {e}");
            eprint!("{USAGE}");
            process::exit(1);
        }
    };

    match render(&options, &LogSink) {
        Ok(css) => print!("{css}"),
        Err(e) => {
            eprintln!("tonal: {e}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn run_options(list: &[&str]) -> Options {
        match parse_args(&args(list)) {
            Ok(Command::Run(options)) => options,
            other => panic!("{list:?}: {other:?}"),
        }
    }

    // ── Parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parse_file() {
        let o = run_options(&["palettes.toml"]);
        assert_eq!(o.source, Source::File(PathBuf::from("palettes.toml")));
        assert_eq!(o.selector, ":root");
        assert!(!o.explain);
    }

    #[test]
    fn parse_seed_with_options() {
        let o = run_options(&[
            "--seed", "#3b82f6", "--prefix", "brand", "--method", "perceptual", "--hue-shift",
            "fixed", "--combination", "triadic", "--text-colors", "--explain", "--selector",
            ".theme",
        ]);
        assert_eq!(o.source, Source::Seed("#3b82f6".into()));
        assert_eq!(o.prefix.as_deref(), Some("brand"));
        assert_eq!(o.method, Some(LightnessMethod::Perceptual));
        assert_eq!(o.hue_shift, Some(HueShiftMode::Fixed));
        assert_eq!(o.combination, Some(Combination::Triadic));
        assert!(o.text_colors && o.explain);
        assert_eq!(o.selector, ".theme");
    }

    #[test]
    fn parse_random() {
        assert_eq!(run_options(&["--random", "42"]).source, Source::Random(42));
        assert_eq!(
            parse_args(&args(&["--random", "-1"])),
            Err(UsageError::InvalidRandom("-1".into()))
        );
    }

    #[test]
    fn parse_help() {
        assert_eq!(parse_args(&args(&["--seed", "#fff", "-h"])), Ok(Command::Help));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_args(&args(&[])), Err(UsageError::NoSource));
        assert_eq!(
            parse_args(&args(&["--seed"])),
            Err(UsageError::MissingValue("--seed".into()))
        );
        assert_eq!(
            parse_args(&args(&["--seed", "#fff", "--bogus"])),
            Err(UsageError::UnknownOption("--bogus".into()))
        );
        assert_eq!(
            parse_args(&args(&["--seed", "#fff", "a.toml"])),
            Err(UsageError::MultipleSources)
        );
        assert_eq!(
            parse_args(&args(&["--seed", "#fff", "--method", "oklab"])),
            Err(UsageError::UnknownName { kind: "lightness method", value: "oklab".into() })
        );
    }

    #[test]
    fn usage_messages() {
        assert_eq!(UsageError::NoSource.to_string(), "expected a palette file, --seed or --random");
        assert_eq!(
            UsageError::UnknownName { kind: "combination", value: "x".into() }.to_string(),
            "unknown combination \"x\""
        );
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    #[test]
    fn render_seed() {
        let o = run_options(&["--seed", "#3b82f6", "--prefix", "brand"]);
        let css = render(&o, &NoopSink).unwrap();
        assert!(css.starts_with(":root {\n"), "{css}");
        assert!(css.ends_with("}\n"));
        assert!(css.contains("  --brand-color: var(--brand-"));
        assert!(css.contains(": #3b82f6;\n"));
        assert_eq!(css.lines().count(), 18);
    }

    #[test]
    fn render_random_is_deterministic() {
        let o = run_options(&["--random", "7"]);
        let a = render(&o, &NoopSink).unwrap();
        let b = render(&o, &NoopSink).unwrap();
        assert_eq!(a, b);
        assert!(a.contains(&random_seed_color(7).to_hex()));
    }

    #[test]
    fn render_explain() {
        let o = run_options(&["--seed", "#3b82f6", "--explain"]);
        let css = render(&o, &NoopSink).unwrap();
        assert!(css.starts_with("/*\n * color: seed #3b82f6, hybrid lightness"), "{css}");
        assert!(css.contains("blue seed, natural drift"), "{css}");
        assert!(css.contains(" */\n:root {\n"));
    }

    #[test]
    fn render_missing_file() {
        let o = run_options(&["/definitely/not/here/palettes.toml"]);
        let err = render(&o, &NoopSink).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Read { .. })));
        assert!(err.to_string().starts_with("cannot read /definitely/not/here/palettes.toml"));
    }
}
