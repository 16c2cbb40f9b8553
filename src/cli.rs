//! Command line surface standing in for the interactive controls.

use anyhow::{Context, anyhow};
use clap::Parser;
use std::path::PathBuf;
use wavegen::config::default_config_path;
use wavegen::{RandomSource, SvgTarget, WaveConfig, WaveField, WaveType, build_path, compose_svg_with};

/// Generate decorative SVG waves
#[derive(Parser, Debug)]
#[command(name = "wavegen", version, about = "Generate decorative SVG waves", long_about = None)]
pub struct Cli {
    /// YAML or JSON file holding the base wave config
    #[arg(short, long, value_name = "FILE", env = "WAVEGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Wave style: smooth, sharp or abstract
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub wave_type: Option<WaveType>,

    /// Vertical displacement in pixels (0 to 200 on the slider)
    #[arg(short, long)]
    pub amplitude: Option<f64>,

    /// Oscillation count scale (0.5 to 10 on the slider)
    #[arg(short, long)]
    pub frequency: Option<f64>,

    /// Horizontal phase offset in radians
    #[arg(short, long)]
    pub phase: Option<f64>,

    /// Fill color, e.g. #0099ff
    #[arg(long)]
    pub color: Option<String>,

    /// Fill opacity as a percentage
    #[arg(long)]
    pub opacity: Option<f64>,

    /// Fill with a two stop vertical gradient instead of a solid color
    #[arg(short, long)]
    pub gradient: bool,

    /// First gradient color
    #[arg(long, value_name = "COLOR")]
    pub gradient_from: Option<String>,

    /// Second gradient color
    #[arg(long, value_name = "COLOR")]
    pub gradient_to: Option<String>,

    /// Background color used by the preview document
    #[arg(long, value_name = "COLOR")]
    pub background: Option<String>,

    /// Set any field by name, e.g. --set useGradient=true
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Seed for the abstract wave's random peaks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print only the path data
    #[arg(long, conflicts_with_all = ["preview", "download"])]
    pub path_only: bool,

    /// Produce the full canvas preview document instead of the export one
    #[arg(long)]
    pub preview: bool,

    /// Write the document to this file instead of stdout
    #[arg(short, long, value_name = "FILE", conflicts_with = "download")]
    pub output: Option<PathBuf>,

    /// Write the export document to wave.svg in the current directory
    #[arg(short, long)]
    pub download: bool,
}

impl Cli {
    /// Build the wave config: file (or default file) first, then flags, then --set overrides.
    pub fn wave_config(&self) -> anyhow::Result<WaveConfig> {
        let mut config = self.base_config()?;

        let fields = [
            self.wave_type.map(WaveField::Type),
            self.amplitude.map(WaveField::Amplitude),
            self.frequency.map(WaveField::Frequency),
            self.phase.map(WaveField::Phase),
            self.color.clone().map(WaveField::Color),
            self.opacity.map(WaveField::Opacity),
            self.gradient.then_some(WaveField::UseGradient(true)),
            self.gradient_from.clone().map(WaveField::GradientFrom),
            self.gradient_to.clone().map(WaveField::GradientTo),
            self.background.clone().map(WaveField::BackgroundColor),
        ];
        for field in fields.into_iter().flatten() {
            config = config.with(field);
        }

        for entry in &self.overrides {
            let (key, value) = entry.split_once('=').ok_or_else(|| anyhow!("expected KEY=VALUE, got '{entry}'"))?;
            config = config.with_field(key, value)?;
        }
        config.validate()?;
        for field in config.outside_control_ranges() {
            eprintln!("[wavegen] note: {field} is outside the usual control range");
        }
        Ok(config)
    }

    fn base_config(&self) -> anyhow::Result<WaveConfig> {
        if let Some(path) = &self.config {
            return WaveConfig::load(path).with_context(|| format!("loading config from {}", path.display()));
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                eprintln!("[wavegen] using config at {}", path.display());
                WaveConfig::load(&path).with_context(|| format!("loading config from {}", path.display()))
            }
            _ => Ok(WaveConfig::default()),
        }
    }

    /// Render the requested output: bare path data, or the export or preview document.
    pub fn render(&self, config: &WaveConfig, rng: &mut dyn RandomSource) -> String {
        if self.path_only {
            return build_path(config, rng).to_string();
        }
        compose_svg_with(config, self.target(), rng)
    }

    /// The document flavor selected by the flags.
    pub fn target(&self) -> SvgTarget {
        if self.preview { SvgTarget::Preview } else { SvgTarget::Export }
    }

    /// The random source for this run.
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

/// Install the logger, showing warnings unless `RUST_LOG` says otherwise.
///
/// Returns false if a logger was already installed.
pub fn init_logging() -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).try_init().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["wavegen", "--config", "/dev/null"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("invalid arguments")
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&["--type", "sharp", "-a", "80", "--gradient", "--gradient-to", "#000000"]);
        let config = cli.wave_config().expect("invalid config");
        assert_eq!(config.wave_type(), WaveType::Sharp);
        assert_eq!(config.amplitude(), 80.0);
        assert!(config.use_gradient());
        assert_eq!(config.gradient_colors()[1], "#000000");
    }

    #[test]
    fn set_applies_last() {
        let cli = parse(&["--opacity", "20", "--set", "opacity=70", "--set", "type=abstract"]);
        let config = cli.wave_config().expect("invalid config");
        assert_eq!(config.opacity(), 70.0);
        assert_eq!(config.wave_type(), WaveType::Abstract);
    }

    #[test]
    fn malformed_set() {
        let cli = parse(&["--set", "opacity"]);
        assert!(cli.wave_config().is_err());
    }

    #[test]
    fn invalid_color_rejected() {
        let cli = parse(&["--color", "teal"]);
        assert!(cli.wave_config().is_err());
    }

    #[test]
    fn unknown_type_rejected() {
        assert!(Cli::try_parse_from(["wavegen", "--type", "triangle"]).is_err());
    }

    fn render(args: &[&str]) -> String {
        let cli = parse(args);
        let config = cli.wave_config().expect("invalid config");
        cli.render(&config, &mut cli.rng())
    }

    #[test]
    fn seed_repeats_abstract_output() {
        let args = ["--type", "abstract", "--seed", "7"];
        assert_eq!(render(&args), render(&args));
        assert_ne!(render(&args), render(&["--type", "abstract", "--seed", "8"]));
    }

    #[test]
    fn path_only_prints_bare_path() {
        let output = render(&["--type", "sharp", "--frequency", "0", "--path-only"]);
        assert_eq!(output, "M 0,300 L 1200,600 L 0,600 Z");
    }

    #[test]
    fn preview_uses_full_canvas() {
        let output = render(&["--preview"]);
        assert!(output.starts_with(r#"<svg viewBox="0 0 1200 600""#), "{output}");
    }

    #[test]
    fn export_is_default() {
        let cli = parse(&[]);
        assert_eq!(cli.target(), SvgTarget::Export);
        let output = render(&[]);
        assert!(output.starts_with(r#"<svg viewBox="0 0 800 600""#), "{output}");
    }

    #[test]
    fn path_only_conflicts() {
        assert!(Cli::try_parse_from(["wavegen", "--path-only", "--download"]).is_err());
        assert!(Cli::try_parse_from(["wavegen", "--path-only", "--preview"]).is_err());
    }

    #[test]
    fn logger_installs_once() {
        init_logging();
        assert!(!init_logging());
        assert!(log::log_enabled!(log::Level::Warn));
    }
}
