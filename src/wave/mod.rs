//! The wave configuration record and its pure update rules.

pub mod generators;

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Amplitude slider range, in pixels
pub const AMPLITUDE_RANGE: RangeInclusive<f64> = 0.0..=200.0;

/// Frequency slider range
pub const FREQUENCY_RANGE: RangeInclusive<f64> = 0.5..=10.0;

/// Phase slider range, in radians
pub const PHASE_RANGE: RangeInclusive<f64> = 0.0..=TAU;

/// Opacity slider range, as a percentage
pub const OPACITY_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// The path generation algorithm
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WaveType {
    /// A sine joined with cubic curves.
    #[default]
    Smooth,

    /// A square wave with vertical edges.
    Sharp,

    /// Random-height alternating peaks joined with quadratic curves.
    Abstract,
}

/// Everything needed to draw a wave.
///
/// Values are never mutated in place: every change produces a new config through [WaveConfig::with].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct WaveConfig {
    #[serde(rename = "type")]
    wave_type: WaveType,
    amplitude: f64,
    frequency: f64,
    phase: f64,
    color: String,
    opacity: f64,
    use_gradient: bool,
    gradient_colors: [String; 2],
    background_color: String,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            wave_type: WaveType::Smooth,
            amplitude: 50.0,
            frequency: 2.0,
            phase: 0.0,
            color: "#0099ff".into(),
            opacity: 100.0,
            use_gradient: false,
            gradient_colors: ["#0099ff".into(), "#0066ff".into()],
            background_color: "#ffffff".into(),
        }
    }
}

impl WaveConfig {
    pub fn wave_type(&self) -> WaveType {
        self.wave_type
    }

    /// Vertical displacement, in pixels.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Horizontal phase offset, in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Opacity as a percentage.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// The opacity mapped onto `[0, 1]`, as used by `fill-opacity`.
    pub fn fill_opacity(&self) -> f64 {
        self.opacity / 100.0
    }

    pub fn use_gradient(&self) -> bool {
        self.use_gradient
    }

    /// The gradient start and end colors.
    pub fn gradient_colors(&self) -> &[String; 2] {
        &self.gradient_colors
    }

    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    /// Names of the numeric fields whose values fall outside the interactive control ranges.
    ///
    /// Such values are still rendered; this only helps surface likely typos.
    pub fn outside_control_ranges(&self) -> Vec<&'static str> {
        let checks = [
            ("amplitude", self.amplitude, &AMPLITUDE_RANGE),
            ("frequency", self.frequency, &FREQUENCY_RANGE),
            ("phase", self.phase, &PHASE_RANGE),
            ("opacity", self.opacity, &OPACITY_RANGE),
        ];
        checks.into_iter().filter(|(_, value, range)| !range.contains(value)).map(|(name, ..)| name).collect()
    }

    /// Produce a copy of this config with a single field replaced.
    #[must_use]
    pub fn with(&self, field: WaveField) -> Self {
        let mut next = self.clone();
        match field {
            WaveField::Type(value) => next.wave_type = value,
            WaveField::Amplitude(value) => next.amplitude = value,
            WaveField::Frequency(value) => next.frequency = value,
            WaveField::Phase(value) => next.phase = value,
            WaveField::Color(value) => next.color = value,
            WaveField::Opacity(value) => next.opacity = value,
            WaveField::UseGradient(value) => next.use_gradient = value,
            WaveField::GradientColors(value) => next.gradient_colors = value,
            WaveField::GradientFrom(value) => next.gradient_colors[0] = value,
            WaveField::GradientTo(value) => next.gradient_colors[1] = value,
            WaveField::BackgroundColor(value) => next.background_color = value,
        }
        next
    }

    /// Produce a copy of this config with the field named `key` set from its textual `value`.
    ///
    /// Keys accept both the camelCase record names (`useGradient`) and snake_case (`use_gradient`).
    pub fn with_field(&self, key: &str, value: &str) -> Result<Self, ConfigError> {
        let field = WaveField::parse(key, value)?;
        Ok(self.with(field))
    }
}

/// A single field update.
#[derive(Clone, Debug, PartialEq)]
pub enum WaveField {
    Type(WaveType),
    Amplitude(f64),
    Frequency(f64),
    Phase(f64),
    Color(String),
    Opacity(f64),
    UseGradient(bool),
    GradientColors([String; 2]),
    /// Only the first gradient stop.
    GradientFrom(String),
    /// Only the second gradient stop.
    GradientTo(String),
    BackgroundColor(String),
}

impl WaveField {
    /// Parse a `key`/`value` pair into a field update.
    pub fn parse(key: &str, value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        let field = match key.trim() {
            "type" | "wave_type" | "waveType" => Self::Type(parse_value(key, value)?),
            "amplitude" => Self::Amplitude(parse_value(key, value)?),
            "frequency" => Self::Frequency(parse_value(key, value)?),
            "phase" => Self::Phase(parse_value(key, value)?),
            "color" => Self::Color(value.to_string()),
            "opacity" => Self::Opacity(parse_value(key, value)?),
            "useGradient" | "use_gradient" | "gradient" => Self::UseGradient(parse_value(key, value)?),
            "gradientColors" | "gradient_colors" => {
                let Some((from, to)) = value.split_once(',') else {
                    return Err(ConfigError::InvalidValue(key.to_string(), value.to_string()));
                };
                Self::GradientColors([from.trim().to_string(), to.trim().to_string()])
            }
            "gradientFrom" | "gradient_from" => Self::GradientFrom(value.to_string()),
            "gradientTo" | "gradient_to" => Self::GradientTo(value.to_string()),
            "backgroundColor" | "background_color" | "background" => Self::BackgroundColor(value.to_string()),
            other => return Err(ConfigError::UnknownField(other.to_string())),
        };
        Ok(field)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue(key.to_string(), value.to_string()))
}
