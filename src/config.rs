use crate::wave::WaveConfig;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the user's config directory
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Errors that can occur when loading or updating a wave config
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("'{1}' is not a valid hex color for {0}")]
    InvalidColor(&'static str, String),

    #[error("unknown config field '{0}'")]
    UnknownField(String),

    #[error("invalid value '{1}' for field '{0}'")]
    InvalidValue(String, String),
}

impl WaveConfig {
    /// Load a config from a YAML or JSON file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json { Self::from_json(&contents)? } else { Self::from_yaml(&contents)? };
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a YAML config.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty document means every field takes its default
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every color field holds a hex color.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [from, to] = self.gradient_colors();
        let colors = [
            ("color", self.color()),
            ("gradientColors[0]", from.as_str()),
            ("gradientColors[1]", to.as_str()),
            ("backgroundColor", self.background_color()),
        ];
        for (field, color) in colors {
            if !is_hex_color(color) {
                return Err(ConfigError::InvalidColor(field, color.to_string()));
            }
        }
        Ok(())
    }
}

/// The config file in the user's config directory, if there is such a directory.
pub fn default_config_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "wavegen")?;
    Some(dirs.config_dir().join(DEFAULT_CONFIG_FILE))
}

/// Whether `color` is `#` followed by 3 or 6 hex digits.
pub fn is_hex_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    match digits.len() {
        3 => digits.chars().all(|c| c.is_ascii_hexdigit()),
        6 => hex::decode(digits).is_ok(),
        _ => false,
    }
}
