//! Layered application configuration.
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. YAML file passed with `--config`
//! 3. environment variables prefixed with `CALCULATOR__`
//! 4. CLI overrides

use std::path::{Path, PathBuf};

use calculator::CalculatorConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables merged into the configuration.
///
/// Nested keys are separated by `__`, e.g. `CALCULATOR__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "CALCULATOR__";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Effective application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub calculator: CalculatorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `warn` or `calculator=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Load the layered configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `path` is given but is not a file,
    /// and [`ConfigError::Invalid`] if any source fails to parse or contains
    /// unknown keys.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(path)?
            .extract::<Self>()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    /// Build the figment holding all configuration sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `path` is given but is not a file.
    pub fn figment(path: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Apply `-v` flags: `-v` info, `-vv` debug, `-vvv` trace.
    pub fn apply_cli_overrides(&mut self, verbose: u8) {
        let level = match verbose {
            0 => return,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        level.clone_into(&mut self.logging.level);
    }
}
