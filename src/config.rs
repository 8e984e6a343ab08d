// File: ./src/config.rs
// Handles configuration loading and defaults.
use crate::context::AppContext;
use crate::error::ConfigError;
use crate::model::parser::{DEFAULT_DATE_FORMAT, DEFAULT_TIMEZONE, ParseSettings};
use anyhow::Result;
use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}
fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
fn default_output_file() -> String {
    "my.ics".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// IANA zone name every event time is read in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// chrono format for explicit date directives.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Relative paths resolve against the working directory.
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub calendar_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            date_format: default_date_format(),
            output_file: default_output_file(),
            log_level: default_log_level(),
            calendar_name: None,
        }
    }
}

impl Config {
    /// Load the configuration using an explicit context.
    /// A missing file means defaults; a malformed one is an error.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let Some(path) = ctx.get_config_file_path() else {
            log::debug!("No config directory available, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    pub fn parse_settings(&self) -> Result<ParseSettings, ConfigError> {
        ParseSettings::from_names(&self.timezone, &self.date_format)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_file)
    }
}
