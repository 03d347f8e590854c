//! Configuration loading and management
//!
//! Handles parsing of `.did.toml` configuration files.

use serde::Deserialize;
use std::path::Path;

use crate::log::DEFAULT_LOG_FILE;
use crate::render::DEFAULT_LABEL_WIDTH;
use crate::window::DEFAULT_WINDOW_DAYS;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = ".did.toml";

/// Largest accepted report window
pub const MAX_WINDOW_DAYS: usize = 366;

/// Largest accepted label column width
pub const MAX_LABEL_WIDTH: usize = 32;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Log file configuration
    #[serde(default)]
    pub log: LogConfig,

    /// Report layout configuration
    #[serde(default)]
    pub report: ReportConfig,
}

/// Log file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Path of the task log, relative to the working directory
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

/// Report layout configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Number of days shown, ending at the report date
    #[serde(default = "default_days")]
    pub days: usize,

    /// Characters of each task name shown left of the grid
    #[serde(default = "default_label_width")]
    pub label_width: usize,
}

fn default_days() -> usize {
    DEFAULT_WINDOW_DAYS
}

fn default_label_width() -> usize {
    DEFAULT_LABEL_WIDTH
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            label_width: default_label_width(),
        }
    }
}

impl Config {
    /// Load configuration from a `.did.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `.did.toml` from `dir`, or return defaults when it is absent
    pub fn load_from_dir(dir: &Path) -> crate::error::Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.log.validate()?;
        self.report.validate()?;
        Ok(())
    }
}

impl LogConfig {
    fn validate(&self) -> crate::error::Result<()> {
        if self.file.trim().is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "log.file cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl ReportConfig {
    fn validate(&self) -> crate::error::Result<()> {
        validate_days(self.days)
            .map_err(|msg| crate::error::Error::InvalidConfig(format!("report.days {msg}")))?;
        if self.label_width == 0 || self.label_width > MAX_LABEL_WIDTH {
            return Err(crate::error::Error::InvalidConfig(format!(
                "report.label_width must be between 1 and {MAX_LABEL_WIDTH}"
            )));
        }
        Ok(())
    }
}

/// Check a window size, returning the reason it is out of range
pub fn validate_days(days: usize) -> std::result::Result<(), String> {
    if days == 0 || days > MAX_WINDOW_DAYS {
        return Err(format!("must be between 1 and {MAX_WINDOW_DAYS}"));
    }
    Ok(())
}
