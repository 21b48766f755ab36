use crate::conf::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Longest line, in characters, accepted from a log file.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024;

/// What to do with a line that does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Log a warning, count the line and keep going.
    #[default]
    Skip,
    /// Stop the run at the first malformed line.
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    #[serde(default)]
    pub on_malformed: MalformedPolicy,
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            on_malformed: MalformedPolicy::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let cfg: Self = toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_line_length == 0 {
            return Err(ConfigError::Invalid {
                field: "max_line_length",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl FromStr for AnalyzerConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cfg: Self = toml::from_str(s).map_err(|e| ConfigError::parse("<string>", e))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
