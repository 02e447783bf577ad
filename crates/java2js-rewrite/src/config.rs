//! Converter configuration.
//!
//! Example `java2js.toml`:
//! ```toml
//! [rules]
//! disable = ["typecast"]
//! templates = true
//! ```

use crate::registry::RuleSet;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Error loading a converter configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown rule: {0}")]
    UnknownRule(String),
}

/// Rule selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Primary rules to leave out, by name.
    pub disable: Vec<String>,
    /// Whether to run the template pass after the primary rules.
    pub templates: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            disable: Vec::new(),
            templates: true,
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub rules: RulesConfig,
}

impl ConverterConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let builtin = RuleSet::builtin();
        match self.rules.disable.iter().find(|n| builtin.get(n).is_none()) {
            Some(name) => Err(ConfigError::UnknownRule(name.clone())),
            None => Ok(()),
        }
    }
}
