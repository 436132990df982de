//! Process-wide generator configuration.
//!
//! This module handles loading configuration from `genweave.toml` files.
//! The configuration supplies the host-framework namespace prefix used by
//! the resolver and per-option fallbacks (default value and aliases) that
//! are consulted whenever a hook's option omits explicit settings.

use crate::error::{ConfigError, Result};
use crate::options::OptionDefault;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "genweave.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Host-framework namespace prefix (first resolution candidate).
    pub host: String,

    /// Per-option fallback settings, keyed by option name.
    pub options: HashMap<String, OptionConfig>,
}

/// Fallback settings for a single option.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OptionConfig {
    /// Default value when the declaration carries none.
    pub default: Option<ConfigDefault>,

    /// Aliases when the declaration carries none.
    pub aliases: Vec<String>,
}

/// A configured default value: either a flag state or a token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigDefault {
    Bool(bool),
    Value(String),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            host: "gen".to_string(),
            options: HashMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path, e.to_string()))?;

        Ok(config)
    }

    /// Look up the configured default for an option name.
    ///
    /// Returns [`OptionDefault::Unset`] when nothing is configured.
    pub fn option_default(&self, name: &str) -> OptionDefault {
        match self.options.get(name).and_then(|o| o.default.as_ref()) {
            Some(ConfigDefault::Bool(b)) => OptionDefault::Bool(*b),
            Some(ConfigDefault::Value(v)) => OptionDefault::Value(v.clone()),
            None => OptionDefault::Unset,
        }
    }

    /// Look up the configured aliases for an option name.
    pub fn option_aliases(&self, name: &str) -> Vec<String> {
        self.options
            .get(name)
            .map(|o| o.aliases.clone())
            .unwrap_or_default()
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# genweave configuration file
# See https://github.com/example/genweave for documentation

# Host-framework namespace prefix. Resolution probes
# "<host>:<base>:<token>" before any third-party candidate.
host = "gen"

# Per-option fallbacks, consulted when a hook declaration omits
# an explicit default or aliases.
#
# [options.test_framework]
# default = "unit_test"
# aliases = ["-t"]
#
# [options.skip_migration]
# default = false
"#
    }
}
