//! Project configuration: preset selection, opinion mode, and overrides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::grammar::GrammarOverrides;
use crate::roles::RoleAliases;
use crate::types::Severity;

/// Strictness dial consumed by rules as a tuning input.
///
/// Not a configuration layer: it never changes resolution precedence, only
/// what individual rules decide to do with their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpinionMode {
    /// Every opinion enabled, tight thresholds.
    Strict,
    /// Sensible defaults.
    #[default]
    Balanced,
    /// Only high-confidence findings.
    Lenient,
}

/// Top-level project configuration, layered over the selected preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Id of the preset to resolve against. Falls back to the registry's
    /// current preset, then to engine defaults.
    #[serde(default)]
    pub preset: Option<String>,

    /// Opinion strictness, ambient input to rules.
    #[serde(default)]
    pub opinion_mode: OpinionMode,

    /// Project-level overrides merged over the preset at resolution time.
    #[serde(default)]
    pub overrides: ProjectOverrides,
}

impl ProjectConfig {
    /// Creates a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Project-level overrides layered on top of the selected preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectOverrides {
    /// Grammar convention overrides, overlaid field by field.
    #[serde(default)]
    pub grammar: GrammarOverrides,

    /// Role remaps applied after resolution.
    #[serde(default)]
    pub role_aliases: RoleAliases,

    /// Per-rule overrides, keyed by rule id.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

/// Per-rule configuration, sparse at every layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: RuleOptions,
}

impl RuleConfig {
    /// Creates an empty rule config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the enabled flag.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Sets the severity override.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Sets a rule-specific option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.options.0.insert(key.into(), value.into());
        self
    }
}

/// Ordered key-value options for one rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleOptions(pub(crate) BTreeMap<String, toml::Value>);

impl RuleOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlays `over` on these options; keys in `over` win.
    #[must_use]
    pub fn overlaid_with(&self, over: &Self) -> Self {
        let mut merged = self.0.clone();
        for (key, value) in &over.0 {
            merged.insert(key.clone(), value.clone());
        }
        Self(merged)
    }

    /// Gets an option value as a specific type.
    #[must_use]
    pub fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.0.get(key).and_then(|v| v.clone().try_into().ok())
    }

    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.0.get(key).and_then(toml::Value::as_bool).unwrap_or(default)
    }

    /// Gets an integer option with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.0.get(key).and_then(toml::Value::as_integer).unwrap_or(default)
    }

    /// Gets a string option with a default value.
    #[must_use]
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.0.get(key).and_then(|v| v.as_str()).unwrap_or(default)
    }

    /// Gets a string array option.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Vec<String> {
        self.0
            .get(key)
            .and_then(|v| v.as_array())
            .map(|arr| arr.iter().filter_map(|v| v.as_str().map(String::from)).collect())
            .unwrap_or_default()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
