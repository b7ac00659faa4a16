//! Configuration loading and validation for chainbuild.
//!
//! Loads build-step declarations from `chainbuild.toml` (or the file named by
//! `CHAINBUILD_CONFIG`). Validates all settings before any step runs.

use chainbuild_core::chain::{ChainEntry, ChainSpec, HandlerCall};
use chainbuild_core::transform::TransformOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "chainbuild.toml";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CHAINBUILD_CONFIG";

/// The root configuration structure.
///
/// Maps directly to `chainbuild.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Which code transform to run each segment through
    #[serde(default)]
    pub transform: TransformConfig,

    /// Build steps, run in declaration order
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

/// Transform selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformConfig {
    /// External program (argv) reading code on stdin and writing it to stdout.
    /// Omitted = identity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
}

/// One build step: a chain assembled into one target of one node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepConfig {
    /// Node directory, relative to the config file
    pub node: PathBuf,

    /// Output target mask
    #[serde(default = "default_target")]
    pub target: String,

    /// Target holding the node's file list
    #[serde(default = "default_files_target")]
    pub files_target: String,

    /// File suffixes eligible for the `source` handler
    #[serde(default = "default_source_suffixes")]
    pub source_suffixes: Vec<String>,

    /// Ordered ingredients of the artifact
    #[serde(default = "default_chain")]
    pub chain: ChainSpec,

    /// Options forwarded opaquely to the transform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<TransformOptions>,
}

fn default_target() -> String {
    "?.js".into()
}
fn default_files_target() -> String {
    "?.files".into()
}
fn default_source_suffixes() -> Vec<String> {
    vec!["vanilla.js".into(), "js".into(), "browser.js".into()]
}
fn default_chain() -> ChainSpec {
    vec![ChainEntry::Handler(HandlerCall::Source)]
}

impl StepConfig {
    /// A step for `node` with every option at its default.
    pub fn new(node: impl Into<PathBuf>) -> Self {
        Self {
            node: node.into(),
            target: default_target(),
            files_target: default_files_target(),
            source_suffixes: default_source_suffixes(),
            chain: default_chain(),
            params: None,
        }
    }

    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let step = format!("steps[{index}] ({})", self.node.display());
        if self.node.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(format!("{step}: node must not be empty")));
        }
        if self.target.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!("{step}: target must not be empty")));
        }
        if self.files_target.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{step}: files_target must not be empty"
            )));
        }
        if self.source_suffixes.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{step}: source_suffixes must list at least one suffix"
            )));
        }
        if self.source_suffixes.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "{step}: source_suffixes must not contain an empty suffix"
            )));
        }
        Ok(())
    }
}

impl BuildConfig {
    /// The config path when none is given: `CHAINBUILD_CONFIG`, or
    /// `chainbuild.toml` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE))
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::ParseError { reason, .. } => ConfigError::ParseError {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), steps = config.steps.len(), "Loaded build config");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::new(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.steps.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one [[steps]] entry is required".into(),
            ));
        }
        if self.transform.command.first().is_some_and(|p| p.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "transform.command must start with a program name".into(),
            ));
        }
        for (index, step) in self.steps.iter().enumerate() {
            step.validate(index)?;
        }
        Ok(())
    }

    /// Generate a starter config TOML string (for the `init` command).
    pub fn default_toml() -> String {
        let config = Self {
            transform: TransformConfig::default(),
            steps: vec![StepConfig::new("bundles/index")],
        };
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigError> for chainbuild_core::Error {
    fn from(err: ConfigError) -> Self {
        chainbuild_core::Error::Config {
            message: err.to_string(),
        }
    }
}
