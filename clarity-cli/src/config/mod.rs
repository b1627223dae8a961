//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use clarity_core::AnalyzerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Pipeline settings
    #[serde(default)]
    pub analysis: AnalyzerConfig,

    /// Lexicon selection
    #[serde(default)]
    pub lexicon: LexiconSettings,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Lexicon-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct LexiconSettings {
    /// Lexicon TOML replacing the built-in one
    pub path: Option<PathBuf>,

    /// Word-list files merged into the known words
    #[serde(default)]
    pub extra_words: Vec<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load and validate a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        config
            .analysis
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load a configuration file, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
