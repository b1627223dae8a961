//! Analyzer configuration
//!
//! Configuration is an explicit value handed to an [`Analyzer`](crate::Analyzer)
//! at construction. Every field has a default, so a partial TOML table
//! deserializes into a complete configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default minimum fuzzy score (0-100) for a spelling correction
pub const DEFAULT_SPELLING_THRESHOLD: f64 = 92.0;

/// Settings for the spelling pass of the token normalizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellingConfig {
    /// Minimum similarity score (0-100) to accept a fuzzy correction
    pub threshold: f64,
    /// Tokens shorter than this (in characters) are never corrected
    pub min_length: usize,
    /// Tokens longer than this are treated as domain terms
    pub domain_term_max_len: usize,
}

impl Default for SpellingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SPELLING_THRESHOLD,
            min_length: 3,
            domain_term_max_len: 12,
        }
    }
}

/// How jargon terms are substituted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JargonPolicy {
    /// Replace every occurrence of a term, not just the first
    pub replace_all: bool,
    /// Carry a leading capital from the occurrence into the replacement
    pub match_case: bool,
}

impl Default for JargonPolicy {
    fn default() -> Self {
        Self {
            replace_all: true,
            match_case: false,
        }
    }
}

/// Complete analyzer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Spelling pass settings
    pub spelling: SpellingConfig,
    /// Jargon pass settings
    pub jargon: JargonPolicy,
}

impl AnalyzerConfig {
    /// Create a builder
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Check every setting is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.spelling.threshold;
        if !(0.0..=100.0).contains(&threshold) {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }
        if self.spelling.min_length == 0 {
            return Err(ConfigError::Invalid(
                "spelling.min_length must be at least 1".to_string(),
            ));
        }
        if self.spelling.domain_term_max_len == 0 {
            return Err(ConfigError::Invalid(
                "spelling.domain_term_max_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Set the fuzzy spelling threshold (0-100)
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.spelling.threshold = threshold;
        self
    }

    /// Set the minimum token length for spelling correction
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.config.spelling.min_length = min_length;
        self
    }

    /// Set the length above which tokens count as domain terms
    pub fn domain_term_max_len(mut self, len: usize) -> Self {
        self.config.spelling.domain_term_max_len = len;
        self
    }

    /// Replace every jargon occurrence or only the first
    pub fn replace_all(mut self, replace_all: bool) -> Self {
        self.config.jargon.replace_all = replace_all;
        self
    }

    /// Carry a leading capital into jargon replacements
    pub fn match_case(mut self, match_case: bool) -> Self {
        self.config.jargon.match_case = match_case;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AnalyzerConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
