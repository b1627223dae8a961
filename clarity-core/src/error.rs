//! Error types
//!
//! The pipeline itself is total and never fails. Errors only arise while
//! loading a lexicon or validating a configuration, both of which happen
//! before the first call to `analyze`.

use thiserror::Error;

/// Errors raised while loading or validating a lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The TOML resource could not be parsed
    #[error("failed to parse lexicon: {0}")]
    Parse(String),

    /// A lexicon or word-list file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A grammar pattern does not compile
    #[error("invalid grammar pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern source
        pattern: String,
        /// Compiler message
        reason: String,
    },

    /// A mapping has an empty key or value
    #[error("empty {kind} entry (key: '{key}')")]
    EmptyEntry {
        /// Which table the entry belongs to
        kind: &'static str,
        /// The key, possibly empty
        key: String,
    },

    /// The same jargon term is declared twice
    #[error("duplicate jargon term '{0}'")]
    DuplicateTerm(String),
}

/// Errors raised while validating an analyzer configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Spelling threshold outside the 0-100 score range
    #[error("spelling threshold must be within 0..=100, got {0}")]
    ThresholdOutOfRange(f64),

    /// Any other invalid setting
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level error for building analyzers
#[derive(Error, Debug)]
pub enum Error {
    /// Lexicon failure
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    /// Configuration failure
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for fallible construction
pub type Result<T> = std::result::Result<T, Error>;
