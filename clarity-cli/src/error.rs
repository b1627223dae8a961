//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Lexicon could not be loaded
    LexiconError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::LexiconError(msg) => write!(f, "Lexicon error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("notes.txt".to_string());
        assert_eq!(error.to_string(), "File not found: notes.txt");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("threshold out of range".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: threshold out of range"
        );
    }

    #[test]
    fn test_lexicon_error_display() {
        let error = CliError::LexiconError("duplicate jargon term: latency".to_string());
        assert_eq!(
            error.to_string(),
            "Lexicon error: duplicate jargon term: latency"
        );
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::FileNotFound("a.txt".to_string()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "File not found: a.txt");
    }
}
