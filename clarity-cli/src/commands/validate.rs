//! Validate command implementation

use crate::lexicon_source::load_external;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to lexicon file to validate
    #[arg(short = 'l', long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon.display());

        match load_external(&self.lexicon) {
            Ok(lexicon) => {
                println!("✓ Lexicon is valid!");
                println!("  Code: {}", lexicon.code());
                println!("  Name: {}", lexicon.name());
                println!("  Known words: {}", lexicon.known_words().len());
                println!("  Slang entries: {}", lexicon.slang_count());
                println!("  Contractions: {}", lexicon.contraction_count());
                println!("  Jargon terms: {}", lexicon.jargon_terms().len());
                println!("  Grammar patterns: {}", lexicon.grammar_patterns().len());
                println!("  Whitelisted terms: {}", lexicon.whitelist_count());
                println!("  Abbreviations: {}", lexicon.abbreviations().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            lexicon: PathBuf::from("team.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("team.toml"));
    }

    #[test]
    fn test_validate_valid_lexicon() {
        let toml_content = r#"
[metadata]
code = "team"
name = "Team Lexicon"

[slang]
pls = "please"

[[jargon]]
term = "north star"
replacement = "main goal"
category = "business"

[[grammar]]
pattern = "could of"
replacement = "could have"

[abbreviations]
titles = ["Dr"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            lexicon: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_duplicate_jargon() {
        let toml_content = r#"
[metadata]
code = "dup"
name = "Dup"

[[jargon]]
term = "latency"
replacement = "delay"

[[jargon]]
term = "Latency"
replacement = "lag"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            lexicon: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("latency"));
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            lexicon: PathBuf::from("/nonexistent/lexicon.toml"),
        };
        assert!(args.execute().is_err());
    }
}
