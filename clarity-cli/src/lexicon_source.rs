//! Lexicon source management for CLI

use crate::error::CliError;
use anyhow::Result;
use clarity_core::{Lexicon, LexiconBuilder};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Source of the lexicon
#[derive(Debug, Clone, PartialEq)]
pub enum LexiconSource {
    /// Embedded English lexicon
    BuiltIn,
    /// External lexicon TOML file
    External {
        /// Path to the lexicon file
        path: PathBuf,
    },
}

impl LexiconSource {
    /// Pick the external file when one is given, else the built-in lexicon
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => LexiconSource::External {
                path: path.to_path_buf(),
            },
            None => LexiconSource::BuiltIn,
        }
    }

    /// Get the display name for the lexicon source
    pub fn display_name(&self) -> String {
        match self {
            LexiconSource::BuiltIn => "Built-in: English".to_string(),
            LexiconSource::External { path } => format!("External: {}", path.display()),
        }
    }

    /// Load the lexicon, merging any extra word-list files
    pub fn load(&self, extra_words: &[PathBuf]) -> Result<Arc<Lexicon>> {
        log::info!("Using lexicon {}", self.display_name());

        if extra_words.is_empty() {
            return match self {
                LexiconSource::BuiltIn => Ok(Lexicon::builtin()),
                LexiconSource::External { path } => Ok(Arc::new(load_external(path)?)),
            };
        }

        let config = match self {
            LexiconSource::BuiltIn => clarity_core::lexicon::builtin_config()
                .map_err(|e| CliError::LexiconError(e.to_string()))?,
            LexiconSource::External { path } => read_config(path)?,
        };

        let mut builder = LexiconBuilder::from_config(config);
        for words in extra_words {
            if !words.exists() {
                return Err(CliError::FileNotFound(words.display().to_string()).into());
            }
            log::debug!("Merging word list {}", words.display());
            builder = builder
                .word_file(words)
                .map_err(|e| CliError::LexiconError(e.to_string()))?;
        }

        let lexicon = builder
            .build()
            .map_err(|e| CliError::LexiconError(e.to_string()))?;
        Ok(Arc::new(lexicon))
    }
}

/// Load and validate an external lexicon file
pub fn load_external(path: &Path) -> Result<Lexicon> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    Lexicon::from_file(path).map_err(|e| CliError::LexiconError(e.to_string()).into())
}

fn read_config(path: &Path) -> Result<clarity_core::lexicon::LexiconConfig> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::LexiconError(format!("{}: {e}", path.display())))?;
    toml::from_str(&content)
        .map_err(|e| CliError::LexiconError(format!("{}: {e}", path.display())).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MINI_LEXICON: &str = r#"
[metadata]
code = "mini"
name = "Mini"

[slang]
pls = "please"

[words]
include_builtin = false
list = ["please", "help"]
"#;

    #[test]
    fn test_from_path() {
        assert_eq!(LexiconSource::from_path(None), LexiconSource::BuiltIn);
        assert_eq!(
            LexiconSource::from_path(Some(Path::new("team.toml"))),
            LexiconSource::External {
                path: PathBuf::from("team.toml")
            }
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(LexiconSource::BuiltIn.display_name(), "Built-in: English");
        let external = LexiconSource::External {
            path: PathBuf::from("team.toml"),
        };
        assert_eq!(external.display_name(), "External: team.toml");
    }

    #[test]
    fn test_load_builtin() {
        let lexicon = LexiconSource::BuiltIn.load(&[]).unwrap();
        assert_eq!(lexicon.code(), "en");
    }

    #[test]
    fn test_load_external_with_extra_words() {
        let dir = TempDir::new().unwrap();
        let lexicon_path = dir.path().join("mini.toml");
        let words_path = dir.path().join("extra.txt");
        fs::write(&lexicon_path, MINI_LEXICON).unwrap();
        fs::write(&words_path, "grafana\nprometheus\n").unwrap();

        let source = LexiconSource::External { path: lexicon_path };
        let lexicon = source.load(&[words_path]).unwrap();

        assert_eq!(lexicon.code(), "mini");
        assert!(lexicon.is_known("grafana"));
        assert!(lexicon.is_known("help"));
        assert_eq!(lexicon.lookup_slang("pls"), Some("please"));
    }

    #[test]
    fn test_missing_extra_words_file() {
        let err = LexiconSource::BuiltIn
            .load(&[PathBuf::from("/nonexistent/words.txt")])
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_external_lexicon() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(
            &path,
            "[metadata]\ncode = \"bad\"\nname = \"Bad\"\n[[grammar]]\npattern = \"(\"\nreplacement = \"x\"\n",
        )
        .unwrap();

        let err = load_external(&path).unwrap_err();
        assert!(err.to_string().starts_with("Lexicon error:"));
    }
}
