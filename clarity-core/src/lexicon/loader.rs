use super::config::LexiconConfig;
use super::{Lexicon, LexiconBuilder};
use crate::error::LexiconError;

const BUILTIN_LEXICON: &str = include_str!("../../configs/lexicon/english.toml");

/// Embedded English word list backing the spelling oracle
pub const BUILTIN_WORDS: &str = include_str!("../../configs/lexicon/words.txt");

/// TOML source of the embedded lexicon, usable as a template
pub fn builtin_source() -> &'static str {
    BUILTIN_LEXICON
}

/// Parsed configuration of the embedded lexicon
pub fn builtin_config() -> Result<LexiconConfig, LexiconError> {
    toml::from_str(BUILTIN_LEXICON)
        .map_err(|e| LexiconError::Parse(format!("embedded lexicon: {e}")))
}

pub(super) fn load_builtin() -> Result<Lexicon, LexiconError> {
    let config = builtin_config()?;

    if config.metadata.code != "en" {
        return Err(LexiconError::Parse(format!(
            "embedded lexicon code mismatch: expected en, got {}",
            config.metadata.code
        )));
    }

    LexiconBuilder::from_config(config).build()
}
