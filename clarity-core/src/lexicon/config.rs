use super::JargonEntry;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// On-disk shape of a lexicon resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub slang: BTreeMap<String, String>,
    #[serde(default)]
    pub contractions: BTreeMap<String, String>,
    #[serde(default)]
    pub jargon: Vec<JargonEntry>,
    #[serde(default)]
    pub grammar: Vec<GrammarConfig>,
    #[serde(default)]
    pub whitelist: WhitelistConfig,
    #[serde(default)]
    pub abbreviations: AbbreviationConfig,
    #[serde(default)]
    pub words: WordsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarConfig {
    pub pattern: String,
    pub replacement: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhitelistConfig {
    #[serde(default)]
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbbreviationConfig {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsConfig {
    /// Merge the embedded English word list into this lexicon
    #[serde(default = "default_true")]
    pub include_builtin: bool,
    /// Additional known words
    #[serde(default)]
    pub list: Vec<String>,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            list: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
