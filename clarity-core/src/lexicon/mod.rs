//! Lexicon store
//!
//! Static mappings consulted by the pipeline: slang and contraction
//! expansions, jargon terms with simpler alternatives, a known-word set
//! used as the spelling oracle, a technical whitelist, the grammar pattern
//! table and sentence abbreviations.
//!
//! A [`Lexicon`] is immutable once built. Lookups are case-insensitive on the
//! key; returned values carry the casing they were stored with.

pub mod config;
mod loader;

pub use config::LexiconConfig;
pub use loader::{builtin_config, builtin_source, BUILTIN_WORDS};

use crate::error::LexiconError;
use crate::text::contains_word;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

static BUILTIN: OnceLock<Arc<Lexicon>> = OnceLock::new();

/// Domain a jargon term comes from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum JargonCategory {
    /// System design vocabulary
    Architecture,
    /// Deployment and infrastructure
    Operations,
    /// Monitoring and diagnostics
    Observability,
    /// Speed and capacity
    Performance,
    /// Corporate buzzwords
    Business,
    /// Anything else
    #[default]
    General,
}

impl JargonCategory {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            JargonCategory::Architecture => "architecture",
            JargonCategory::Operations => "operations",
            JargonCategory::Observability => "observability",
            JargonCategory::Performance => "performance",
            JargonCategory::Business => "business",
            JargonCategory::General => "general",
        }
    }
}

impl fmt::Display for JargonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A jargon term and its plain-language alternative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JargonEntry {
    /// The term as written in the lexicon
    pub term: String,
    /// Simpler form inserted in its place
    pub replacement: String,
    /// Domain of the term
    #[serde(default)]
    pub category: JargonCategory,
    /// Why the term may confuse readers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl JargonEntry {
    /// Create an entry without an explanation
    pub fn new(
        term: impl Into<String>,
        replacement: impl Into<String>,
        category: JargonCategory,
    ) -> Self {
        Self {
            term: term.into(),
            replacement: replacement.into(),
            category,
            explanation: None,
        }
    }

    /// Attach an explanation
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}

/// One compiled phrase-level grammar fix
///
/// Patterns are matched case-insensitively and anchored on word boundaries.
#[derive(Debug, Clone)]
pub struct GrammarPattern {
    source: String,
    replacement: String,
    regex: Regex,
}

impl GrammarPattern {
    /// Compile a pattern
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, LexiconError> {
        let regex = RegexBuilder::new(&format!(r"\b(?:{pattern})\b"))
            .case_insensitive(true)
            .build()
            .map_err(|e| LexiconError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            source: pattern.to_string(),
            replacement: replacement.to_string(),
            regex,
        })
    }

    /// Pattern source as written in the lexicon
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Replacement text
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Compiled, anchored, case-insensitive regex
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Immutable dictionary store shared by every pipeline stage
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    slang: HashMap<String, String>,
    contractions: HashMap<String, String>,
    jargon: HashMap<String, JargonEntry>,
    /// Lowercase jargon keys, longest first
    jargon_terms: Vec<String>,
    jargon_matcher: Option<Regex>,
    known_words: HashSet<String>,
    /// Known words in lexicographic order, for deterministic fuzzy scans
    sorted_words: Vec<String>,
    /// Indices into `sorted_words`, grouped by character count
    words_by_length: BTreeMap<usize, Vec<usize>>,
    whitelist: HashSet<String>,
    grammar: Vec<GrammarPattern>,
    abbreviations: HashMap<String, String>,
}

impl Lexicon {
    /// The embedded English lexicon, parsed once per process
    pub fn builtin() -> Arc<Lexicon> {
        BUILTIN
            .get_or_init(|| {
                Arc::new(loader::load_builtin().expect("embedded lexicon must be valid"))
            })
            .clone()
    }

    /// Start an empty lexicon
    pub fn builder(code: impl Into<String>, name: impl Into<String>) -> LexiconBuilder {
        LexiconBuilder::new(code, name)
    }

    /// Parse a lexicon from TOML
    pub fn from_toml_str(content: &str) -> Result<Self, LexiconError> {
        let config: LexiconConfig =
            toml::from_str(content).map_err(|e| LexiconError::Parse(e.to_string()))?;
        LexiconBuilder::from_config(config).build()
    }

    /// Load a lexicon from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Lexicon code, e.g. `en`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable lexicon name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expansion for a slang word
    pub fn lookup_slang(&self, word: &str) -> Option<&str> {
        self.slang.get(&fold_key(word)).map(String::as_str)
    }

    /// Expansion for an apostrophe-less contraction
    pub fn lookup_contraction(&self, word: &str) -> Option<&str> {
        self.contractions.get(&fold_key(word)).map(String::as_str)
    }

    /// Whether a word, or a regular inflection of one, is in the known-word set
    pub fn is_known(&self, word: &str) -> bool {
        let key = fold_key(word);
        if key.is_empty() {
            return false;
        }
        if self.known_words.contains(&key) {
            return true;
        }
        inflection_stems(&key)
            .iter()
            .any(|stem| self.known_words.contains(stem))
    }

    /// Whether a token is on the technical whitelist
    pub fn is_whitelisted(&self, word: &str) -> bool {
        self.whitelist.contains(&fold_key(word))
    }

    /// Jargon entry for an exact term
    pub fn jargon_entry(&self, term: &str) -> Option<&JargonEntry> {
        self.jargon.get(&normalize_term(term))
    }

    /// Replacement and explanation for a single term, ignoring surrounding punctuation
    pub fn explain_term(&self, term: &str) -> Option<&JargonEntry> {
        let trimmed = term.trim_matches(|c: char| !c.is_alphanumeric());
        self.jargon_entry(trimmed)
    }

    /// Jargon terms contained in `text`, longest first
    ///
    /// Containment is case-insensitive and word-bounded. Ties in length are
    /// ordered lexicographically.
    pub fn match_jargon(&self, text: &str) -> Vec<(&str, &JargonEntry)> {
        let haystack = normalize_term(text);
        self.jargon_terms
            .iter()
            .filter(|term| contains_word(&haystack, term))
            .filter_map(|term| self.jargon.get(term).map(|entry| (term.as_str(), entry)))
            .collect()
    }

    /// All jargon entries ordered by term
    pub fn jargon_entries(&self) -> Vec<&JargonEntry> {
        let mut entries: Vec<&JargonEntry> = self.jargon.values().collect();
        entries.sort_by(|a, b| a.term.cmp(&b.term));
        entries
    }

    /// Lowercase jargon keys, longest first
    pub fn jargon_terms(&self) -> &[String] {
        &self.jargon_terms
    }

    /// Single-scan matcher over every jargon term, longest alternative first
    pub fn jargon_matcher(&self) -> Option<&Regex> {
        self.jargon_matcher.as_ref()
    }

    /// Grammar patterns in table order
    pub fn grammar_patterns(&self) -> &[GrammarPattern] {
        &self.grammar
    }

    /// Known words in lexicographic order
    pub fn known_words(&self) -> &[String] {
        &self.sorted_words
    }

    /// Character lengths that occur in the known-word set, shortest first
    pub fn known_word_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.words_by_length.keys().copied()
    }

    /// Known words of exactly `len` characters in lexicographic order
    pub fn known_words_of_length(&self, len: usize) -> impl Iterator<Item = &str> + '_ {
        self.words_by_length
            .get(&len)
            .into_iter()
            .flatten()
            .map(move |&index| self.sorted_words[index].as_str())
    }

    /// Category of a sentence abbreviation (without its trailing dot)
    pub fn abbreviation_category(&self, abbreviation: &str) -> Option<&str> {
        self.abbreviations
            .get(&fold_key(abbreviation.trim_end_matches('.')))
            .map(String::as_str)
    }

    /// All abbreviations with their categories
    pub fn abbreviations(&self) -> &HashMap<String, String> {
        &self.abbreviations
    }

    /// Number of slang entries
    pub fn slang_count(&self) -> usize {
        self.slang.len()
    }

    /// Number of contraction entries
    pub fn contraction_count(&self) -> usize {
        self.contractions.len()
    }

    /// Number of whitelisted terms
    pub fn whitelist_count(&self) -> usize {
        self.whitelist.len()
    }
}

/// Incremental lexicon construction with validation in [`build`](Self::build)
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    code: String,
    name: String,
    slang: Vec<(String, String)>,
    contractions: Vec<(String, String)>,
    jargon: Vec<JargonEntry>,
    grammar: Vec<(String, String)>,
    whitelist: Vec<String>,
    abbreviations: Vec<(String, String)>,
    words: Vec<String>,
}

impl LexiconBuilder {
    /// Create an empty builder
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Seed a builder from a parsed lexicon resource
    pub fn from_config(config: LexiconConfig) -> Self {
        let mut builder = Self::new(config.metadata.code, config.metadata.name);
        builder.slang = config.slang.into_iter().collect();
        builder.contractions = config.contractions.into_iter().collect();
        builder.jargon = config.jargon;
        builder.grammar = config
            .grammar
            .into_iter()
            .map(|g| (g.pattern, g.replacement))
            .collect();
        builder.whitelist = config.whitelist.terms;

        let mut categories: Vec<_> = config.abbreviations.categories.into_iter().collect();
        categories.sort_by(|a, b| a.0.cmp(&b.0));
        for (category, abbreviations) in categories {
            for abbreviation in abbreviations {
                builder
                    .abbreviations
                    .push((abbreviation, category.clone()));
            }
        }

        if config.words.include_builtin {
            builder = builder.word_list(BUILTIN_WORDS);
        }
        builder.words(config.words.list)
    }

    /// Add a slang expansion
    pub fn slang(mut self, word: impl Into<String>, expansion: impl Into<String>) -> Self {
        self.slang.push((word.into(), expansion.into()));
        self
    }

    /// Add a contraction expansion
    pub fn contraction(mut self, word: impl Into<String>, expansion: impl Into<String>) -> Self {
        self.contractions.push((word.into(), expansion.into()));
        self
    }

    /// Add a jargon entry
    pub fn jargon(mut self, entry: JargonEntry) -> Self {
        self.jargon.push(entry);
        self
    }

    /// Append a grammar pattern to the table
    pub fn grammar(mut self, pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.grammar.push((pattern.into(), replacement.into()));
        self
    }

    /// Whitelist a technical term
    pub fn whitelist(mut self, term: impl Into<String>) -> Self {
        self.whitelist.push(term.into());
        self
    }

    /// Add a sentence abbreviation
    pub fn abbreviation(
        mut self,
        abbreviation: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        self.abbreviations
            .push((abbreviation.into(), category.into()));
        self
    }

    /// Add known words
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Add known words from word-list text
    ///
    /// Words are whitespace separated; `#` starts a comment.
    pub fn word_list(self, content: &str) -> Self {
        let words: Vec<String> = content
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default())
            .flat_map(str::split_whitespace)
            .map(str::to_string)
            .collect();
        self.words(words)
    }

    /// Add known words from a word-list file
    pub fn word_file(self, path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(self.word_list(&content))
    }

    /// Validate every table and build the lexicon
    pub fn build(self) -> Result<Lexicon, LexiconError> {
        let mut known_words: HashSet<String> = HashSet::new();

        let slang = build_expansions("slang", self.slang, &mut known_words)?;
        let contractions = build_expansions("contraction", self.contractions, &mut known_words)?;

        let mut jargon = HashMap::new();
        for entry in self.jargon {
            let key = normalize_term(&entry.term);
            if key.is_empty() || entry.replacement.trim().is_empty() {
                return Err(LexiconError::EmptyEntry { kind: "jargon", key });
            }
            add_words(&entry.replacement, &mut known_words);
            if jargon.insert(key.clone(), entry).is_some() {
                return Err(LexiconError::DuplicateTerm(key));
            }
        }

        let mut jargon_terms: Vec<String> = jargon.keys().cloned().collect();
        jargon_terms.sort_by(|a, b| {
            Reverse(a.chars().count())
                .cmp(&Reverse(b.chars().count()))
                .then_with(|| a.cmp(b))
        });
        let jargon_matcher = build_jargon_matcher(&jargon_terms)?;

        let mut grammar = Vec::with_capacity(self.grammar.len());
        for (pattern, replacement) in self.grammar {
            if pattern.trim().is_empty() || replacement.trim().is_empty() {
                return Err(LexiconError::EmptyEntry {
                    kind: "grammar",
                    key: pattern,
                });
            }
            add_words(&replacement, &mut known_words);
            grammar.push(GrammarPattern::new(&pattern, &replacement)?);
        }

        let whitelist: HashSet<String> = self
            .whitelist
            .iter()
            .map(|term| fold_key(term.trim()))
            .filter(|term| !term.is_empty())
            .collect();

        let mut abbreviations = HashMap::new();
        for (abbreviation, category) in self.abbreviations {
            let key = fold_key(abbreviation.trim().trim_end_matches('.'));
            if key.is_empty() {
                return Err(LexiconError::EmptyEntry {
                    kind: "abbreviation",
                    key,
                });
            }
            known_words.insert(key.clone());
            abbreviations.insert(key, category);
        }

        for word in &self.words {
            let key = fold_key(word.trim());
            if !key.is_empty() {
                known_words.insert(key);
            }
        }

        let mut sorted_words: Vec<String> = known_words.iter().cloned().collect();
        sorted_words.sort();

        let mut words_by_length: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (index, word) in sorted_words.iter().enumerate() {
            words_by_length
                .entry(word.chars().count())
                .or_default()
                .push(index);
        }

        log::info!(
            "Loaded lexicon '{}': {} known words, {} slang, {} contractions, {} jargon terms, {} grammar patterns",
            self.code,
            known_words.len(),
            slang.len(),
            contractions.len(),
            jargon.len(),
            grammar.len()
        );

        Ok(Lexicon {
            code: self.code,
            name: self.name,
            slang,
            contractions,
            jargon,
            jargon_terms,
            jargon_matcher,
            known_words,
            sorted_words,
            words_by_length,
            whitelist,
            grammar,
            abbreviations,
        })
    }
}

/// Lowercase a lookup key and fold typographic apostrophes
pub(crate) fn fold_key(word: &str) -> String {
    word.to_lowercase().replace('\u{2019}', "'")
}

/// Lowercase, fold apostrophes and collapse internal whitespace
fn normalize_term(term: &str) -> String {
    fold_key(term)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_expansions(
    kind: &'static str,
    entries: Vec<(String, String)>,
    known_words: &mut HashSet<String>,
) -> Result<HashMap<String, String>, LexiconError> {
    let mut map = HashMap::with_capacity(entries.len());
    for (word, expansion) in entries {
        let key = fold_key(word.trim());
        if key.is_empty() || expansion.trim().is_empty() {
            return Err(LexiconError::EmptyEntry { kind, key });
        }
        add_words(&expansion, known_words);
        map.insert(key, expansion);
    }
    Ok(map)
}

/// Register every word of an emitted phrase as known
fn add_words(phrase: &str, known_words: &mut HashSet<String>) {
    for word in phrase.split_whitespace() {
        let word = word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
        if !word.is_empty() {
            known_words.insert(fold_key(word));
        }
    }
}

fn build_jargon_matcher(terms: &[String]) -> Result<Option<Regex>, LexiconError> {
    if terms.is_empty() {
        return Ok(None);
    }

    let alternation = terms
        .iter()
        .map(|term| regex::escape(term).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = format!(r"\b(?:{alternation})\b");
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map(Some)
        .map_err(|e| LexiconError::InvalidPattern {
            pattern,
            reason: e.to_string(),
        })
}

/// Candidate base forms for a regularly inflected word
fn inflection_stems(word: &str) -> Vec<String> {
    let mut stems = Vec::new();
    let mut push = |stem: &str| {
        if stem.chars().count() >= 2 {
            stems.push(stem.to_string());
        }
    };

    if let Some(base) = word.strip_suffix("'s") {
        push(base);
    }
    if let Some(base) = word.strip_suffix('\'') {
        push(base);
    }
    if let Some(base) = word.strip_suffix("ies") {
        push(&format!("{base}y"));
    }
    if let Some(base) = word.strip_suffix("ied") {
        push(&format!("{base}y"));
    }
    if let Some(base) = word.strip_suffix("es") {
        push(base);
    }
    if !word.ends_with("ss") {
        if let Some(base) = word.strip_suffix('s') {
            push(base);
        }
    }
    if let Some(base) = word.strip_suffix("ily") {
        push(&format!("{base}y"));
    }
    if let Some(base) = word.strip_suffix("ly") {
        push(base);
    }

    for suffix in ["ed", "ing", "er", "est"] {
        if let Some(base) = word.strip_suffix(suffix) {
            push(base);
            push(&format!("{base}e"));
            if let Some(undoubled) = undouble(base) {
                push(undoubled);
            }
        }
    }

    stems
}

/// `stopp` -> `stop`, `runn` -> `run`
fn undouble(base: &str) -> Option<&str> {
    let mut chars = base.chars().rev();
    let last = chars.next()?;
    let prev = chars.next()?;
    if last == prev && !"aeiou".contains(last) {
        Some(&base[..base.len() - last.len_utf8()])
    } else {
        None
    }
}
