//! Token-level normalization
//!
//! Each whitespace-delimited token is resolved independently, in this order:
//!
//! 1. slang expansion
//! 2. contraction repair
//! 3. pass-through for known, whitelisted, code-like and domain-term tokens
//! 4. fuzzy spelling correction against the known words
//!
//! Sentence punctuation around a token is peeled off before resolution and
//! reattached afterwards. Output tokens are joined with single spaces.

use crate::config::SpellingConfig;
use crate::fuzzy;
use crate::lexicon::{fold_key, Lexicon};
use crate::types::{ChangeCategory, ChangeRecord, StageOutput};

/// Characters that mark a token as code
const CODE_CHARS: &[char] = &[
    '{', '}', '(', ')', '[', ']', '<', '>', '=', ';', ':', '/', '\\', '|', '@', '#', '$', '%',
    '^', '&', '*', '+', '~', '`', '_',
];

/// Sentence punctuation, brackets and quotes stripped from token edges
const EDGE_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '\u{201C}', '\u{201D}',
    '\u{2018}', '\u{2019}', '\u{00AB}', '\u{00BB}',
];

/// Why a token was left untouched by the spelling pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exemption {
    /// In the known-word set
    Known,
    /// On the technical whitelist
    Whitelisted,
    /// Contains code punctuation, an underscore or a digit
    CodeLike,
    /// Hyphenated, dotted, internally capitalized or very long
    DomainTerm,
}

/// Per-token slang, contraction and spelling resolver
#[derive(Debug)]
pub struct TokenNormalizer<'a> {
    lexicon: &'a Lexicon,
    config: &'a SpellingConfig,
}

impl<'a> TokenNormalizer<'a> {
    /// Create a normalizer over a lexicon
    pub fn new(lexicon: &'a Lexicon, config: &'a SpellingConfig) -> Self {
        Self { lexicon, config }
    }

    /// Normalize every token of `text`
    pub fn normalize(&self, text: &str) -> StageOutput {
        let mut changes = Vec::new();
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|token| {
                let (prefix, core, suffix) = peel(token);
                match self.resolve(core) {
                    Some(change) => {
                        let rebuilt = format!("{prefix}{}{suffix}", change.replacement);
                        changes.push(change);
                        rebuilt
                    }
                    None => token.to_string(),
                }
            })
            .collect();

        StageOutput {
            text: tokens.join(" "),
            changes,
        }
    }

    /// Resolve one bare token, returning the change to apply if any
    pub fn resolve(&self, token: &str) -> Option<ChangeRecord> {
        if !token.chars().any(char::is_alphabetic) {
            return None;
        }

        if let Some(expansion) = self.lexicon.lookup_slang(token) {
            return Some(record(token, expansion, ChangeCategory::Slang));
        }

        if let Some(expansion) = self.lexicon.lookup_contraction(token) {
            return Some(record(token, expansion, ChangeCategory::Contraction));
        }

        if let Some(exemption) = self.exemption(token) {
            log::trace!("Token '{}' passes through: {:?}", token, exemption);
            return None;
        }

        if token.chars().count() < self.config.min_length {
            return None;
        }

        let word = fold_key(token);
        let word_len = word.chars().count();
        let threshold = self.config.threshold;
        let lexicon = self.lexicon;
        let candidates = lexicon
            .known_word_lengths()
            .filter(|&len| fuzzy::similarity_ceiling(word_len, len) >= threshold)
            .flat_map(move |len| lexicon.known_words_of_length(len));
        match fuzzy::best_match(&word, candidates) {
            Some(found) if found.score >= threshold => {
                Some(record(token, found.candidate, ChangeCategory::Spelling))
            }
            _ => None,
        }
    }

    /// Reason a token is exempt from spelling correction
    pub fn exemption(&self, token: &str) -> Option<Exemption> {
        if self.lexicon.is_known(token) {
            Some(Exemption::Known)
        } else if self.lexicon.is_whitelisted(token) {
            Some(Exemption::Whitelisted)
        } else if is_code_like(token) {
            Some(Exemption::CodeLike)
        } else if is_domain_term(token, self.config.domain_term_max_len) {
            Some(Exemption::DomainTerm)
        } else {
            None
        }
    }
}

fn record(original: &str, replacement: &str, category: ChangeCategory) -> ChangeRecord {
    log::debug!("{} '{}' -> '{}'", category, original, replacement);
    ChangeRecord::new(original, replacement, category)
}

/// Split a token into leading punctuation, core and trailing punctuation
fn peel(token: &str) -> (&str, &str, &str) {
    let start = token.len() - token.trim_start_matches(EDGE_PUNCTUATION).len();
    let rest = &token[start..];
    let end = rest.trim_end_matches(EDGE_PUNCTUATION).len();
    (&token[..start], &rest[..end], &rest[end..])
}

fn is_code_like(token: &str) -> bool {
    token
        .chars()
        .any(|c| CODE_CHARS.contains(&c) || c.is_ascii_digit())
}

fn is_domain_term(token: &str, max_len: usize) -> bool {
    token.contains('-')
        || token.contains('.')
        || token.chars().skip(1).any(char::is_uppercase)
        || token.chars().count() > max_len
}
