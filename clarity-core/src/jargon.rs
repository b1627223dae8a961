//! Jargon detection and replacement
//!
//! All jargon terms are matched in a single scan of one alternation regex
//! ordered longest term first. A longer term therefore shadows the shorter
//! terms it contains, and inserted replacements are never rescanned.

use crate::config::JargonPolicy;
use crate::lexicon::{JargonCategory, JargonEntry, Lexicon};
use crate::text::{carry_leading_case, starts_sentence};
use crate::types::{ChangeCategory, ChangeRecord, StageOutput};
use regex::Captures;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One jargon occurrence found in text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JargonFinding {
    /// Span as it appears in the text
    pub found: String,
    /// Lexicon term it matched
    pub term: String,
    /// Suggested replacement
    pub replacement: String,
    /// Domain of the term
    pub category: JargonCategory,
    /// Why the term may confuse readers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl JargonFinding {
    fn new(found: &str, entry: &JargonEntry) -> Self {
        Self {
            found: found.to_string(),
            term: entry.term.clone(),
            replacement: entry.replacement.clone(),
            category: entry.category,
            explanation: entry.explanation.clone(),
        }
    }
}

/// Replaces jargon terms with their plain-language alternatives
#[derive(Debug, Clone, Copy)]
pub struct JargonReplacer<'a> {
    lexicon: &'a Lexicon,
    policy: JargonPolicy,
}

impl<'a> JargonReplacer<'a> {
    /// Create a replacer over a lexicon
    pub fn new(lexicon: &'a Lexicon, policy: JargonPolicy) -> Self {
        Self { lexicon, policy }
    }

    /// Replace jargon according to the policy
    ///
    /// Exactly one change is recorded per distinct term, in order of first
    /// occurrence, no matter how many occurrences are replaced. A capitalized
    /// match that opens a sentence keeps its capital under either case policy.
    pub fn replace(&self, text: &str) -> StageOutput {
        let Some(matcher) = self.lexicon.jargon_matcher() else {
            return StageOutput::unchanged(text);
        };

        let mut seen: HashSet<String> = HashSet::new();
        let mut changes = Vec::new();

        let replaced = matcher.replace_all(text, |caps: &Captures<'_>| {
            let matched = &caps[0];
            let Some(entry) = self.lexicon.jargon_entry(matched) else {
                return matched.to_string();
            };

            let first = seen.insert(entry.term.to_lowercase());
            if !first && !self.policy.replace_all {
                return matched.to_string();
            }

            let opens_sentence = caps
                .get(0)
                .is_some_and(|m| starts_sentence(text, m.start()));
            let replacement = if self.policy.match_case || opens_sentence {
                carry_leading_case(matched, &entry.replacement)
            } else {
                entry.replacement.clone()
            };

            if first {
                log::debug!("jargon '{}' -> '{}'", matched, replacement);
                changes.push(ChangeRecord::new(
                    matched,
                    replacement.clone(),
                    ChangeCategory::Jargon,
                ));
            }
            replacement
        });

        StageOutput {
            text: replaced.into_owned(),
            changes,
        }
    }

    /// Every jargon occurrence in text order, without rewriting
    pub fn detect(&self, text: &str) -> Vec<JargonFinding> {
        let Some(matcher) = self.lexicon.jargon_matcher() else {
            return Vec::new();
        };

        matcher
            .find_iter(text)
            .filter_map(|m| {
                self.lexicon
                    .jargon_entry(m.as_str())
                    .map(|entry| JargonFinding::new(m.as_str(), entry))
            })
            .collect()
    }
}
