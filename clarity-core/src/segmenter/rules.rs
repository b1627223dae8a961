use super::SentenceSplitter;
use crate::lexicon::{fold_key, Lexicon};
use std::collections::HashMap;
use std::ops::Range;

/// Abbreviation category that never ends a sentence
const TITLES: &str = "titles";

/// Decision about whether a terminator ends a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryDecision {
    /// The sentence ends after the terminator run
    Boundary,
    /// The terminator belongs to the current sentence
    NotBoundary,
}

/// Punctuation-driven sentence splitter with abbreviation suppression
///
/// A run of `.`, `!` or `?` (plus any closing quotes or brackets) followed by
/// whitespace or the end of the text ends a sentence. A lone `.` after a
/// known abbreviation or a single capital initial does not, except that
/// non-title abbreviations still end a sentence before a capitalized word.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedSplitter {
    abbreviations: HashMap<String, String>,
}

impl RuleBasedSplitter {
    /// Splitter with no abbreviations
    pub fn new() -> Self {
        Self::default()
    }

    /// Splitter using a lexicon's abbreviation table
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        Self {
            abbreviations: lexicon.abbreviations().clone(),
        }
    }

    /// Register an abbreviation, written with or without its final dot
    pub fn with_abbreviation(
        mut self,
        abbreviation: impl AsRef<str>,
        category: impl Into<String>,
    ) -> Self {
        let key = fold_key(abbreviation.as_ref().trim_end_matches('.'));
        self.abbreviations.insert(key, category.into());
        self
    }

    /// Decide whether a lone `.` at `dot` ends the sentence
    ///
    /// `rest` is the text after the terminator run.
    pub fn decide(&self, text: &str, dot: usize, rest: &str) -> BoundaryDecision {
        let word = preceding_word(&text[..dot]);
        if word.is_empty() {
            return BoundaryDecision::Boundary;
        }

        let next_is_capital = rest
            .trim_start()
            .chars()
            .find(|c| c.is_alphanumeric())
            .is_some_and(char::is_uppercase);

        if is_initial(word) {
            return BoundaryDecision::NotBoundary;
        }

        match self.abbreviations.get(&fold_key(word)) {
            Some(category) if category == TITLES => BoundaryDecision::NotBoundary,
            Some(_) if !next_is_capital => BoundaryDecision::NotBoundary,
            _ => BoundaryDecision::Boundary,
        }
    }
}

impl SentenceSplitter for RuleBasedSplitter {
    fn split(&self, text: &str) -> Vec<Range<usize>> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let offset = |i: usize| chars.get(i).map_or(text.len(), |&(pos, _)| pos);

        let mut ranges = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, ch) = chars[i];
            if !is_terminator(ch) {
                i += 1;
                continue;
            }

            let mut j = i;
            while j < chars.len() && is_terminator(chars[j].1) {
                j += 1;
            }
            let lone_dot = ch == '.' && j == i + 1;
            while j < chars.len() && is_closer(chars[j].1) {
                j += 1;
            }

            let at_break = j == chars.len() || chars[j].1.is_whitespace();
            if !at_break {
                i = j;
                continue;
            }

            let decision = if lone_dot {
                self.decide(text, pos, &text[offset(j)..])
            } else {
                BoundaryDecision::Boundary
            };

            if decision == BoundaryDecision::NotBoundary {
                i = j;
                continue;
            }

            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            let end = offset(j);
            ranges.push(start..end);
            start = end;
            i = j;
        }

        if start < text.len() {
            ranges.push(start..text.len());
        }

        ranges
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | ')' | ']' | '}' | '\u{201D}' | '\u{2019}' | '\u{00BB}'
    )
}

/// Last whitespace-delimited word before `text`'s end, without opening punctuation
fn preceding_word(text: &str) -> &str {
    text.split_whitespace()
        .next_back()
        .unwrap_or_default()
        .trim_start_matches(|c: char| !c.is_alphanumeric())
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_uppercase() && c != 'I',
        _ => false,
    }
}
