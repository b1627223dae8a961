//! Sentence segmentation and capitalization
//!
//! Boundary detection sits behind the [`SentenceSplitter`] trait so a smarter
//! splitter can replace [`RuleBasedSplitter`] without touching the pipeline.
//! The segmenter itself only fixes spacing and capitalization, so it never
//! produces change records.

mod rules;

pub use rules::{BoundaryDecision, RuleBasedSplitter};

use crate::text::capitalize_first;
use crate::types::StageOutput;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+([,.!?;:]+)(\s|$)").expect("space-before-punctuation pattern is valid")
});

/// Sentence boundary detection
pub trait SentenceSplitter: Send + Sync {
    /// Byte ranges of each sentence
    ///
    /// Ranges are in order and cover the whole input with no gaps or overlaps.
    fn split(&self, text: &str) -> Vec<Range<usize>>;
}

/// Splits text into sentences and normalizes their spacing and capitalization
pub struct Segmenter<'a> {
    splitter: &'a dyn SentenceSplitter,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter over a splitter
    pub fn new(splitter: &'a dyn SentenceSplitter) -> Self {
        Self { splitter }
    }

    /// Cleaned, capitalized sentences
    pub fn sentences(&self, text: &str) -> Vec<String> {
        let cleaned = SPACE_BEFORE_PUNCTUATION.replace_all(text, "$1$2");
        self.splitter
            .split(&cleaned)
            .into_iter()
            .map(|range| cleaned[range].trim())
            .filter(|sentence| !sentence.is_empty())
            .map(capitalize_first)
            .collect()
    }

    /// Rejoin the sentences of `text` with single spaces
    pub fn segment(&self, text: &str) -> StageOutput {
        let sentences = self.sentences(text);
        log::debug!("Segmented text into {} sentence(s)", sentences.len());
        StageOutput::unchanged(sentences.join(" "))
    }
}
