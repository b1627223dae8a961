//! Pipeline orchestration
//!
//! An [`Analyzer`] runs the stages in a fixed order, feeding each stage the
//! previous stage's text and appending its changes to one log. Analysis is a
//! total function: any string, including the empty one, yields a result.

use crate::config::AnalyzerConfig;
use crate::diff::{diff_pairs, DiffPair};
use crate::error::Error;
use crate::jargon::{JargonFinding, JargonReplacer};
use crate::lexicon::Lexicon;
use crate::normalizer::TokenNormalizer;
use crate::segmenter::{RuleBasedSplitter, Segmenter, SentenceSplitter};
use crate::smoother::PatternSmoother;
use crate::stats::Stats;
use crate::types::{ChangeCategory, ChangeRecord, StageOutput};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Slang, contraction and spelling resolution
    Normalize,
    /// Sentence spacing and capitalization
    Segment,
    /// Grammar pattern fixes
    Smooth,
    /// Jargon simplification
    Jargonize,
    /// Diff and statistics
    Summarize,
}

impl Stage {
    /// Execution order
    pub const ORDER: [Stage; 5] = [
        Stage::Normalize,
        Stage::Segment,
        Stage::Smooth,
        Stage::Jargonize,
        Stage::Summarize,
    ];

    /// Lowercase stage name
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Normalize => "normalize",
            Stage::Segment => "segment",
            Stage::Smooth => "smooth",
            Stage::Jargonize => "jargonize",
            Stage::Summarize => "summarize",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Input text, verbatim
    pub original: String,
    /// Rewritten text
    pub polished: String,
    /// Every change, in stage order then discovery order
    pub changes: Vec<ChangeRecord>,
    /// Summary counts
    pub stats: Stats,
    /// Token diff from `original` to `polished`
    pub diff_pairs: Vec<DiffPair>,
}

impl AnalysisResult {
    /// Whether the pipeline changed anything
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Changes of one category, in log order
    pub fn changes_in(&self, category: ChangeCategory) -> impl Iterator<Item = &ChangeRecord> {
        self.changes.iter().filter(move |c| c.category == category)
    }
}

/// Runs the clarity pipeline over text
#[derive(Clone)]
pub struct Analyzer {
    lexicon: Arc<Lexicon>,
    config: AnalyzerConfig,
    splitter: Arc<dyn SentenceSplitter>,
}

impl Analyzer {
    /// Analyzer over the built-in lexicon with default settings
    pub fn new() -> Self {
        let lexicon = Lexicon::builtin();
        let splitter = Arc::new(RuleBasedSplitter::from_lexicon(&lexicon));
        Self {
            lexicon,
            config: AnalyzerConfig::default(),
            splitter,
        }
    }

    /// Analyzer over the built-in lexicon with custom settings
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, Error> {
        Self::builder().config(config).build()
    }

    /// Start building an analyzer
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    /// Lexicon in use
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Settings in use
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run every stage over `text`
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let mut changes = Vec::new();

        let normalized = self.run_stage(Stage::Normalize, &mut changes, || {
            TokenNormalizer::new(&self.lexicon, &self.config.spelling).normalize(text)
        });
        let segmented = self.run_stage(Stage::Segment, &mut changes, || {
            Segmenter::new(self.splitter.as_ref()).segment(&normalized)
        });
        let smoothed = self.run_stage(Stage::Smooth, &mut changes, || {
            PatternSmoother::new(self.lexicon.grammar_patterns()).smooth(&segmented)
        });
        let polished = self.run_stage(Stage::Jargonize, &mut changes, || {
            JargonReplacer::new(&self.lexicon, self.config.jargon).replace(&smoothed)
        });

        log::debug!("Stage {}: diffing {} change(s)", Stage::Summarize, changes.len());
        let stats = Stats::compute(text, &polished, &changes);
        let diff_pairs = diff_pairs(text, &polished);

        AnalysisResult {
            original: text.to_string(),
            polished,
            changes,
            stats,
            diff_pairs,
        }
    }

    /// Jargon occurrences in `text` without rewriting it
    pub fn detect_jargon(&self, text: &str) -> Vec<JargonFinding> {
        JargonReplacer::new(&self.lexicon, self.config.jargon).detect(text)
    }

    fn run_stage<F>(&self, stage: Stage, changes: &mut Vec<ChangeRecord>, run: F) -> String
    where
        F: FnOnce() -> StageOutput,
    {
        let output = run();
        log::debug!("Stage {}: {} change(s)", stage, output.changes.len());
        changes.extend(output.changes);
        output.text
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("lexicon", &self.lexicon.code())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Analyzer`]
#[derive(Default)]
pub struct AnalyzerBuilder {
    lexicon: Option<Arc<Lexicon>>,
    config: Option<AnalyzerConfig>,
    splitter: Option<Arc<dyn SentenceSplitter>>,
}

impl AnalyzerBuilder {
    /// Use a custom lexicon
    pub fn lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Use custom settings
    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a custom sentence splitter
    pub fn splitter(mut self, splitter: Arc<dyn SentenceSplitter>) -> Self {
        self.splitter = Some(splitter);
        self
    }

    /// Validate the settings and build the analyzer
    ///
    /// Without an explicit splitter, a [`RuleBasedSplitter`] over the
    /// lexicon's abbreviations is used.
    pub fn build(self) -> Result<Analyzer, Error> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let lexicon = self.lexicon.unwrap_or_else(Lexicon::builtin);
        let splitter = self
            .splitter
            .unwrap_or_else(|| Arc::new(RuleBasedSplitter::from_lexicon(&lexicon)));

        Ok(Analyzer {
            lexicon,
            config,
            splitter,
        })
    }
}

/// Analyze text with the built-in lexicon and default settings
pub fn analyze(text: &str) -> AnalysisResult {
    Analyzer::new().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{JargonCategory, JargonEntry};

    #[test]
    fn test_stage_order() {
        let names: Vec<&str> = Stage::ORDER.iter().map(Stage::as_str).collect();
        assert_eq!(
            names,
            vec!["normalize", "segment", "smooth", "jargonize", "summarize"]
        );
    }

    #[test]
    fn test_empty_input() {
        let result = analyze("");
        assert_eq!(result.polished, "");
        assert!(result.changes.is_empty());
        assert!(result.diff_pairs.is_empty());
        assert_eq!(result.stats.words_before, 0);
        assert_eq!(result.stats.words_after, 0);
    }

    #[test]
    fn test_changes_follow_stage_order() {
        let result = analyze("dont worry, we could of used distributed tracing");
        let categories: Vec<ChangeCategory> = result.changes.iter().map(|c| c.category).collect();
        assert_eq!(
            categories,
            vec![
                ChangeCategory::Contraction,
                ChangeCategory::Grammar,
                ChangeCategory::Jargon
            ]
        );
        assert_eq!(
            result.polished,
            "Don't worry, we could have used system tracking"
        );
    }

    #[test]
    fn test_custom_lexicon_and_config() {
        let lexicon = Lexicon::builder("mini", "Mini")
            .jargon(JargonEntry::new("synergy", "teamwork", JargonCategory::Business))
            .words(["more", "please"])
            .build()
            .unwrap();
        let config = AnalyzerConfig::builder().match_case(true).build().unwrap();

        let analyzer = Analyzer::builder()
            .lexicon(Arc::new(lexicon))
            .config(config)
            .build()
            .unwrap();

        let result = analyzer.analyze("synergy please. synergy more");
        assert_eq!(result.polished, "Teamwork please. Teamwork more");
        assert_eq!(result.stats.count(ChangeCategory::Jargon), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalyzerConfig {
            spelling: crate::config::SpellingConfig {
                threshold: 150.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            Analyzer::with_config(config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_detect_jargon() {
        let findings = Analyzer::new().detect_jargon("Our microservices need orchestration.");
        let terms: Vec<&str> = findings.iter().map(|f| f.term.as_str()).collect();
        assert_eq!(terms, vec!["microservices", "orchestration"]);
    }

    #[test]
    fn test_result_serializes() {
        let result = analyze("u r late");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["polished"], "You are late");
        assert_eq!(json["changes"][0]["category"], "slang");
        assert_eq!(json["diff_pairs"][0]["op"], "replace");
    }
}
