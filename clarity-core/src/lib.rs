//! Text-clarity pipeline
//!
//! This crate rewrites a block of prose into a clearer version and reports
//! what it changed. The work is split into small, ordered passes that each
//! consume the previous pass's text:
//!
//! 1. **Normalize**: per-token slang, contraction and spelling correction
//! 2. **Segment**: sentence splitting, spacing cleanup, capitalization
//! 3. **Smooth**: phrase-level grammar patterns
//! 4. **Jargonize**: longest-first jargon simplification
//! 5. **Summarize**: token diff and change statistics
//!
//! All dictionaries live in an immutable [`Lexicon`] that is loaded once and
//! shared read-only between any number of [`Analyzer`]s.
//!
//! # Example
//!
//! ```rust
//! use clarity_core::{analyze, ChangeCategory};
//!
//! let result = analyze("I should of called");
//! assert_eq!(result.polished, "I should have called");
//! assert_eq!(result.stats.count(ChangeCategory::Grammar), 1);
//! ```

pub mod config;
pub mod diff;
pub mod error;
pub mod fuzzy;
pub mod jargon;
pub mod lexicon;
pub mod normalizer;
pub mod pipeline;
pub mod segmenter;
pub mod smoother;
pub mod stats;
pub mod text;
pub mod types;

pub use config::{AnalyzerConfig, AnalyzerConfigBuilder, JargonPolicy, SpellingConfig};
pub use diff::{DiffOp, DiffPair};
pub use error::{ConfigError, Error, LexiconError, Result};
pub use jargon::{JargonFinding, JargonReplacer};
pub use lexicon::{GrammarPattern, JargonCategory, JargonEntry, Lexicon, LexiconBuilder};
pub use normalizer::{Exemption, TokenNormalizer};
pub use pipeline::{analyze, AnalysisResult, Analyzer, AnalyzerBuilder, Stage};
pub use segmenter::{RuleBasedSplitter, Segmenter, SentenceSplitter};
pub use smoother::PatternSmoother;
pub use stats::Stats;
pub use types::{ChangeCategory, ChangeRecord, StageOutput};
