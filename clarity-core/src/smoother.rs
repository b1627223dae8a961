//! Phrase-level grammar smoothing

use crate::lexicon::GrammarPattern;
use crate::text::carry_leading_case;
use crate::types::{ChangeCategory, ChangeRecord, StageOutput};
use regex::Captures;

/// Applies the grammar pattern table in order
///
/// Each pattern runs as a single left-to-right scan over the output of the
/// previous pattern, so text a pattern inserts is never rescanned by that
/// same pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternSmoother<'a> {
    patterns: &'a [GrammarPattern],
}

impl<'a> PatternSmoother<'a> {
    /// Create a smoother over an ordered pattern table
    pub fn new(patterns: &'a [GrammarPattern]) -> Self {
        Self { patterns }
    }

    /// Apply every pattern, recording one change per occurrence
    pub fn smooth(&self, text: &str) -> StageOutput {
        let mut current = text.to_string();
        let mut changes = Vec::new();

        for pattern in self.patterns {
            if !pattern.regex().is_match(&current) {
                continue;
            }

            let replaced = pattern
                .regex()
                .replace_all(&current, |caps: &Captures<'_>| {
                    let matched = &caps[0];
                    let replacement = carry_leading_case(matched, pattern.replacement());
                    log::debug!("grammar '{}' -> '{}'", matched, replacement);
                    changes.push(ChangeRecord::new(
                        matched,
                        replacement.clone(),
                        ChangeCategory::Grammar,
                    ));
                    replacement
                })
                .into_owned();
            current = replaced;
        }

        StageOutput {
            text: current,
            changes,
        }
    }
}
