//! Change statistics

use crate::text::word_count;
use crate::types::{ChangeCategory, ChangeRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary of an analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Whitespace word count of the original text
    pub words_before: usize,
    /// Whitespace word count of the polished text
    pub words_after: usize,
    /// Number of change records
    pub total_changes: usize,
    /// Change count per category, for categories that occurred
    pub by_category: BTreeMap<ChangeCategory, usize>,
}

impl Stats {
    /// Fold the change log and word counts into statistics
    pub fn compute(original: &str, polished: &str, changes: &[ChangeRecord]) -> Self {
        let mut by_category = BTreeMap::new();
        for change in changes {
            *by_category.entry(change.category).or_insert(0) += 1;
        }

        Self {
            words_before: word_count(original),
            words_after: word_count(polished),
            total_changes: changes.len(),
            by_category,
        }
    }

    /// Number of changes in one category
    pub fn count(&self, category: ChangeCategory) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}
