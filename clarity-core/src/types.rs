//! Change records shared by every pipeline stage

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of substitution a stage performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCategory {
    /// Fuzzy spelling correction
    Spelling,
    /// Slang expansion
    Slang,
    /// Contraction repair
    Contraction,
    /// Phrase-level grammar pattern
    Grammar,
    /// Jargon simplification
    Jargon,
}

impl ChangeCategory {
    /// Every category, in pipeline order
    pub const ALL: [ChangeCategory; 5] = [
        ChangeCategory::Slang,
        ChangeCategory::Contraction,
        ChangeCategory::Spelling,
        ChangeCategory::Grammar,
        ChangeCategory::Jargon,
    ];

    /// Lowercase name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeCategory::Spelling => "spelling",
            ChangeCategory::Slang => "slang",
            ChangeCategory::Contraction => "contraction",
            ChangeCategory::Grammar => "grammar",
            ChangeCategory::Jargon => "jargon",
        }
    }
}

impl fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Span as it appeared in the text when the stage ran
    pub original: String,
    /// Text inserted in its place
    pub replacement: String,
    /// Kind of change
    pub category: ChangeCategory,
}

impl ChangeRecord {
    /// Create a new change record
    pub fn new(
        original: impl Into<String>,
        replacement: impl Into<String>,
        category: ChangeCategory,
    ) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
            category,
        }
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] '{}' -> '{}'",
            self.category, self.original, self.replacement
        )
    }
}

/// Text produced by a stage together with the changes it made
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageOutput {
    /// Rewritten text
    pub text: String,
    /// Changes in discovery order
    pub changes: Vec<ChangeRecord>,
}

impl StageOutput {
    /// Output of a stage that changed nothing
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            changes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(ChangeCategory::Spelling.as_str(), "spelling");
        assert_eq!(ChangeCategory::Jargon.to_string(), "jargon");
        assert_eq!(ChangeCategory::ALL.len(), 5);
    }

    #[test]
    fn test_change_record_display() {
        let record = ChangeRecord::new("dont", "don't", ChangeCategory::Contraction);
        assert_eq!(record.to_string(), "[contraction] 'dont' -> 'don't'");
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&ChangeCategory::Grammar).unwrap();
        assert_eq!(json, "\"grammar\"");
    }
}
