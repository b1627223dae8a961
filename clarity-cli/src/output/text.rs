//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use clarity_core::{AnalysisResult, DiffOp, JargonEntry, JargonFinding};
use std::io::{self, Write};

/// Human-readable report formatter
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_analysis(&mut self, result: &AnalysisResult) -> Result<()> {
        let w = &mut self.writer;

        writeln!(w, "{}", result.polished)?;
        writeln!(w)?;

        writeln!(w, "Changes ({}):", result.changes.len())?;
        if result.changes.is_empty() {
            writeln!(w, "  none")?;
        }
        for change in &result.changes {
            writeln!(w, "  {change}")?;
        }
        writeln!(w)?;

        let stats = &result.stats;
        writeln!(w, "Statistics:")?;
        writeln!(w, "  Words before:  {}", stats.words_before)?;
        writeln!(w, "  Words after:   {}", stats.words_after)?;
        writeln!(w, "  Total changes: {}", stats.total_changes)?;
        for (category, count) in &stats.by_category {
            writeln!(w, "    {category}: {count}")?;
        }

        let edits: Vec<_> = result.diff_pairs.iter().filter(|p| p.is_change()).collect();
        if !edits.is_empty() {
            writeln!(w)?;
            writeln!(w, "Diff:")?;
            for pair in edits {
                match pair.op {
                    DiffOp::Replace => {
                        writeln!(w, "  ~ '{}' -> '{}'", pair.original, pair.polished)?
                    }
                    DiffOp::Delete => writeln!(w, "  - '{}'", pair.original)?,
                    DiffOp::Insert => writeln!(w, "  + '{}'", pair.polished)?,
                    DiffOp::Equal => {}
                }
            }
        }

        Ok(())
    }

    fn format_findings(&mut self, findings: &[JargonFinding], unknown: &[String]) -> Result<()> {
        if findings.is_empty() && unknown.is_empty() {
            writeln!(self.writer, "No jargon found.")?;
        }

        for finding in findings {
            writeln!(
                self.writer,
                "{} -> {} [{}]",
                finding.found, finding.replacement, finding.category
            )?;
            if let Some(explanation) = &finding.explanation {
                writeln!(self.writer, "  {explanation}")?;
            }
        }

        for term in unknown {
            writeln!(self.writer, "{term}: no simpler term available")?;
        }

        Ok(())
    }

    fn format_entries(&mut self, entries: &[&JargonEntry]) -> Result<()> {
        for entry in entries {
            writeln!(
                self.writer,
                "  {:<28} {:<24} {}",
                entry.term, entry.replacement, entry.category
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_core::analyze;

    fn render(result: &AnalysisResult) -> String {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_analysis(result).unwrap();
        formatter.finish().unwrap();
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_analysis_report() {
        let output = render(&analyze("dont forget"));

        assert!(output.starts_with("Don't forget\n"));
        assert!(output.contains("Changes (1):"));
        assert!(output.contains("[contraction] 'dont' -> 'don't'"));
        assert!(output.contains("Total changes: 1"));
        assert!(output.contains("contraction: 1"));
        assert!(output.contains("~ 'dont' -> 'Don't'"));
    }

    #[test]
    fn test_clean_report_has_no_diff() {
        let output = render(&analyze("The dog sat."));
        assert!(output.contains("Changes (0):\n  none"));
        assert!(!output.contains("Diff:"));
    }

    #[test]
    fn test_findings() {
        let finding = JargonFinding {
            found: "Orchestration".to_string(),
            term: "orchestration".to_string(),
            replacement: "coordination".to_string(),
            category: clarity_core::JargonCategory::Architecture,
            explanation: Some("Coordinating tasks.".to_string()),
        };

        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .format_findings(&[finding], &["blorp".to_string()])
            .unwrap();
        let output = String::from_utf8(formatter.into_inner()).unwrap();

        assert!(output.contains("Orchestration -> coordination [architecture]"));
        assert!(output.contains("  Coordinating tasks."));
        assert!(output.contains("blorp: no simpler term available"));
    }

    #[test]
    fn test_no_findings() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_findings(&[], &[]).unwrap();
        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output, "No jargon found.\n");
    }
}
