//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use clarity_core::{AnalysisResult, JargonEntry, JargonFinding};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - serializes each report as one JSON document
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

/// Report shape for jargon explanations
#[derive(Debug, Serialize)]
pub struct FindingsReport<'a> {
    /// Terms with a simpler alternative
    pub findings: &'a [JargonFinding],
    /// Terms with no lexicon entry
    pub unknown: &'a [String],
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    /// Consume the formatter and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_analysis(&mut self, result: &AnalysisResult) -> Result<()> {
        self.write_value(result)
    }

    fn format_findings(&mut self, findings: &[JargonFinding], unknown: &[String]) -> Result<()> {
        self.write_value(&FindingsReport { findings, unknown })
    }

    fn format_entries(&mut self, entries: &[&JargonEntry]) -> Result<()> {
        self.write_value(entries)
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
