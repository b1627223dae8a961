//! Output formatting module

use anyhow::{Context, Result};
use clarity_core::{AnalysisResult, JargonEntry, JargonFinding};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format one analysis result
    fn format_analysis(&mut self, result: &AnalysisResult) -> Result<()>;

    /// Format jargon findings and the terms that had no entry
    fn format_findings(&mut self, findings: &[JargonFinding], unknown: &[String]) -> Result<()>;

    /// Format lexicon jargon entries
    fn format_entries(&mut self, entries: &[&JargonEntry]) -> Result<()>;

    /// Flush buffered output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Polished text followed by changes, statistics and diff
    Text,
    /// The full result as JSON
    Json,
}

impl OutputFormat {
    /// Parse a format name from a configuration file
    pub fn parse(name: &str) -> Option<Self> {
        <Self as clap::ValueEnum>::from_str(name, true).ok()
    }
}

/// Writer for an output file, or stdout when no path is given
pub fn create_writer(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Formatter for a format over a writer
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}
