//! Explain command implementation

use super::init_logging;
use crate::input::FileReader;
use crate::lexicon_source::LexiconSource;
use crate::output::{create_formatter, create_writer, OutputFormat};
use anyhow::Result;
use clap::Args;
use clarity_core::{JargonFinding, JargonPolicy, JargonReplacer, Lexicon};
use std::collections::HashSet;
use std::path::PathBuf;

/// Arguments for the explain command
#[derive(Debug, Args)]
pub struct ExplainArgs {
    /// Terms to explain; without terms, text is scanned for jargon
    #[arg(value_name = "TERM", conflicts_with = "input")]
    pub terms: Vec<String>,

    /// Text file to scan (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Lexicon TOML replacing the built-in one
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ExplainArgs {
    /// Execute the explain command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);

        let lexicon = LexiconSource::from_path(self.lexicon.as_deref()).load(&[])?;

        let (findings, unknown) = if self.terms.is_empty() {
            let text = FileReader::read_input(self.input.as_deref())?;
            (scan_text(&lexicon, &text), Vec::new())
        } else {
            explain_terms(&lexicon, &self.terms)
        };
        log::info!(
            "{} jargon finding(s), {} unknown term(s)",
            findings.len(),
            unknown.len()
        );

        let writer = create_writer(None)?;
        let mut formatter = create_formatter(self.format, writer, true);
        formatter.format_findings(&findings, &unknown)?;
        formatter.finish()
    }
}

/// Look up each term, splitting them into findings and unknown terms
pub fn explain_terms(lexicon: &Lexicon, terms: &[String]) -> (Vec<JargonFinding>, Vec<String>) {
    let mut findings = Vec::new();
    let mut unknown = Vec::new();

    for term in terms {
        match lexicon.explain_term(term) {
            Some(entry) => findings.push(JargonFinding {
                found: term.clone(),
                term: entry.term.clone(),
                replacement: entry.replacement.clone(),
                category: entry.category,
                explanation: entry.explanation.clone(),
            }),
            None => unknown.push(term.clone()),
        }
    }

    (findings, unknown)
}

/// Distinct jargon terms in text, in order of first occurrence
pub fn scan_text(lexicon: &Lexicon, text: &str) -> Vec<JargonFinding> {
    let mut seen = HashSet::new();
    JargonReplacer::new(lexicon, JargonPolicy::default())
        .detect(text)
        .into_iter()
        .filter(|finding| seen.insert(finding.term.to_lowercase()))
        .collect()
}
