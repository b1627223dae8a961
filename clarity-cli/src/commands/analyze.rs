//! Analyze command implementation

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::lexicon_source::LexiconSource;
use crate::output::{create_formatter, create_writer, OutputFormat};
use anyhow::Result;
use clap::Args;
use clarity_core::Analyzer;
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "CLARITY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Lexicon TOML replacing the built-in one
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Extra word-list files to treat as known words
    #[arg(long = "words", value_name = "FILE")]
    pub words: Vec<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);

        log::info!("Starting analysis");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let analyzer = self.build_analyzer(&config)?;
        let format = self.resolve_format(&config)?;

        let text = FileReader::read_input(self.input.as_deref())?;
        let result = analyzer.analyze(&text);
        log::info!(
            "Analysis complete: {} change(s), {} -> {} words",
            result.stats.total_changes,
            result.stats.words_before,
            result.stats.words_after
        );

        let writer = create_writer(self.output.as_deref())?;
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        formatter.format_analysis(&result)?;
        formatter.finish()
    }

    /// Build an analyzer from the configuration, with flags taking precedence
    fn build_analyzer(&self, config: &CliConfig) -> Result<Analyzer> {
        let lexicon_path = self.lexicon.as_deref().or(config.lexicon.path.as_deref());
        let mut extra_words = config.lexicon.extra_words.clone();
        extra_words.extend(self.words.iter().cloned());

        let lexicon = LexiconSource::from_path(lexicon_path).load(&extra_words)?;

        Analyzer::builder()
            .lexicon(lexicon)
            .config(config.analysis.clone())
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::parse(&config.output.default_format).ok_or_else(|| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }
}
