//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use clarity_core::Lexicon;

pub mod analyze;
pub mod explain;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Polish text and report every change
    Analyze(analyze::AnalyzeArgs),

    /// Explain jargon terms or find jargon in text
    Explain(explain::ExplainArgs),

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Write a lexicon template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in jargon terms and their replacements
    Jargon,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Explain(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Jargon => {
                use crate::output::{OutputFormatter, TextFormatter};

                let lexicon = Lexicon::builtin();
                let entries = lexicon.jargon_entries();
                println!("Jargon terms ({}):", entries.len());
                let mut formatter = TextFormatter::stdout();
                formatter.format_entries(&entries)?;
                formatter.finish()
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text - Polished text with changes, statistics and diff");
                println!("  json - Full analysis result as JSON");
                Ok(())
            }
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization in the same process is a no-op
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
