//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Code for the new lexicon
    #[arg(long, value_name = "CODE", default_value = "custom")]
    pub code: String,

    /// Write the complete built-in English lexicon instead of a short template
    #[arg(long)]
    pub full: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating lexicon template...");
        println!("  Output file: {}", self.output.display());

        let template = if self.full {
            clarity_core::lexicon::builtin_source().to_string()
        } else {
            self.generate_template()
        };

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the lexicon file to add your own terms");
        println!("2. Validate your lexicon:");
        println!("   clarity validate --lexicon {}", self.output.display());
        println!("3. Use it for analysis:");
        println!(
            "   clarity analyze -i input.txt --lexicon {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template lexicon content
    fn generate_template(&self) -> String {
        format!(
            r#"# Lexicon for {code}

[metadata]
code = "{code}"
name = "Custom Lexicon"

# Informal shorthand and its standard written form
[slang]
u = "you"
thx = "thanks"

# Contractions written without an apostrophe
[contractions]
dont = "don't"
cant = "can't"

# Phrase-level grammar fixes, applied top to bottom.
# Patterns are case-insensitive regular expressions anchored on word boundaries.
[[grammar]]
pattern = "could of"
replacement = "could have"

[[grammar]]
pattern = "in order to"
replacement = "to"

# Jargon and its plain-language alternative.
# category: architecture, operations, observability, performance, business or general
[[jargon]]
term = "orchestration"
replacement = "coordination"
category = "architecture"
explanation = "It just means coordinating tasks or services."

[[jargon]]
term = "circle back"
replacement = "follow up"
category = "business"

# Technical terms that must never be spell-corrected
[whitelist]
terms = ["kubernetes", "orchestration"]

# Abbreviations that end in a dot without ending the sentence.
# "titles" never end a sentence; other categories end one only before a capital.
[abbreviations]
titles = ["Dr", "Mr", "Mrs", "Ms", "Prof"]
common = ["etc", "vs", "e.g", "i.e"]

# Known words for the spelling pass
[words]
# Merge the built-in English word list
include_builtin = true
list = ["okr", "roadmap"]
"#,
            code = self.code
        )
    }
}
