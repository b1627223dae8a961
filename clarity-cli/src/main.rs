use clap::Parser;
use clarity_cli::commands::Commands;

/// Rewrite prose into clearer text and report what changed
#[derive(Debug, Parser)]
#[command(name = "clarity", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
