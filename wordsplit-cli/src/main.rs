//! wordsplit: split text into words in any script

use clap::Parser;
use wordsplit_cli::commands::Commands;
use wordsplit_cli::CliResult;

/// Unicode-aware word tokenization
#[derive(Debug, Parser)]
#[command(name = "wordsplit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
