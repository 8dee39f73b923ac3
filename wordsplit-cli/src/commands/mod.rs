//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::io::Write;
use wordsplit_core::ClassifierKind;

use crate::output::OutputFormat;

pub mod compare;
pub mod generate_config;
pub mod tokenize;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into words
    Tokenize(tokenize::TokenizeArgs),

    /// Show ASCII-only and Unicode-aware tokens side by side
    Compare(compare::CompareArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tokenize(args) => args.execute(),
            Commands::Compare(args) => args.execute(),
            Commands::List { subcommand } => subcommand.write_to(&mut std::io::stdout().lock()),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available character classifiers
    Classifiers,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Write the listing
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            ListCommands::Classifiers => {
                writeln!(writer, "Available classifiers:")?;
                for kind in ClassifierKind::ALL {
                    writeln!(writer, "  {:<10} {}", kind.as_str(), kind.description())?;
                }
            }
            ListCommands::Formats => {
                writeln!(writer, "Available output formats:")?;
                for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
                    let (name, help) = match format {
                        OutputFormat::Text => ("text", "one token per line"),
                        OutputFormat::Json => ("json", "array of tokens with offsets"),
                        OutputFormat::Markdown => ("markdown", "numbered list with total"),
                    };
                    writeln!(writer, "  {name:<10} {help}")?;
                }
            }
        }
        Ok(())
    }
}
