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
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        std::fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!("Use it with:");
        println!("   wordsplit tokenize -c {} -i input.txt", self.output.display());

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r#"# wordsplit configuration
# Command-line flags take precedence over these values.

[tokenizer]
# "unicode": letters, marks and numbers of any script
# "ascii":   legacy [A-Za-z0-9] only
classifier = "unicode"

# Lowercase each token after splitting
lowercase = false

[tokenizer.normalize]
# Normalize text before splitting: NFD, then the steps below, then
# collapse whitespace. Offsets in JSON output refer to the normalized text.
enabled = false

# Drop nonspacing marks (café -> cafe)
strip_marks = true

# Drop Hebrew points and cantillation (U+0591-U+05C7)
strip_niqqud = true

# Read @ $ 0 3 1 as a s o e i inside words (h3ll0 -> hello)
leet = true

[output]
# text, json or markdown
default_format = "text"

# Indent JSON output
pretty_json = true
"#
    }
}
