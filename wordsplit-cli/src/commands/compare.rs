//! Compare command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;
use wordsplit_core::{compare, Comparison, DEMO_INPUTS};

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Texts to compare (default: built-in multilingual samples)
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Emit JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Compare every input and write the result
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let comparisons: Vec<Comparison> = if self.texts.is_empty() {
            DEMO_INPUTS.iter().map(|text| compare(text)).collect()
        } else {
            self.texts.iter().map(|text| compare(text)).collect()
        };

        if self.json {
            serde_json::to_writer_pretty(&mut *writer, &comparisons)?;
            writeln!(writer)?;
            return Ok(());
        }

        writeln!(writer, "ASCII-only vs Unicode-aware tokenization")?;
        writeln!(writer, "{}", "=".repeat(40))?;
        writeln!(writer)?;

        let mut improved = 0;
        for comparison in &comparisons {
            writeln!(writer, "Input: '{}'", comparison.input)?;
            writeln!(writer, "  ASCII-only:    {:?}", comparison.ascii)?;
            writeln!(writer, "  Unicode-aware: {:?}", comparison.unicode)?;
            if comparison.differs() {
                improved += 1;
                let lost = comparison.lost_tokens();
                if lost.is_empty() {
                    writeln!(writer, "  Differs: token boundaries changed")?;
                } else {
                    writeln!(writer, "  Preserved by Unicode policy: {}", lost.join(", "))?;
                }
            } else {
                writeln!(writer, "  Same result")?;
            }
            writeln!(writer)?;
        }

        writeln!(
            writer,
            "{improved}/{} inputs tokenized differently",
            comparisons.len()
        )?;
        Ok(())
    }
}
