//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordsplit_core::TokenSpan;

/// Markdown formatter - outputs tokens as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    token_count: usize,
    source_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            token_count: 0,
            source_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        if self.source_count > 0 {
            writeln!(self.writer)?;
        }
        self.source_count += 1;
        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_token(&mut self, token: &TokenSpan) -> Result<()> {
        self.token_count += 1;
        writeln!(self.writer, "{}. {}", self.token_count, token.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total tokens: {}*", self.token_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
