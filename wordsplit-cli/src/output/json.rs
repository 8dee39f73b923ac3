//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use wordsplit_core::TokenSpan;

/// JSON formatter - outputs tokens as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    tokens: Vec<TokenData>,
    source: Option<String>,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenData {
    /// The token text
    pub text: String,
    /// Starting byte offset in the original text
    pub offset: usize,
    /// Starting character offset in the original text
    pub char_offset: usize,
    /// Length of the token in bytes
    pub length: usize,
    /// File the token came from, when reading files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tokens: Vec::new(),
            source: None,
            pretty: true,
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        self.source = Some(name.to_string());
        Ok(())
    }

    fn format_token(&mut self, token: &TokenSpan) -> Result<()> {
        self.tokens.push(TokenData {
            text: token.text.clone(),
            offset: token.start,
            char_offset: token.char_start,
            length: token.len(),
            source: self.source.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.tokens)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.tokens)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
