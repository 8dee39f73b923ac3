//! Output formatting module

use anyhow::Result;
use std::io::Write;
use wordsplit_core::TokenSpan;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Called before the tokens of each input source
    fn begin_source(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }

    /// Format and output a single token
    fn format_token(&mut self, token: &TokenSpan) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Boxed writer accepted by every formatter
pub type BoxedWriter = Box<dyn Write + Send + Sync>;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one token per line
    Text,
    /// JSON array of tokens with offsets
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Create the formatter for this format
    pub fn formatter(self, writer: BoxedWriter, pretty_json: bool) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}
