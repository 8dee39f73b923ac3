//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::path::Path;
use wordsplit_core::{Error, Input};

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        match Input::from_file(path).into_text() {
            Ok(text) => Ok(text),
            Err(Error::InvalidUtf8 { position }) => Err(CliError::InvalidEncoding {
                path: path.display().to_string(),
                position,
            }
            .into()),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to read file: {}", path.display()))
            }
        }
    }

    /// Read all of standard input as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        Input::from_reader(std::io::stdin())
            .into_text()
            .context("Failed to read standard input")
    }
}
