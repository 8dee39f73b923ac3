//! Error types
//!
//! Tokenization itself is total and never fails. The only failures in this
//! crate come from decoding raw input into text and from parsing names.

use thiserror::Error;

/// Error type for input decoding and name parsing
#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure while reading a file or reader
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes are not valid UTF-8
    #[error("invalid UTF-8 at byte position {position}")]
    InvalidUtf8 {
        /// Byte offset of the first invalid sequence
        position: usize,
    },

    /// Classifier name not recognized
    #[error("unknown classifier: {0}")]
    UnknownClassifier(String),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::InvalidUtf8 {
            position: err.utf8_error().valid_up_to(),
        }
    }
}

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;
