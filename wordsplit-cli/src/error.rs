//! Error handling for the CLI application

use thiserror::Error;

/// Failures raised by the command line front end
///
/// Core errors pass through `anyhow` unchanged except for invalid UTF-8,
/// which is reported against the file it came from.
#[derive(Debug, Error)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// `default_format` names no known output format
    #[error("Configuration error: unknown output format '{0}' (expected text, json or markdown)")]
    UnknownOutputFormat(String),

    /// Input file is not valid UTF-8
    #[error("{path}: invalid UTF-8 at byte position {position}")]
    InvalidEncoding {
        /// File being read
        path: String,
        /// Byte offset of the first invalid sequence
        position: usize,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn test_unknown_output_format_display() {
        let error = CliError::UnknownOutputFormat("yaml".to_string());
        assert!(error.to_string().contains("unknown output format 'yaml'"));
    }

    #[test]
    fn test_invalid_encoding_names_file_and_position() {
        let error = CliError::InvalidEncoding {
            path: "notes/שלום.txt".to_string(),
            position: 17,
        };
        assert_eq!(
            error.to_string(),
            "notes/שלום.txt: invalid UTF-8 at byte position 17"
        );
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::InvalidPattern("[bad".to_string()).into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(pattern)) if pattern == "[bad"
        ));
    }
}
