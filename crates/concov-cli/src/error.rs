//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Malformed trace line
    #[error("Trace error at line {line}: {message}")]
    Trace {
        /// 1-based line number
        line: usize,
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Coverage library error
    #[error("Coverage error: {0}")]
    Coverage(#[from] concov::CoverageError),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a trace error
    #[must_use]
    pub fn trace(line: usize, message: impl Into<String>) -> Self {
        Self::Trace {
            line,
            message: message.into(),
        }
    }
}
