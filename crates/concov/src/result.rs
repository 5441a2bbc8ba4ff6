//! Result and error types for Concov.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for Concov operations
pub type CoverageResult<T> = Result<T, CoverageError>;

/// Errors that can occur while reading, validating or writing a store
#[derive(Debug, Error)]
pub enum CoverageError {
    /// Persistence file does not exist
    #[error("Coverage file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Blob does not start with the store magic
    #[error("Not a coverage store (bad magic)")]
    BadMagic,

    /// Blob was written by an incompatible format version
    #[error("Unsupported coverage format version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the header
        found: u16,
        /// Version this build reads
        expected: u16,
    },

    /// Blob is shorter than its header
    #[error("Coverage file truncated: {len} bytes")]
    Truncated {
        /// Length of the blob
        len: usize,
    },

    /// Payload digest does not match the header
    #[error("Coverage payload checksum mismatch")]
    ChecksumMismatch,

    /// Payload could not be decoded
    #[error("Failed to decode coverage payload: {message}")]
    Decode {
        /// Error message
        message: String,
    },

    /// Store could not be encoded
    #[error("Failed to encode coverage payload: {message}")]
    Encode {
        /// Error message
        message: String,
    },

    /// Decoded store breaks an accounting invariant
    #[error("Corrupt coverage store: {message}")]
    Corrupt {
        /// Error message
        message: String,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoverageError {
    /// Create a corrupt-store error
    #[must_use]
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this is the plain "no file yet" case
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
