//! Error types for the documentation analyzer.
//!
//! All errors in the system are represented by the [`Error`] enum.
//! This ensures composable error handling across crates.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// The core error type for all docgraph operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Document not found in the store
    #[error("Document not found: {path}")]
    DocumentNotFound { path: String },

    /// Invalid scan configuration (bad root, empty extension, etc.)
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// Document content could not be parsed
    #[error("Parse error: {reason}")]
    ParseError { reason: String },

    /// A repair rewrite could not be applied
    #[error("Rewrite failed for {path}: {reason}")]
    RewriteError { path: PathBuf, reason: String },

    /// Generic unclassified error
    #[error("Error: {0}")]
    Other(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an IO error
    pub fn io(err: io::Error) -> Self {
        Error::Io(err)
    }

    /// Create a document not found error
    pub fn document_not_found(path: impl Into<String>) -> Self {
        Error::DocumentNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create a parse error
    pub fn parse_error(reason: impl Into<String>) -> Self {
        Error::ParseError {
            reason: reason.into(),
        }
    }

    /// Create a rewrite error
    pub fn rewrite_error(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::RewriteError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}
