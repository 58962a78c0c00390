//! Error types for polyloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while classifying and counting files
#[derive(Error, Debug)]
pub enum PolylocError {
    /// Failed to open or read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A registry lookup with a key the file-type classifier never produces
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// The file has no extension, build-file name or shebang we recognize
    #[error("unrecognized file type: {0}")]
    UnrecognizedFile(PathBuf),

    /// Invalid regular expression (filters or line-comment patterns)
    #[error("invalid regular expression '{pattern}': {message}")]
    InvalidRegex { pattern: String, message: String },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Worker pool could not be built
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl PolylocError {
    pub(crate) fn invalid_regex(pattern: &str, err: regex::Error) -> Self {
        PolylocError::InvalidRegex {
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    }
}
