//! Error types for the goanno library

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `anyhow::Error`
pub type Result<T> = anyhow::Result<T>;

/// Errors raised while walking and rewriting files
#[derive(Debug, Error)]
pub enum WalkError {
    /// The configured root directory does not exist. Fatal: the run
    /// aborts before any file is processed.
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// Reading or writing an individual file failed. Recovered at file
    /// granularity: the walker records it and continues.
    #[error("failed to process {path}: {source}")]
    FileProcessing {
        /// Path of the file that could not be processed
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },
}
