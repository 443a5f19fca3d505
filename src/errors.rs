//! Defines application-specific error types.
//!
//! This module provides the `Error` enum for the hard-failure channel: problems
//! that stop a single file from being processed at all (it is too large, it
//! cannot be read) or that stop a run from starting (bad configuration).
//!
//! Grammar problems in structured files are *not* errors. They are recorded in
//! the `AnalysisResult` as data so that a page can still be rendered.

use thiserror::Error;

/// A specialized `Result` type for `docpage` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Application-specific errors used throughout `docpage`.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The file is larger than the configured maximum and was not read.
    #[error("File size ({size}) exceeds maximum allowed size ({limit}): {path}")]
    ResourceLimitExceeded {
        /// The path of the oversized file.
        path: String,
        /// Human-readable size of the file.
        size: String,
        /// Human-readable configured limit.
        limit: String,
    },

    // --- Configuration Errors ---
    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// No input files were left after discovery and exclusion.
    #[error("No files found to process.")]
    NoFilesFound,
}

/// Errors raised while validating a `ConfigBuilder`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An option was given a value outside its allowed range or format.
    #[error("invalid value for {option}: {reason}")]
    InvalidValue {
        /// The offending option, as spelled on the command line.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// Two options were given that cannot be used together.
    #[error("{option1} cannot be used together with {option2}")]
    Conflict {
        /// First conflicting option.
        option1: String,
        /// Second conflicting option.
        option2: String,
    },
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
