//! Runner error types

use thiserror::Error;

/// Runner error
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The runner process could not be started or its scratch files could
    /// not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The runner process did not finish within the configured timeout
    #[error("Pipeline run timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// Not one of the supported runner names
    #[error("Unknown runner: {name}")]
    UnknownRunner { name: String },
}

/// Result type for runner operations
pub type Result<T> = std::result::Result<T, RunnerError>;
