//! Parser error types

use thiserror::Error;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// YAML syntax error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Valid YAML, but the document has no `pipeline` section
    #[error("No pipeline section found in YAML")]
    MissingPipeline,

    /// Graph construction error
    #[error("Graph construction error: {0}")]
    Graph(#[from] beamforge_core::CoreError),
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
