//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Parser error
    #[error("Parser error: {0}")]
    Parse(#[from] beamforge_parser::ParseError),

    /// Graph editing error
    #[error("Graph error: {0}")]
    Core(#[from] beamforge_core::CoreError),

    /// Catalog error
    #[error("Catalog error: {0}")]
    Catalog(#[from] beamforge_catalog::CatalogError),

    /// Runner error
    #[error("Runner error: {0}")]
    Runner(#[from] beamforge_runner::RunnerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// User-supplied configuration text did not parse as a YAML mapping
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_display() {
        let error = SdkError::ConfigParse("not a mapping".to_string());
        assert!(error.to_string().contains("Configuration parse error"));
        assert!(error.to_string().contains("not a mapping"));
    }

    #[test]
    fn test_core_error_conversion() {
        let error: SdkError = beamforge_core::CoreError::EmptyNodeId.into();
        assert!(error.to_string().contains("Graph error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "pipeline.yaml");
        let error: SdkError = io_error.into();
        assert!(error.to_string().contains("I/O error"));
        assert!(error.to_string().contains("pipeline.yaml"));
    }
}
