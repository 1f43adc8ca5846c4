//! Catalog error types

use thiserror::Error;

/// Catalog error
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Registry document failed to parse
    #[error("Failed to parse transform registry: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Registry document declared no transforms
    #[error("Transform registry contains no transforms")]
    EmptyRegistry,
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
