//! Error types for the graph editing core

use thiserror::Error;

/// Graph editing error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A node id may not be renamed to the empty string
    #[error("Node id cannot be empty")]
    EmptyNodeId,

    /// Referenced node does not exist
    #[error("Node not found: {id}")]
    NodeNotFound { id: String },

    /// Node id is already taken
    #[error("Node id already in use: {id}")]
    DuplicateNode { id: String },

    /// An edge between the two nodes already exists (in either direction)
    #[error("Edge between '{source_id}' and '{target}' already exists")]
    DuplicateEdge { source_id: String, target: String },

    /// Edges must connect two distinct nodes
    #[error("Cannot connect node '{id}' to itself")]
    SelfLoop { id: String },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
