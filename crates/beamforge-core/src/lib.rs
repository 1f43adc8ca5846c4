//! BeamForge Core - Graph model for Beam YAML pipeline editing
//!
//! This crate provides the in-memory representation of a pipeline under
//! edit: transforms as nodes, data-flow dependencies as directed edges,
//! and the editing operations (add, delete, rename, retype, reconfigure)
//! that keep the graph consistent between a parsed YAML document and the
//! document regenerated from it.

pub mod error;
pub mod graph;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use graph::{Edge, Graph, Node, UNKNOWN_TYPE};
