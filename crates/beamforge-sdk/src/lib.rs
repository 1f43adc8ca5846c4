//! BeamForge SDK - the pipeline editing session
//!
//! High-level API tying the core components together: parse an uploaded
//! YAML document into a graph, apply editing operations, keep the
//! regenerated YAML document in step with every mutation, and hand the
//! finished document to an external runner. Any UI layer binds to
//! [`EditorSession`]; the session itself is UI-agnostic and synchronous
//! except for file loading and pipeline runs.

pub mod builder;
pub mod config;
pub mod editor_session;
pub mod error;
pub mod log;

// Re-export main types
pub use builder::EditorSessionBuilder;
pub use config::SessionConfig;
pub use editor_session::EditorSession;
pub use error::{Result, SdkError};
pub use log::{LogEntry, SessionLog, TIMESTAMP_FORMAT};

// Re-export commonly used types from dependencies
pub use beamforge_catalog::TransformCatalog;
pub use beamforge_core::{Edge, Graph, Node, UNKNOWN_TYPE};
pub use beamforge_runner::{LaunchReport, LauncherConfig, Runner};
