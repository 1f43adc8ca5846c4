//! BeamForge Catalog - known transform types and their example usage
//!
//! The catalog is the static lookup the editor consults when populating
//! type pickers and scaffolding a node's configuration after a type
//! change. It is constructed once at startup and passed by reference to
//! whatever needs it; there is no module-level mutable state.

pub mod catalog;
pub mod error;

// Re-export main types
pub use catalog::{CatalogEntry, TransformCatalog, USAGE_NOT_FOUND};
pub use error::{CatalogError, Result};
