//! BeamForge Parser - YAML to graph parser for Beam YAML pipelines
//!
//! This crate converts Beam YAML pipeline documents into the BeamForge
//! graph model and back:
//!
//! - [`PipelineParser`] reads both the explicit `chain` topology and the
//!   implicit input-graph topology into a [`beamforge_core::Graph`].
//! - [`PipelineSerializer`] regenerates a pipeline document from the graph,
//!   always in the input-graph form, as the exact inverse of the parser.

pub mod error;
pub mod pipeline_parser;
pub mod serializer;
pub mod yaml;

// Re-export main parser types
pub use error::{ParseError, Result};
pub use pipeline_parser::PipelineParser;
pub use serializer::PipelineSerializer;
pub use yaml::YamlReader;
