//! Core pipeline parser implementation
//!
//! Parses Beam YAML pipeline documents into the graph model. Two
//! topologies are recognized:
//!
//! - **chain**: transforms execute in declaration order; consecutive
//!   transforms are linked implicitly.
//! - **input-graph**: each transform names its upstream dependencies in an
//!   `input` field (a bare string or a mapping of slot name to upstream
//!   name).

use crate::error::{ParseError, Result};
use crate::yaml::YamlReader;
use beamforge_core::{Edge, Graph, Node};
use serde_yaml::{Mapping, Value as YamlValue};

/// Fallback transform type for entries missing a `type` key
const UNRECOGNIZED_TYPE: &str = "Unknown";

/// Pipeline parser
pub struct PipelineParser;

impl PipelineParser {
    /// Parse a pipeline from a YAML string
    pub fn parse(yaml_str: &str) -> Result<Graph> {
        let yaml = YamlReader::parse(yaml_str)?;
        Self::parse_from_yaml(&yaml)
    }

    /// Parse a pipeline from a YAML value
    pub fn parse_from_yaml(yaml: &YamlValue) -> Result<Graph> {
        let pipeline = yaml.get("pipeline").ok_or(ParseError::MissingPipeline)?;

        let empty = Vec::new();
        let transforms = YamlReader::optional_sequence(pipeline, "transforms").unwrap_or(&empty);
        let pipeline_type = YamlReader::optional_str(pipeline, "type");

        // An absent type with no `input` keys anywhere is still a chain;
        // any other explicit type selects the input-graph interpretation.
        let is_chain = match pipeline_type {
            Some("chain") => true,
            Some(_) => false,
            None => transforms.iter().all(|t| t.get("input").is_none()),
        };

        let mut graph = Graph::new();
        if is_chain {
            Self::parse_chain(&mut graph, transforms)?;
        } else {
            Self::parse_input_graph(&mut graph, transforms)?;
        }
        Ok(graph)
    }

    /// Chain interpretation: a straight-line path in declaration order
    fn parse_chain(graph: &mut Graph, transforms: &[YamlValue]) -> Result<()> {
        let mut prev_node: Option<String> = None;
        for (idx, transform) in transforms.iter().enumerate() {
            let node_id = Self::add_transform_node(graph, transform, idx)?;
            if let Some(prev) = prev_node {
                graph.insert_edge(Edge::new(prev, node_id.clone()));
            }
            prev_node = Some(node_id);
        }
        Ok(())
    }

    /// Input-graph interpretation: edges come from explicit `input` fields
    fn parse_input_graph(graph: &mut Graph, transforms: &[YamlValue]) -> Result<()> {
        for (idx, transform) in transforms.iter().enumerate() {
            let node_id = Self::add_transform_node(graph, transform, idx)?;

            match transform.get("input") {
                None | Some(YamlValue::Null) => {}
                Some(YamlValue::String(upstream)) => {
                    graph.insert_edge(Edge::new(upstream.clone(), node_id.clone()));
                }
                Some(YamlValue::Mapping(inputs)) => {
                    // Slot names are not retained; only the upstream
                    // reference matters to the graph.
                    for (slot, upstream) in inputs {
                        match upstream.as_str() {
                            Some(upstream) => {
                                graph.insert_edge(Edge::new(upstream, node_id.clone()));
                            }
                            None => log::warn!(
                                "skipping non-string input {:?} on transform '{}'",
                                slot,
                                node_id
                            ),
                        }
                    }
                }
                Some(other) => {
                    log::warn!(
                        "skipping unrecognized input {:?} on transform '{}'",
                        other,
                        node_id
                    );
                }
            }
        }
        Ok(())
    }

    /// Add one transform entry as a node, returning its id
    ///
    /// The id is the entry's `name`, falling back to its type string. A
    /// collision with an id already in the graph is resolved by suffixing
    /// the entry's index (`<name>_<idx>`), advancing further if the user
    /// happened to take that name too.
    fn add_transform_node(graph: &mut Graph, transform: &YamlValue, idx: usize) -> Result<String> {
        let transform_type =
            YamlReader::optional_str(transform, "type").unwrap_or(UNRECOGNIZED_TYPE);
        let base = match YamlReader::optional_str(transform, "name") {
            Some(name) if !name.is_empty() => name,
            _ if !transform_type.is_empty() => transform_type,
            _ => UNRECOGNIZED_TYPE,
        };

        let mut node_id = base.to_string();
        let mut bump = idx;
        while graph.contains_node(&node_id) {
            node_id = format!("{}_{}", base, bump);
            bump += 1;
        }

        let config = Self::transform_config(transform, &node_id);
        graph.insert_node(Node::new(node_id.clone(), transform_type, config))?;
        Ok(node_id)
    }

    /// Read a transform's `config` mapping, defaulting to empty
    fn transform_config(transform: &YamlValue, node_id: &str) -> Mapping {
        match transform.get("config") {
            None | Some(YamlValue::Null) => Mapping::new(),
            Some(YamlValue::Mapping(config)) => config.clone(),
            Some(_) => {
                log::warn!("ignoring non-mapping config on transform '{}'", node_id);
                Mapping::new()
            }
        }
    }
}
