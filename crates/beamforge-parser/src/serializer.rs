//! Pipeline serializer
//!
//! Regenerates a Beam YAML pipeline document from the graph. The output is
//! always the input-graph form: every edge becomes an entry in its target's
//! `input` mapping, keyed by the source node id. A chain-origin graph
//! therefore re-parses through the input-graph branch with identical edges.

use crate::error::Result;
use beamforge_core::Graph;
use serde_yaml::{Mapping, Value as YamlValue};

/// Pipeline serializer
pub struct PipelineSerializer;

impl PipelineSerializer {
    /// Serialize a graph to a pipeline YAML string
    ///
    /// Transform records follow node insertion order with the key order
    /// `type`, `name`, `config`, `input`. Edges whose target is not a node
    /// in the graph are dropped.
    pub fn serialize(graph: &Graph) -> Result<String> {
        Ok(serde_yaml::to_string(&Self::to_document(graph))?)
    }

    /// Build the document as a YAML value
    pub fn to_document(graph: &Graph) -> YamlValue {
        // One record per node, keyed provisionally by node id
        let mut records: Vec<(String, Mapping)> = graph
            .nodes()
            .iter()
            .map(|node| {
                let mut record = Mapping::new();
                record.insert("type".into(), YamlValue::String(node.node_type.clone()));
                record.insert("name".into(), YamlValue::String(node.id.clone()));
                record.insert("config".into(), YamlValue::Mapping(node.config.clone()));
                (node.id.clone(), record)
            })
            .collect();

        for edge in graph.edges() {
            let record = match records.iter_mut().find(|(id, _)| *id == edge.target) {
                Some((_, record)) => record,
                None => {
                    log::debug!("dropping edge into unknown transform '{}'", edge.target);
                    continue;
                }
            };

            let input_key = YamlValue::String("input".to_string());
            if !record.contains_key(&input_key) {
                record.insert(input_key.clone(), YamlValue::Mapping(Mapping::new()));
            }
            if let Some(YamlValue::Mapping(inputs)) = record.get_mut(&input_key) {
                // The source id is both the slot name and the upstream
                // reference; slot names from the parsed document are not
                // reconstructed.
                inputs.insert(
                    YamlValue::String(edge.source.clone()),
                    YamlValue::String(edge.source.clone()),
                );
            }
        }

        let transforms: Vec<YamlValue> = records
            .into_iter()
            .map(|(_, record)| YamlValue::Mapping(record))
            .collect();

        let mut pipeline = Mapping::new();
        pipeline.insert("transforms".into(), YamlValue::Sequence(transforms));

        let mut root = Mapping::new();
        root.insert("pipeline".into(), YamlValue::Mapping(pipeline));
        YamlValue::Mapping(root)
    }
}
