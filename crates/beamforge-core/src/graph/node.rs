//! Transform node definitions
//!
//! A node is one transform step in the pipeline. Its id doubles as the
//! graph key and the step name written into the generated YAML document.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

/// Type assigned to freshly created nodes until the user picks a real one
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

/// A single transform in the pipeline graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique within the graph; also the step's display name
    pub id: String,

    /// Transform kind (a catalog entry name, or a sentinel for
    /// unrecognized/new nodes)
    #[serde(rename = "type")]
    pub node_type: String,

    /// Transform parameters; the empty mapping means "no configuration yet"
    #[serde(default)]
    pub config: Mapping,
}

impl Node {
    /// Create a node with an explicit type and configuration
    pub fn new(id: impl Into<String>, node_type: impl Into<String>, config: Mapping) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            config,
        }
    }

    /// Create a node of the `UNKNOWN` sentinel type with no configuration
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::new(id, UNKNOWN_TYPE, Mapping::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_node() {
        let node = Node::unknown("node-1");
        assert_eq!(node.id, "node-1");
        assert_eq!(node.node_type, UNKNOWN_TYPE);
        assert!(node.config.is_empty());
    }

    #[test]
    fn test_node_with_config() {
        let mut config = Mapping::new();
        config.insert("path".into(), "input.csv".into());

        let node = Node::new("read", "ReadFromCsv", config.clone());
        assert_eq!(node.node_type, "ReadFromCsv");
        assert_eq!(node.config, config);
    }
}
