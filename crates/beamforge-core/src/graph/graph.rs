//! The mutable pipeline graph and its editing operations
//!
//! All operations are synchronous and atomic: an operation either applies
//! fully or leaves the graph untouched and returns an error. Node and edge
//! insertion order is preserved so that the serialized document is
//! deterministic.

use std::collections::HashSet;

use serde_yaml::Mapping;

use super::{Edge, Node};
use crate::error::{CoreError, Result};

/// A directed pipeline graph
///
/// Nodes are transforms, edges are data-flow dependencies. The graph does
/// not enforce acyclicity; only the external pipeline runner would reject a
/// cyclic pipeline. Duplicate edges are suppressed symmetrically: an edge
/// between two nodes is considered present if it exists in either direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Queries ==========

    /// All nodes, in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// True when a node with the given id exists
    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// True when an edge exists between the two ids, in either direction
    pub fn has_edge_between(&self, a: &str, b: &str) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ========== Construction (used by the parser) ==========

    /// Insert a fully formed node
    ///
    /// Fails with [`CoreError::DuplicateNode`] when the id is taken; the
    /// parser derives collision-free ids before calling this.
    pub fn insert_node(&mut self, node: Node) -> Result<()> {
        if node.id.is_empty() {
            return Err(CoreError::EmptyNodeId);
        }
        if self.contains_node(&node.id) {
            return Err(CoreError::DuplicateNode { id: node.id });
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Insert an edge without endpoint validation
    ///
    /// The parser records dependencies exactly as declared, including
    /// references to names that never materialize as transforms; the
    /// serializer is the defensive side and drops those.
    pub fn insert_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    // ========== Editing operations ==========

    /// Create a new node of the `UNKNOWN` type
    ///
    /// The id is `node-<n+1>` derived from the current node count; after
    /// deletions that id may be taken, in which case the counter keeps
    /// advancing until a free id is found. Never fails.
    pub fn add_node(&mut self) -> &Node {
        let mut n = self.nodes.len() + 1;
        let mut id = format!("node-{}", n);
        while self.contains_node(&id) {
            n += 1;
            id = format!("node-{}", n);
        }
        self.nodes.push(Node::unknown(id));
        let idx = self.nodes.len() - 1;
        &self.nodes[idx]
    }

    /// Connect two existing, distinct nodes
    ///
    /// Fails with [`CoreError::DuplicateEdge`] when an edge between the two
    /// already exists in either direction; callers treat that as a notice,
    /// not a failure.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Result<()> {
        if !self.contains_node(source) {
            return Err(CoreError::NodeNotFound {
                id: source.to_string(),
            });
        }
        if !self.contains_node(target) {
            return Err(CoreError::NodeNotFound {
                id: target.to_string(),
            });
        }
        if source == target {
            return Err(CoreError::SelfLoop {
                id: source.to_string(),
            });
        }
        if self.has_edge_between(source, target) {
            return Err(CoreError::DuplicateEdge {
                source_id: source.to_string(),
                target: target.to_string(),
            });
        }
        self.edges.push(Edge::new(source, target));
        Ok(())
    }

    /// Delete the listed nodes and edges in one pass
    ///
    /// Listed edge keys match in either orientation. Any edge still touching
    /// a deleted node is removed as well, so the graph never holds a
    /// dangling edge afterwards.
    pub fn delete_selected(&mut self, node_ids: &HashSet<String>, edge_keys: &[(String, String)]) {
        let (nodes_before, edges_before) = (self.nodes.len(), self.edges.len());
        self.edges.retain(|e| {
            let listed = edge_keys.iter().any(|(a, b)| e.connects(a, b));
            let orphaned = node_ids.contains(&e.source) || node_ids.contains(&e.target);
            !listed && !orphaned
        });
        self.nodes.retain(|n| !node_ids.contains(&n.id));
        log::debug!(
            "deleted {} node(s), {} edge(s)",
            nodes_before - self.nodes.len(),
            edges_before - self.edges.len()
        );
    }

    /// Rename a node, rewriting every edge endpoint that references it
    ///
    /// Renaming to the current id is a no-op. Renaming to the empty string
    /// or to an id that is already taken leaves the graph unchanged.
    pub fn rename_node(&mut self, old_id: &str, new_id: &str) -> Result<()> {
        if new_id.is_empty() {
            return Err(CoreError::EmptyNodeId);
        }
        if old_id == new_id {
            return Ok(());
        }
        if self.contains_node(new_id) {
            return Err(CoreError::DuplicateNode {
                id: new_id.to_string(),
            });
        }
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == old_id)
            .ok_or_else(|| CoreError::NodeNotFound {
                id: old_id.to_string(),
            })?;
        node.id = new_id.to_string();

        for edge in &mut self.edges {
            if edge.source == old_id {
                edge.source = new_id.to_string();
            }
            if edge.target == old_id {
                edge.target = new_id.to_string();
            }
        }
        Ok(())
    }

    /// Change a node's transform type
    ///
    /// A genuine type change discards the node's configuration, since
    /// configurations are type-specific and not portable across types.
    /// Returns whether anything changed.
    pub fn set_node_type(&mut self, id: &str, new_type: &str) -> Result<bool> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| CoreError::NodeNotFound { id: id.to_string() })?;
        if node.node_type == new_type {
            return Ok(false);
        }
        node.node_type = new_type.to_string();
        node.config = Mapping::new();
        Ok(true)
    }

    /// Replace a node's configuration wholesale (no merge)
    pub fn set_node_config(&mut self, id: &str, config: Mapping) -> Result<()> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| CoreError::NodeNotFound { id: id.to_string() })?;
        node.config = config;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_node_path() -> Graph {
        // A -> B -> C
        let mut graph = Graph::new();
        graph.insert_node(Node::unknown("A")).unwrap();
        graph.insert_node(Node::unknown("B")).unwrap();
        graph.insert_node(Node::unknown("C")).unwrap();
        graph.insert_edge(Edge::new("A", "B"));
        graph.insert_edge(Edge::new("B", "C"));
        graph
    }

    #[test]
    fn test_add_node_ids_increment() {
        let mut graph = Graph::new();
        assert_eq!(graph.add_node().id, "node-1");
        assert_eq!(graph.add_node().id, "node-2");
        assert_eq!(graph.add_node().node_type, crate::UNKNOWN_TYPE);
    }

    #[test]
    fn test_add_node_skips_taken_ids() {
        let mut graph = Graph::new();
        graph.insert_node(Node::unknown("node-2")).unwrap();
        assert_eq!(graph.add_node().id, "node-3");
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_insert_duplicate_node_rejected() {
        let mut graph = Graph::new();
        graph.insert_node(Node::unknown("A")).unwrap();
        let err = graph.insert_node(Node::unknown("A")).unwrap_err();
        assert_eq!(
            err,
            CoreError::DuplicateNode {
                id: "A".to_string()
            }
        );
    }

    #[test]
    fn test_add_edge_requires_existing_nodes() {
        let mut graph = Graph::new();
        graph.insert_node(Node::unknown("A")).unwrap();
        let err = graph.add_edge("A", "missing").unwrap_err();
        assert!(matches!(err, CoreError::NodeNotFound { .. }));
    }

    #[test]
    fn test_add_edge_rejects_self_loop() {
        let mut graph = Graph::new();
        graph.insert_node(Node::unknown("A")).unwrap();
        let err = graph.add_edge("A", "A").unwrap_err();
        assert_eq!(
            err,
            CoreError::SelfLoop {
                id: "A".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_edge_suppression_is_symmetric() {
        let mut graph = Graph::new();
        graph.insert_node(Node::unknown("A")).unwrap();
        graph.insert_node(Node::unknown("B")).unwrap();
        graph.add_edge("A", "B").unwrap();

        let err = graph.add_edge("B", "A").unwrap_err();
        assert!(matches!(err, CoreError::DuplicateEdge { .. }));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_delete_node_cascades_edges() {
        let mut graph = three_node_path();
        let mut selected = HashSet::new();
        selected.insert("B".to_string());
        graph.delete_selected(&selected, &[]);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.contains_node("A"));
        assert!(graph.contains_node("C"));
    }

    #[test]
    fn test_delete_edge_key_matches_either_orientation() {
        let mut graph = three_node_path();
        // Listed reversed: (B, A) must still remove A -> B
        graph.delete_selected(&HashSet::new(), &[("B".to_string(), "A".to_string())]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges()[0], Edge::new("B", "C"));
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_rename_propagates_to_edges() {
        let mut graph = three_node_path();
        graph.rename_node("B", "B2").unwrap();

        assert!(graph.contains_node("B2"));
        assert!(!graph.contains_node("B"));
        assert_eq!(graph.edges()[0], Edge::new("A", "B2"));
        assert_eq!(graph.edges()[1], Edge::new("B2", "C"));
    }

    #[test]
    fn test_rename_to_empty_rejected_and_state_unchanged() {
        let mut graph = three_node_path();
        let before = graph.clone();
        let err = graph.rename_node("B", "").unwrap_err();
        assert_eq!(err, CoreError::EmptyNodeId);
        assert_eq!(graph, before);
    }

    #[test]
    fn test_rename_to_same_id_is_noop() {
        let mut graph = three_node_path();
        let before = graph.clone();
        graph.rename_node("B", "B").unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn test_rename_to_taken_id_rejected() {
        let mut graph = three_node_path();
        let err = graph.rename_node("B", "C").unwrap_err();
        assert_eq!(
            err,
            CoreError::DuplicateNode {
                id: "C".to_string()
            }
        );
    }

    #[test]
    fn test_type_change_resets_config() {
        let mut graph = Graph::new();
        let mut config = Mapping::new();
        config.insert("path".into(), "in.csv".into());
        graph
            .insert_node(Node::new("read", "ReadFromCsv", config))
            .unwrap();

        let changed = graph.set_node_type("read", "ReadFromJson").unwrap();
        assert!(changed);
        let node = graph.node("read").unwrap();
        assert_eq!(node.node_type, "ReadFromJson");
        assert!(node.config.is_empty());
    }

    #[test]
    fn test_same_type_keeps_config() {
        let mut graph = Graph::new();
        let mut config = Mapping::new();
        config.insert("path".into(), "in.csv".into());
        graph
            .insert_node(Node::new("read", "ReadFromCsv", config.clone()))
            .unwrap();

        let changed = graph.set_node_type("read", "ReadFromCsv").unwrap();
        assert!(!changed);
        assert_eq!(graph.node("read").unwrap().config, config);
    }

    #[test]
    fn test_set_node_config_replaces_wholesale() {
        let mut graph = Graph::new();
        let mut old = Mapping::new();
        old.insert("a".into(), 1.into());
        old.insert("b".into(), 2.into());
        graph.insert_node(Node::new("n", "Sql", old)).unwrap();

        let mut new = Mapping::new();
        new.insert("query".into(), "SELECT 1".into());
        graph.set_node_config("n", new.clone()).unwrap();

        // No merge: the old keys are gone
        assert_eq!(graph.node("n").unwrap().config, new);
    }
}
