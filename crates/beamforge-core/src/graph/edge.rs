//! Data-flow edge definitions

use serde::{Deserialize, Serialize};

/// A directed data dependency: the target transform consumes the source
/// transform's output.
///
/// Edges carry no durable identity of their own; they are identified by
/// their current endpoint values. Renaming a node rewrites the endpoints
/// of every edge touching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Id of the upstream node
    pub source: String,

    /// Id of the consuming node
    pub target: String,
}

impl Edge {
    /// Create a new edge
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// True when this edge connects the two ids, ignoring direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// True when either endpoint is the given node id
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connects_is_symmetric() {
        let edge = Edge::new("a", "b");
        assert!(edge.connects("a", "b"));
        assert!(edge.connects("b", "a"));
        assert!(!edge.connects("a", "c"));
    }

    #[test]
    fn test_touches() {
        let edge = Edge::new("a", "b");
        assert!(edge.touches("a"));
        assert!(edge.touches("b"));
        assert!(!edge.touches("c"));
    }
}
