//! Weighted edge value
//!
//! `Edge` is what the store hands out: enumeration results and the edges
//! removed by `remove_node` / `remove_edge`.

use super::types::{EdgeKey, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A weighted edge
///
/// In a directed graph it goes FROM `source` TO `target`. In an undirected
/// graph the orientation is only the one it was reported in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node (edge goes FROM this node)
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    pub target: NodeId,

    pub weight: f64,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: f64) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    pub(crate) fn from_key(key: &EdgeKey, weight: f64) -> Self {
        Edge {
            source: key.source.clone(),
            target: key.target.clone(),
            weight,
        }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.source, &self.target)
    }

    /// Check if this edge connects two specific nodes (in either direction)
    pub fn connects(&self, node1: &str, node2: &str) -> bool {
        (self.source.as_str() == node1 && self.target.as_str() == node2)
            || (self.source.as_str() == node2 && self.target.as_str() == node1)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_creation() {
        let edge = Edge::new("A", "B", 2.5);
        assert_eq!(edge.source.as_str(), "A");
        assert_eq!(edge.target.as_str(), "B");
        assert_eq!(edge.weight, 2.5);
        assert_eq!(edge.key(), EdgeKey::new("A", "B"));
    }

    #[test]
    fn test_edge_direction() {
        let edge = Edge::new("A", "B", 1.0);

        assert!(edge.connects("A", "B"));
        assert!(edge.connects("B", "A"));
        assert!(!edge.connects("A", "C"));
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(format!("{}", Edge::new("x", "y", -1.5)), "x -> y (-1.5)");
    }
}
