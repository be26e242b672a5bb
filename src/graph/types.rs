//! Core type definitions for the graph store

use serde::{Deserialize, Serialize};
use std::fmt;

pub use wgraph_algorithms::NodeId;

/// Key of the edge relation: an ordered `(source, target)` pair.
///
/// Undirected graphs store both orientations of every edge; `reversed`
/// gives the mirror key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeKey {
    pub source: NodeId,
    pub target: NodeId,
}

impl EdgeKey {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        EdgeKey {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn reversed(&self) -> Self {
        EdgeKey {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Whether `node` is one of the endpoints
    pub fn touches(&self, node: &str) -> bool {
        self.source.as_str() == node || self.target.as_str() == node
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_id() {
        let id = NodeId::new("A");
        assert_eq!(id.as_str(), "A");
        assert_eq!(format!("{}", id), "A");

        let id2: NodeId = "B".into();
        assert_eq!(id2.as_str(), "B");
    }

    #[test]
    fn test_edge_key_reversed() {
        let key = EdgeKey::new("A", "B");
        let rev = key.reversed();
        assert_eq!(rev, EdgeKey::new("B", "A"));
        assert_ne!(key, rev);
        assert_eq!(rev.reversed(), key);
    }

    #[test]
    fn test_edge_key_hashing_is_ordered() {
        let mut set = HashSet::new();
        set.insert(EdgeKey::new("A", "B"));
        assert!(set.contains(&EdgeKey::new("A", "B")));
        assert!(!set.contains(&EdgeKey::new("B", "A")));
    }

    #[test]
    fn test_edge_key_helpers() {
        let key = EdgeKey::new("A", "B");
        assert!(key.touches("A"));
        assert!(key.touches("B"));
        assert!(!key.touches("C"));
        assert!(!key.is_self_loop());
        assert!(EdgeKey::new("A", "A").is_self_loop());
        assert_eq!(format!("{}", key), "(A -> B)");
    }

    #[test]
    fn test_id_ordering() {
        assert!(NodeId::new("A") < NodeId::new("B"));
        assert!(NodeId::new("B") < NodeId::new("a"));
    }
}
