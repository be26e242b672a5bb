//! In-memory weighted graph storage
//!
//! Nodes are caller-labelled, edges are keyed by ordered `(source, target)`
//! pairs. Undirected stores mirror every edge into both orientations and keep
//! the two in lockstep.

use super::edge::Edge;
use super::types::{EdgeKey, NodeId};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeKey),

    #[error("Self-loop on node {0} rejected")]
    SelfLoop(NodeId),

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory graph storage
///
/// Uses insertion-ordered hash maps:
/// - nodes: NodeId -> set of outgoing neighbours (adjacency list)
/// - edges: EdgeKey -> weight
///
/// Invariant: `(u, v)` is in `edges` iff `v` is in `nodes[u]`. When the store
/// is undirected, `(u, v)` is in `edges` iff `(v, u)` is, with the same weight.
#[derive(Debug, Clone)]
pub struct GraphStore {
    /// Fixed at construction
    directed: bool,

    /// Node storage with outgoing adjacency
    nodes: IndexMap<NodeId, IndexSet<NodeId>>,

    /// Edge relation
    edges: IndexMap<EdgeKey, f64>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new(directed: bool) -> Self {
        GraphStore {
            directed,
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add a node with no edges.
    ///
    /// Returns `false` (and changes nothing) if the label is already present.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> bool {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return false;
        }
        debug!(node = %id, "node added");
        self.nodes.insert(id, IndexSet::new());
        true
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    fn require_node(&self, id: &str) -> GraphResult<()> {
        if self.has_node(id) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound(NodeId::from(id)))
        }
    }

    /// Delete a node and every edge touching it.
    ///
    /// Returns the removed edges so a caller can rebuild them. Undirected
    /// edges are reported once, oriented away from the removed node. The
    /// store is untouched if the node does not exist.
    pub fn remove_node(&mut self, id: &str) -> GraphResult<Vec<Edge>> {
        let outgoing = self
            .nodes
            .get(id)
            .ok_or_else(|| GraphError::NodeNotFound(NodeId::from(id)))?;

        let mut incident: Vec<EdgeKey> = outgoing
            .iter()
            .map(|adj| EdgeKey::new(id, adj))
            .collect();
        if self.directed {
            incident.extend(
                self.nodes
                    .iter()
                    .filter(|(_, adj)| adj.contains(id))
                    .map(|(from, _)| EdgeKey::new(from, id)),
            );
        }

        let removed: Vec<Edge> = incident.iter().filter_map(|key| self.unlink(key)).collect();
        self.nodes.shift_remove(id);

        debug!(node = %id, removed_edges = removed.len(), "node removed");
        Ok(removed)
    }

    /// Insert or overwrite the edge `source -> target`.
    ///
    /// Undirected stores write `target -> source` with the same weight.
    /// Returns the previous weight when the edge already existed.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: f64) -> GraphResult<Option<f64>> {
        self.require_node(source)?;
        self.require_node(target)?;
        let key = EdgeKey::new(source, target);
        if key.is_self_loop() {
            return Err(GraphError::SelfLoop(key.source));
        }
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight(weight));
        }

        let previous = self.link(&key, weight);
        if !self.directed {
            self.link(&key.reversed(), weight);
        }

        debug!(source, target, weight, updated = previous.is_some(), "edge written");
        Ok(previous)
    }

    /// Delete the edge between `source` and `target`.
    ///
    /// Undirected stores drop both orientations and accept either order.
    pub fn remove_edge(&mut self, source: &str, target: &str) -> GraphResult<Edge> {
        self.require_node(source)?;
        self.require_node(target)?;

        let key = EdgeKey::new(source, target);
        let found = if self.edges.contains_key(&key) {
            Some(key.clone())
        } else if !self.directed && self.edges.contains_key(&key.reversed()) {
            Some(key.reversed())
        } else {
            None
        };

        let edge = found
            .and_then(|k| self.unlink(&k))
            .ok_or(GraphError::EdgeNotFound(key))?;

        debug!(source, target, weight = edge.weight, "edge removed");
        Ok(edge)
    }

    fn link(&mut self, key: &EdgeKey, weight: f64) -> Option<f64> {
        if let Some(adj) = self.nodes.get_mut(&key.source) {
            adj.insert(key.target.clone());
        }
        self.edges.insert(key.clone(), weight)
    }

    /// Drop an edge (and its mirror when undirected) from both the edge
    /// relation and the adjacency sets.
    fn unlink(&mut self, key: &EdgeKey) -> Option<Edge> {
        let weight = self.edges.shift_remove(key)?;
        if let Some(adj) = self.nodes.get_mut(&key.source) {
            adj.shift_remove(&key.target);
        }
        if !self.directed {
            let mirror = key.reversed();
            self.edges.shift_remove(&mirror);
            if let Some(adj) = self.nodes.get_mut(&mirror.source) {
                adj.shift_remove(&mirror.target);
            }
        }
        Some(Edge::from_key(key, weight))
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges.contains_key(&EdgeKey::new(source, target))
    }

    /// Weight of `source -> target`, if present
    pub fn weight(&self, source: &str, target: &str) -> Option<f64> {
        self.edges.get(&EdgeKey::new(source, target)).copied()
    }

    /// Outgoing neighbours of a node, in insertion order
    pub fn neighbors(&self, id: &str) -> GraphResult<impl Iterator<Item = &NodeId> + '_> {
        self.nodes
            .get(id)
            .map(|adj| adj.iter())
            .ok_or_else(|| GraphError::NodeNotFound(NodeId::from(id)))
    }

    /// All nodes, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.nodes.keys()
    }

    /// All edges, in insertion order.
    ///
    /// Undirected edges appear once, in the orientation first written.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(move |(i, (key, _))| {
                self.directed
                    || self
                        .edges
                        .get_index_of(&key.reversed())
                        .map_or(true, |j| *i < j)
            })
            .map(|(_, (key, weight))| Edge::from_key(key, *weight))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of logical edges (a mirrored undirected pair counts once)
    pub fn edge_count(&self) -> usize {
        if self.directed {
            self.edges.len()
        } else {
            self.edges.len() / 2
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear all data, keeping the directedness
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::undirected()
    }
}

/// Adjacency-list dump, one line per node: `A--> [B:1] [C:4]`
impl fmt::Display for GraphStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.directed { "Digraph" } else { "Graph" };
        writeln!(f, "{} Adjacency List:", kind)?;
        for (node, adj) in &self.nodes {
            write!(f, "{}-->", node)?;
            for target in adj {
                let weight = self.edges[&EdgeKey::new(node, target)];
                write!(f, " [{}:{}]", target, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
