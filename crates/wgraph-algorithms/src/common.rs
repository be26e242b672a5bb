//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Caller-supplied node label.
///
/// Labels are opaque: the algorithms only rely on their equality and their
/// ordering, which fixes tie-breaking (see [`GraphView`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(String);

impl NodeId {
    pub fn new(label: impl Into<String>) -> Self {
        NodeId(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors reported by the analyses
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgoError {
    #[error("Node {0} is not in the graph")]
    InvalidNode(NodeId),

    #[error("Negative edge weight {weight} on {from} -> {to} rejected by Dijkstra")]
    NegativeWeightRejected {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },

    #[error("Minimum spanning tree requires an undirected graph")]
    NotUndirected,

    #[error("Graph is not connected")]
    Disconnected,
}

pub type AlgoResult<T> = Result<T, AlgoError>;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Node indices follow the order of `index_to_node`. Callers that build the
/// view with labels in ascending order and sorted adjacency rows get
/// lexicographic tie-breaking in every algorithm of this crate, since ties
/// are always resolved towards the lower index.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Whether edges are one-way. Undirected views store both directions.
    pub directed: bool,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,

    /// Edge weights: aligned with `out_targets`
    pub weights: Vec<f64>,
}

impl GraphView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Get weights for outgoing edges of a node, aligned with `successors`
    pub fn weights(&self, idx: usize) -> &[f64] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.weights[start..end]
    }

    /// Outgoing `(target, weight)` pairs of a node
    pub fn out_edges(&self, idx: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.successors(idx)
            .iter()
            .copied()
            .zip(self.weights(idx).iter().copied())
    }

    /// Every stored `(source, target, weight)` triple, by source index.
    ///
    /// Undirected views yield each edge once per direction.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.node_count).flat_map(move |u| self.out_edges(u).map(move |(v, w)| (u, v, w)))
    }

    /// Resolve a label to its dense index
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.node_to_index.get(id).copied()
    }

    /// Resolve a label, failing with [`AlgoError::InvalidNode`]
    pub fn require_index(&self, id: &NodeId) -> AlgoResult<usize> {
        self.index_of(id.as_str())
            .ok_or_else(|| AlgoError::InvalidNode(id.clone()))
    }

    /// Label of a dense index
    pub fn node(&self, idx: usize) -> &NodeId {
        &self.index_to_node[idx]
    }

    /// Build a view from per-node outgoing `(target, weight)` rows.
    ///
    /// The incoming structure is derived from `outgoing`. For undirected
    /// views the rows must already contain both directions of every edge.
    pub fn from_adjacency_list(
        directed: bool,
        index_to_node: Vec<NodeId>,
        outgoing: Vec<Vec<(usize, f64)>>,
    ) -> Self {
        let node_count = index_to_node.len();
        let node_to_index: HashMap<NodeId, usize> = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, id)| (id.clone(), idx))
            .collect();

        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut weights = Vec::new();
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];

        out_offsets.push(0);
        for (u, row) in outgoing.into_iter().enumerate() {
            for (v, w) in row {
                out_targets.push(v);
                weights.push(w);
                incoming[v].push(u);
            }
            out_offsets.push(out_targets.len());
        }
        // Rows shorter than the node list leave trailing nodes without edges
        while out_offsets.len() < node_count + 1 {
            out_offsets.push(out_targets.len());
        }

        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_sources = Vec::new();
        in_offsets.push(0);
        for sources in incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        GraphView {
            node_count,
            directed,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
            weights,
        }
    }

    /// Build a view from labelled `(source, target, weight)` triples.
    ///
    /// Edge endpoints missing from `nodes` are added. Nodes are indexed in
    /// ascending label order and rows are sorted by target index. Undirected
    /// views mirror every triple. Mostly used by tests and benchmarks.
    pub fn from_edges<'a, I>(directed: bool, nodes: &[&str], edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, f64)>,
    {
        let edges: Vec<(&str, &str, f64)> = edges.into_iter().collect();
        let mut labels: Vec<NodeId> = nodes
            .iter()
            .copied()
            .chain(edges.iter().flat_map(|&(s, t, _)| [s, t]))
            .map(NodeId::from)
            .collect();
        labels.sort();
        labels.dedup();
        let index: HashMap<&str, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();

        let mut outgoing: Vec<Vec<(usize, f64)>> = vec![Vec::new(); labels.len()];
        for (s, t, w) in edges {
            let (u, v) = (index[s], index[t]);
            outgoing[u].push((v, w));
            if !directed {
                outgoing[v].push((u, w));
            }
        }
        for row in &mut outgoing {
            row.sort_by_key(|&(v, _)| v);
        }

        Self::from_adjacency_list(directed, labels, outgoing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_layout() {
        // a -> b (1), a -> c (2), c -> b (3)
        let view = GraphView::from_edges(
            true,
            &["c", "a", "b"],
            [("a", "b", 1.0), ("a", "c", 2.0), ("c", "b", 3.0)],
        );

        assert_eq!(view.node_count, 3);
        assert_eq!(view.node(0).as_str(), "a");
        assert_eq!(view.index_of("c"), Some(2));

        assert_eq!(view.successors(0), &[1, 2]);
        assert_eq!(view.weights(0), &[1.0, 2.0]);
        assert_eq!(view.out_degree(1), 0);
        assert_eq!(view.in_degree(1), 2);
        assert_eq!(view.predecessors(1), &[0, 2]);
        assert_eq!(view.edges().count(), 3);
    }

    #[test]
    fn test_undirected_view_mirrors_edges() {
        let view = GraphView::from_edges(false, &["a", "b"], [("a", "b", 4.0)]);
        assert_eq!(view.successors(0), &[1]);
        assert_eq!(view.successors(1), &[0]);
        assert_eq!(view.weights(1), &[4.0]);
    }

    #[test]
    fn test_require_index() {
        let view = GraphView::from_edges(true, &["a"], Vec::<(&str, &str, f64)>::new());
        assert_eq!(view.require_index(&NodeId::from("a")), Ok(0));
        assert_eq!(
            view.require_index(&NodeId::from("zz")),
            Err(AlgoError::InvalidNode(NodeId::from("zz")))
        );
    }

    #[test]
    fn test_node_id_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(NodeId::new("x"), 1);
        assert_eq!(map.get("x"), Some(&1));
        assert_eq!(format!("{}", NodeId::from("x")), "x");
    }
}
