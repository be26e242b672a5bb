//! Minimum Spanning Tree algorithms
//!
//! Implements Prim's algorithm for MST.

use super::common::{AlgoError, AlgoResult, GraphView, NodeId};
use super::connectivity::is_connected;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Where Prim's algorithm starts growing the tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PrimStart {
    /// The node with the smallest label
    #[default]
    LowestLabel,
    /// A specific node
    Node(NodeId),
    /// A node picked by an RNG seeded with `seed`
    Random { seed: u64 },
}

/// Prim configuration
#[derive(Debug, Clone, Default)]
pub struct PrimConfig {
    pub start: PrimStart,
}

/// One tree edge, oriented from the node already in the tree
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningEdge {
    pub weight: f64,
    pub source: NodeId,
    pub target: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MSTResult {
    pub total_weight: f64,
    /// Edges in the order they joined the tree
    pub edges: Vec<SpanningEdge>,
}

#[derive(Copy, Clone, PartialEq)]
struct EdgeState {
    weight: f64,
    source: usize,
    target: usize,
}

impl Eq for EdgeState {}

impl Ord for EdgeState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap; ties go to the lower (source, target) pair
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.source.cmp(&self.source))
            .then_with(|| other.target.cmp(&self.target))
    }
}

impl PartialOrd for EdgeState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn start_index(view: &GraphView, start: &PrimStart) -> AlgoResult<usize> {
    match start {
        PrimStart::LowestLabel => Ok(0),
        PrimStart::Node(id) => view.require_index(id),
        PrimStart::Random { seed } => {
            let mut rng = StdRng::seed_from_u64(*seed);
            Ok(rng.gen_range(0..view.node_count))
        }
    }
}

/// Prim's Algorithm for Minimum Spanning Tree
///
/// Requires an undirected, connected view ([`AlgoError::NotUndirected`],
/// [`AlgoError::Disconnected`]); the empty view counts as disconnected.
/// Candidate edges wait in a lazy min-heap; the cheapest edge whose far end
/// is still outside the tree is taken next, ties broken by the lower
/// `(tree node, outside node)` index pair.
pub fn prim_mst(view: &GraphView, config: &PrimConfig) -> AlgoResult<MSTResult> {
    if view.directed {
        return Err(AlgoError::NotUndirected);
    }
    if !is_connected(view) {
        return Err(AlgoError::Disconnected);
    }

    let start_idx = start_index(view, &config.start)?;
    let mut in_tree = vec![false; view.node_count];
    let mut heap = BinaryHeap::new();
    let mut mst_edges = Vec::with_capacity(view.node_count - 1);
    let mut total_weight = 0.0;

    in_tree[start_idx] = true;
    add_edges(view, start_idx, &mut heap, &in_tree);

    while let Some(EdgeState { weight, source, target }) = heap.pop() {
        if in_tree[target] {
            continue;
        }

        in_tree[target] = true;
        mst_edges.push(SpanningEdge {
            weight,
            source: view.node(source).clone(),
            target: view.node(target).clone(),
        });
        total_weight += weight;

        if mst_edges.len() + 1 == view.node_count {
            break;
        }
        add_edges(view, target, &mut heap, &in_tree);
    }

    Ok(MSTResult {
        total_weight,
        edges: mst_edges,
    })
}

fn add_edges(view: &GraphView, u: usize, heap: &mut BinaryHeap<EdgeState>, in_tree: &[bool]) {
    for (v, weight) in view.out_edges(u) {
        if !in_tree[v] {
            heap.push(EdgeState { weight, source: u, target: v });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(view: &GraphView) -> f64 {
        prim_mst(view, &PrimConfig::default()).unwrap().total_weight
    }

    #[test]
    fn test_prim_mst() {
        // Triangle: 1-2 (1), 2-3 (2), 1-3 (10)
        // MST should be 1-2, 2-3. Total 3.
        let view = GraphView::from_edges(
            false,
            &[],
            [("1", "2", 1.0), ("2", "3", 2.0), ("1", "3", 10.0)],
        );

        let result = prim_mst(&view, &PrimConfig::default()).unwrap();
        assert_eq!(result.total_weight, 3.0);
        assert_eq!(result.edges.len(), 2);
        assert_eq!(
            result.edges[0],
            SpanningEdge { weight: 1.0, source: "1".into(), target: "2".into() }
        );
    }

    #[test]
    fn test_complete_graph_unit_weights() {
        let view = GraphView::from_edges(
            false,
            &[],
            [
                ("a", "b", 1.0),
                ("a", "c", 1.0),
                ("a", "d", 1.0),
                ("b", "c", 1.0),
                ("b", "d", 1.0),
                ("c", "d", 1.0),
            ],
        );
        let result = prim_mst(&view, &PrimConfig::default()).unwrap();
        assert_eq!(result.edges.len(), 3);
        assert_eq!(result.total_weight, 3.0);
        // Lexicographic ties: a grabs b, c, d in order
        let targets: Vec<&str> = result.edges.iter().map(|e| e.target.as_str()).collect();
        assert_eq!(targets, vec!["b", "c", "d"]);
        assert!(result.edges.iter().all(|e| e.source.as_str() == "a"));
    }

    #[test]
    fn test_single_node() {
        let view = GraphView::from_edges(false, &["solo"], Vec::<(&str, &str, f64)>::new());
        let result = prim_mst(&view, &PrimConfig::default()).unwrap();
        assert!(result.edges.is_empty());
        assert_eq!(result.total_weight, 0.0);
    }

    #[test]
    fn test_rejects_directed() {
        let view = GraphView::from_edges(true, &[], [("a", "b", 1.0), ("b", "a", 1.0)]);
        assert_eq!(
            prim_mst(&view, &PrimConfig::default()),
            Err(AlgoError::NotUndirected)
        );
    }

    #[test]
    fn test_rejects_disconnected() {
        let view = GraphView::from_edges(false, &[], [("a", "b", 1.0), ("c", "d", 1.0)]);
        assert_eq!(
            prim_mst(&view, &PrimConfig::default()),
            Err(AlgoError::Disconnected)
        );
        let empty = GraphView::from_edges(false, &[], Vec::<(&str, &str, f64)>::new());
        assert_eq!(
            prim_mst(&empty, &PrimConfig::default()),
            Err(AlgoError::Disconnected)
        );
    }

    #[test]
    fn test_negative_weights_are_fine() {
        let view = GraphView::from_edges(
            false,
            &[],
            [("a", "b", -2.0), ("b", "c", 3.0), ("a", "c", -1.0)],
        );
        assert_eq!(total(&view), -3.0);
    }

    #[test]
    fn test_start_policies_agree_on_weight() {
        let view = GraphView::from_edges(
            false,
            &[],
            [
                ("a", "b", 4.0),
                ("b", "c", 1.0),
                ("c", "d", 3.0),
                ("d", "a", 2.0),
                ("a", "c", 5.0),
            ],
        );
        let expected = total(&view);
        assert_eq!(expected, 6.0);

        let from_d = PrimConfig { start: PrimStart::Node("d".into()) };
        let result = prim_mst(&view, &from_d).unwrap();
        assert_eq!(result.total_weight, expected);
        assert_eq!(result.edges[0].source.as_str(), "d");

        for seed in 0..8 {
            let config = PrimConfig { start: PrimStart::Random { seed } };
            assert_eq!(prim_mst(&view, &config).unwrap().total_weight, expected);
        }
    }

    #[test]
    fn test_unknown_start_node() {
        let view = GraphView::from_edges(false, &[], [("a", "b", 1.0)]);
        let config = PrimConfig { start: PrimStart::Node("x".into()) };
        assert_eq!(
            prim_mst(&view, &config),
            Err(AlgoError::InvalidNode("x".into()))
        );
    }
}
