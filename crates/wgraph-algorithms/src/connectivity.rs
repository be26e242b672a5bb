//! Connectivity algorithms
//!
//! Whole-graph connectivity (strong connectivity for directed views) and
//! weakly connected components.

use super::common::{GraphView, NodeId};
use std::collections::HashMap;

/// Which adjacency a traversal follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow outgoing edges
    Forward,
    /// Follow incoming edges
    Backward,
}

/// Iterative depth-first reachability from `root`.
///
/// Returns the visited flags and how many nodes were reached.
pub fn reachable(view: &GraphView, root: usize, direction: Direction) -> (Vec<bool>, usize) {
    let mut visited = vec![false; view.node_count];
    let mut stack = vec![root];
    let mut count = 0;

    visited[root] = true;
    while let Some(u) = stack.pop() {
        count += 1;
        let next = match direction {
            Direction::Forward => view.successors(u),
            Direction::Backward => view.predecessors(u),
        };
        for &v in next {
            if !visited[v] {
                visited[v] = true;
                stack.push(v);
            }
        }
    }

    (visited, count)
}

/// Whether the whole graph is connected.
///
/// An empty graph is not connected. Undirected views need every node
/// reachable from one root. Directed views need strong connectivity: every
/// node reaches the root and the root reaches every node, which holds exactly
/// when every node reaches every other node.
pub fn is_connected(view: &GraphView) -> bool {
    let n = view.node_count;
    if n == 0 {
        return false;
    }

    let (_, forward) = reachable(view, 0, Direction::Forward);
    if forward != n {
        return false;
    }
    if !view.directed {
        return true;
    }

    let (_, backward) = reachable(view, 0, Direction::Backward);
    backward == n
}

/// Result of WCC algorithm
#[derive(Debug, Clone)]
pub struct WccResult {
    /// Map of Component ID -> List of NodeIds
    pub components: HashMap<usize, Vec<NodeId>>,
    /// Map of NodeId -> Component ID
    pub node_component: HashMap<NodeId, usize>,
}

impl WccResult {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Members of every component, each sorted, ordered by smallest member
    pub fn sorted_components(&self) -> Vec<Vec<NodeId>> {
        let mut out: Vec<Vec<NodeId>> = self
            .components
            .values()
            .map(|members| {
                let mut members = members.clone();
                members.sort();
                members
            })
            .collect();
        out.sort();
        out
    }
}

/// Union-Find data structure
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut cur = i;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i != root_j {
            if self.rank[root_i] < self.rank[root_j] {
                self.parent[root_i] = root_j;
            } else if self.rank[root_i] > self.rank[root_j] {
                self.parent[root_j] = root_i;
            } else {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
    }
}

/// Weakly Connected Components (WCC)
///
/// Finds all disjoint subgraphs in the graph.
/// Ignores edge direction.
pub fn weakly_connected_components(view: &GraphView) -> WccResult {
    let n = view.node_count;
    let mut uf = UnionFind::new(n);

    for (u_idx, v_idx, _) in view.edges() {
        uf.union(u_idx, v_idx);
    }

    let mut components = HashMap::new();
    let mut node_component = HashMap::new();

    for i in 0..n {
        let root = uf.find(i);
        let node_id = view.node(i).clone();

        components.entry(root).or_insert_with(Vec::new).push(node_id.clone());
        node_component.insert(node_id, root);
    }

    WccResult {
        components,
        node_component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_edges() -> Vec<(&'static str, &'static str, f64)> {
        Vec::new()
    }

    #[test]
    fn test_empty_graph_is_not_connected() {
        let view = GraphView::from_edges(false, &[], no_edges());
        assert!(!is_connected(&view));
        let view = GraphView::from_edges(true, &[], no_edges());
        assert!(!is_connected(&view));
    }

    #[test]
    fn test_single_node_is_connected() {
        let view = GraphView::from_edges(true, &["a"], no_edges());
        assert!(is_connected(&view));
    }

    #[test]
    fn test_undirected_path_is_connected() {
        let view = GraphView::from_edges(false, &[], [("a", "b", 1.0), ("b", "c", 1.0)]);
        assert!(is_connected(&view));
    }

    #[test]
    fn test_undirected_two_components() {
        let view = GraphView::from_edges(false, &[], [("a", "b", 1.0), ("c", "d", 1.0)]);
        assert!(!is_connected(&view));
    }

    #[test]
    fn test_directed_cycle_is_strongly_connected() {
        let view = GraphView::from_edges(
            true,
            &[],
            [("a", "b", 1.0), ("b", "c", 1.0), ("c", "a", 1.0)],
        );
        assert!(is_connected(&view));
    }

    #[test]
    fn test_directed_path_is_not_strongly_connected() {
        // Every node is reachable from a, but nothing reaches a
        let view = GraphView::from_edges(true, &[], [("a", "b", 1.0), ("b", "c", 1.0)]);
        assert!(!is_connected(&view));

        // Root reaches nobody, everybody reaches the root
        let view = GraphView::from_edges(true, &[], [("b", "a", 1.0), ("c", "a", 1.0)]);
        assert!(!is_connected(&view));
    }

    #[test]
    fn test_two_pass_matches_all_roots() {
        let view = GraphView::from_edges(
            true,
            &[],
            [
                ("a", "b", 1.0),
                ("b", "a", 1.0),
                ("b", "c", 1.0),
                ("c", "d", 1.0),
                ("d", "c", 1.0),
            ],
        );
        let every_root = (0..view.node_count)
            .all(|r| reachable(&view, r, Direction::Forward).1 == view.node_count);
        assert_eq!(is_connected(&view), every_root);
        assert!(!every_root);
    }

    #[test]
    fn test_deep_path_does_not_overflow() {
        let labels: Vec<String> = (0..200_000).map(|i| format!("n{:06}", i)).collect();
        let edges: Vec<(&str, &str, f64)> = labels
            .windows(2)
            .map(|w| (w[0].as_str(), w[1].as_str(), 1.0))
            .collect();
        let view = GraphView::from_edges(false, &[], edges);
        assert!(is_connected(&view));
    }

    #[test]
    fn test_wcc() {
        // Edges: 1->2, 3->4->5, 6 (isolated)
        let view = GraphView::from_edges(
            true,
            &["6"],
            [("1", "2", 1.0), ("3", "4", 1.0), ("4", "5", 1.0)],
        );

        let result = weakly_connected_components(&view);

        assert_eq!(result.component_count(), 3);

        let c1 = result.node_component[&NodeId::from("1")];
        let c2 = result.node_component[&NodeId::from("2")];
        assert_eq!(c1, c2);

        let c3 = result.node_component[&NodeId::from("3")];
        let c4 = result.node_component[&NodeId::from("4")];
        let c5 = result.node_component[&NodeId::from("5")];
        assert_eq!(c3, c4);
        assert_eq!(c4, c5);
        assert_ne!(c1, c3);

        let sorted = result.sorted_components();
        assert_eq!(sorted[0], vec![NodeId::from("1"), NodeId::from("2")]);
        assert_eq!(sorted[2], vec![NodeId::from("6")]);
    }
}
