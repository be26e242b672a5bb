//! Graph algorithms module
//!
//! Algorithms are implemented in the `wgraph-algorithms` crate.
//! This module provides the integration/adapter layer: it projects a
//! [`GraphStore`] into a [`GraphView`] and runs the analyses on it.
//!
//! Every call builds its own view from a shared borrow of the store, so an
//! analysis can never observe a mutation halfway through.

use crate::graph::GraphStore;
use std::collections::HashMap;
use tracing::{debug, trace};
use wgraph_algorithms::{AlgoResult, GraphView, NodeId};

// Re-export algorithms
pub use wgraph_algorithms::{
    AlgoError,
    BellmanFord, Dijkstra, PathResult, PathStatus, ShortestPathSolver,
    MSTResult, PrimConfig, PrimStart, SpanningEdge,
    WccResult,
};

/// Build a GraphView from the store for algorithm execution
///
/// Nodes get dense indices in ascending label order and each adjacency row
/// is sorted the same way, so every tie in the algorithms resolves towards
/// the lexicographically smaller label.
pub fn build_view(store: &GraphStore) -> GraphView {
    // 1. Collect and order nodes
    let mut index_to_node: Vec<NodeId> = store.nodes().cloned().collect();
    index_to_node.sort();

    // 2. Build index mappings
    let node_to_index: HashMap<&str, usize> = index_to_node
        .iter()
        .enumerate()
        .map(|(idx, id)| (id.as_str(), idx))
        .collect();

    // 3. Build adjacency rows
    let mut outgoing: Vec<Vec<(usize, f64)>> = Vec::with_capacity(index_to_node.len());
    for id in &index_to_node {
        let mut row: Vec<(usize, f64)> = store
            .neighbors(id.as_str())
            .into_iter()
            .flatten()
            .filter_map(|target| {
                let weight = store.weight(id.as_str(), target.as_str())?;
                Some((node_to_index[target.as_str()], weight))
            })
            .collect();
        row.sort_by_key(|&(v, _)| v);
        outgoing.push(row);
    }

    trace!(
        nodes = index_to_node.len(),
        directed = store.is_directed(),
        "graph view built"
    );
    GraphView::from_adjacency_list(store.is_directed(), index_to_node, outgoing)
}

fn to_ids(labels: &[&str]) -> Vec<NodeId> {
    labels.iter().map(|l| NodeId::from(*l)).collect()
}

/// Whether the graph is connected (strongly connected when directed).
/// The empty graph is not connected.
pub fn is_connected(store: &GraphStore) -> bool {
    let connected = wgraph_algorithms::is_connected(&build_view(store));
    debug!(connected, "connectivity checked");
    connected
}

/// Weakly connected components, edge direction ignored
pub fn connected_components(store: &GraphStore) -> WccResult {
    wgraph_algorithms::weakly_connected_components(&build_view(store))
}

/// Run any shortest-path solver. `targets == None` queries every node in
/// label order.
pub fn shortest_paths<S: ShortestPathSolver>(
    store: &GraphStore,
    solver: &S,
    source: &str,
    targets: Option<&[&str]>,
) -> AlgoResult<Vec<PathResult>> {
    let view = build_view(store);
    let targets = targets.map(to_ids);
    let result = solver.shortest_paths(&view, &NodeId::from(source), targets.as_deref());
    match &result {
        Ok(paths) => debug!(source, results = paths.len(), "shortest paths computed"),
        Err(err) => debug!(source, error = %err, "shortest paths failed"),
    }
    result
}

/// Fewest-hops path, ignoring weights. `cost` is the hop count; `None` when
/// either node is missing or `target` cannot be reached.
pub fn shortest_hop_path(store: &GraphStore, source: &str, target: &str) -> Option<PathResult> {
    wgraph_algorithms::bfs(&build_view(store), &NodeId::from(source), &NodeId::from(target))
}

/// Dijkstra from `source` to each of `targets`
pub fn shortest_paths_dijkstra(
    store: &GraphStore,
    source: &str,
    targets: &[&str],
) -> AlgoResult<Vec<PathResult>> {
    shortest_paths(store, &Dijkstra, source, Some(targets))
}

/// Dijkstra from `source` to every node
pub fn shortest_paths_dijkstra_to_all(
    store: &GraphStore,
    source: &str,
) -> AlgoResult<Vec<PathResult>> {
    shortest_paths(store, &Dijkstra, source, None)
}

/// Bellman-Ford from `source` to each of `targets`
pub fn shortest_paths_bellman_ford(
    store: &GraphStore,
    source: &str,
    targets: &[&str],
) -> AlgoResult<Vec<PathResult>> {
    shortest_paths(store, &BellmanFord, source, Some(targets))
}

/// Bellman-Ford from `source` to every node
pub fn shortest_paths_bellman_ford_to_all(
    store: &GraphStore,
    source: &str,
) -> AlgoResult<Vec<PathResult>> {
    shortest_paths(store, &BellmanFord, source, None)
}

/// Prim's minimum spanning tree, grown from the lowest label
pub fn minimum_spanning_tree(store: &GraphStore) -> AlgoResult<MSTResult> {
    minimum_spanning_tree_with(store, &PrimConfig::default())
}

pub fn minimum_spanning_tree_with(store: &GraphStore, config: &PrimConfig) -> AlgoResult<MSTResult> {
    let result = wgraph_algorithms::prim_mst(&build_view(store), config);
    if let Ok(mst) = &result {
        debug!(edges = mst.edges.len(), total_weight = mst.total_weight, "spanning tree built");
    }
    result
}
