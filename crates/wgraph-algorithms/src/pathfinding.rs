//! Pathfinding algorithms
//!
//! Single-source shortest paths: BFS (hop count), Dijkstra (non-negative
//! weights) and Bellman-Ford (arbitrary weights, negative-cycle detection).

use super::common::{AlgoError, AlgoResult, GraphView, NodeId};
use super::connectivity::{reachable, Direction};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// How a single target was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PathStatus {
    /// A shortest path exists
    Reached,
    /// No path from the source
    Unreachable,
    /// The target is reachable through a negative-weight cycle, so no
    /// shortest path exists (Bellman-Ford only)
    NegativeCycle,
}

/// Result of a pathfinding algorithm for one target
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    /// `+inf` when unreachable, `-inf` when behind a negative cycle
    pub cost: f64,
    /// Nodes from source to target inclusive, `None` unless reached
    pub path: Option<Vec<NodeId>>,
    pub status: PathStatus,
}

impl PathResult {
    pub fn is_reached(&self) -> bool {
        self.status == PathStatus::Reached
    }

    fn unreachable(source: NodeId, target: NodeId) -> Self {
        PathResult {
            source,
            target,
            cost: f64::INFINITY,
            path: None,
            status: PathStatus::Unreachable,
        }
    }

    fn negative_cycle(source: NodeId, target: NodeId) -> Self {
        PathResult {
            source,
            target,
            cost: f64::NEG_INFINITY,
            path: None,
            status: PathStatus::NegativeCycle,
        }
    }
}

/// Common interface of the single-source shortest path algorithms.
///
/// `targets == None` asks for every node of the view, in index order.
pub trait ShortestPathSolver {
    fn shortest_paths(
        &self,
        view: &GraphView,
        source: &NodeId,
        targets: Option<&[NodeId]>,
    ) -> AlgoResult<Vec<PathResult>>;
}

/// Dijkstra's algorithm, rejects negative edges
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

/// Bellman-Ford algorithm, reports negative cycles per target
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFord;

impl ShortestPathSolver for Dijkstra {
    fn shortest_paths(
        &self,
        view: &GraphView,
        source: &NodeId,
        targets: Option<&[NodeId]>,
    ) -> AlgoResult<Vec<PathResult>> {
        dijkstra(view, source, targets)
    }
}

impl ShortestPathSolver for BellmanFord {
    fn shortest_paths(
        &self,
        view: &GraphView,
        source: &NodeId,
        targets: Option<&[NodeId]>,
    ) -> AlgoResult<Vec<PathResult>> {
        bellman_ford(view, source, targets)
    }
}

/// Validate the source and the requested targets before any work is done.
fn resolve_query(
    view: &GraphView,
    source: &NodeId,
    targets: Option<&[NodeId]>,
) -> AlgoResult<(usize, Vec<usize>)> {
    let source_idx = view.require_index(source)?;
    let target_idxs = match targets {
        Some(targets) => targets
            .iter()
            .map(|t| view.require_index(t))
            .collect::<AlgoResult<Vec<_>>>()?,
        None => (0..view.node_count).collect(),
    };
    Ok((source_idx, target_idxs))
}

/// Walk parent pointers back to the source.
///
/// Gives up after `node_count` steps, which only happens if the parent chain
/// loops.
fn reconstruct_path(
    view: &GraphView,
    parent: &[Option<usize>],
    source_idx: usize,
    target_idx: usize,
) -> Option<Vec<NodeId>> {
    let mut path = vec![view.node(target_idx).clone()];
    let mut curr = target_idx;
    while curr != source_idx {
        if path.len() > view.node_count {
            return None;
        }
        curr = parent[curr]?;
        path.push(view.node(curr).clone());
    }
    path.reverse();
    Some(path)
}

fn collect_results(
    view: &GraphView,
    source_idx: usize,
    target_idxs: &[usize],
    dist: &[f64],
    parent: &[Option<usize>],
) -> Vec<PathResult> {
    let source = view.node(source_idx);
    target_idxs
        .iter()
        .map(|&t| {
            let target = view.node(t).clone();
            if dist[t] == f64::INFINITY {
                return PathResult::unreachable(source.clone(), target);
            }
            match reconstruct_path(view, parent, source_idx, t) {
                Some(path) => PathResult {
                    source: source.clone(),
                    target,
                    cost: dist[t],
                    path: Some(path),
                    status: PathStatus::Reached,
                },
                None => PathResult::negative_cycle(source.clone(), target),
            }
        })
        .collect()
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// `cost` is the hop count. Returns `None` when either node is missing or
/// the target is unreachable.
pub fn bfs(view: &GraphView, source: &NodeId, target: &NodeId) -> Option<PathResult> {
    let source_idx = view.index_of(source.as_str())?;
    let target_idx = view.index_of(target.as_str())?;

    let mut queue = VecDeque::new();
    let mut parent: Vec<Option<usize>> = vec![None; view.node_count];
    let mut visited = vec![false; view.node_count];

    queue.push_back(source_idx);
    visited[source_idx] = true;

    while let Some(current_idx) = queue.pop_front() {
        if current_idx == target_idx {
            let path = reconstruct_path(view, &parent, source_idx, target_idx)?;
            return Some(PathResult {
                source: source.clone(),
                target: target.clone(),
                cost: (path.len() - 1) as f64,
                path: Some(path),
                status: PathStatus::Reached,
            });
        }

        for &next_idx in view.successors(current_idx) {
            if !visited[next_idx] {
                visited[next_idx] = true;
                parent[next_idx] = Some(current_idx);
                queue.push_back(next_idx);
            }
        }
    }

    None
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node_idx: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; equal costs pop the lower index first
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// One relaxation pass serves every target. The call fails with
/// [`AlgoError::NegativeWeightRejected`] as soon as relaxation examines an
/// edge with a negative weight; negative edges that are never examined (for
/// example, unreachable from `source`) do not matter.
pub fn dijkstra(
    view: &GraphView,
    source: &NodeId,
    targets: Option<&[NodeId]>,
) -> AlgoResult<Vec<PathResult>> {
    let (source_idx, target_idxs) = resolve_query(view, source, targets)?;

    let n = view.node_count;
    let mut dist = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[source_idx] = 0.0;
    heap.push(State { cost: 0.0, node_idx: source_idx });

    while let Some(State { cost, node_idx }) = heap.pop() {
        if cost > dist[node_idx] {
            continue;
        }

        for (next_idx, weight) in view.out_edges(node_idx) {
            if weight < 0.0 {
                return Err(AlgoError::NegativeWeightRejected {
                    from: view.node(node_idx).clone(),
                    to: view.node(next_idx).clone(),
                    weight,
                });
            }

            let next_cost = cost + weight;
            if next_cost < dist[next_idx] {
                dist[next_idx] = next_cost;
                parent[next_idx] = Some(node_idx);
                heap.push(State { cost: next_cost, node_idx: next_idx });
            }
        }
    }

    Ok(collect_results(view, source_idx, &target_idxs, &dist, &parent))
}

/// Bellman-Ford Algorithm (Weighted Shortest Path, negative weights allowed)
///
/// Runs up to `|V| - 1` relaxation rounds over every edge, stopping early
/// once a round changes nothing, then one detection round. Nodes that still
/// improve in the detection round sit on or behind a negative cycle; they and
/// everything reachable from them are reported as
/// [`PathStatus::NegativeCycle`]. In an undirected view a negative edge is a
/// negative cycle of length two.
pub fn bellman_ford(
    view: &GraphView,
    source: &NodeId,
    targets: Option<&[NodeId]>,
) -> AlgoResult<Vec<PathResult>> {
    let (source_idx, target_idxs) = resolve_query(view, source, targets)?;

    let n = view.node_count;
    let mut dist = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    dist[source_idx] = 0.0;

    for _ in 1..n {
        let mut updated = false;
        for (u, v, w) in view.edges() {
            if dist[u] == f64::INFINITY {
                continue;
            }
            let candidate = dist[u] + w;
            if candidate < dist[v] {
                dist[v] = candidate;
                parent[v] = Some(u);
                updated = true;
            }
        }
        if !updated {
            break;
        }
    }

    let mut on_cycle = vec![false; n];
    for (u, v, w) in view.edges() {
        if dist[u] != f64::INFINITY && dist[u] + w < dist[v] {
            on_cycle[v] = true;
        }
    }

    let mut affected = vec![false; n];
    for start in (0..n).filter(|&i| on_cycle[i]) {
        if affected[start] {
            continue;
        }
        let (seen, _) = reachable(view, start, Direction::Forward);
        for (idx, hit) in seen.into_iter().enumerate() {
            affected[idx] |= hit;
        }
    }

    let mut results = collect_results(view, source_idx, &target_idxs, &dist, &parent);
    for (result, &t) in results.iter_mut().zip(&target_idxs) {
        if affected[t] {
            *result = PathResult::negative_cycle(result.source.clone(), result.target.clone());
        }
    }

    Ok(results)
}
