pub mod common;
pub mod connectivity;
pub mod pathfinding;
pub mod mst;

pub use common::{AlgoError, AlgoResult, GraphView, NodeId};
pub use connectivity::{is_connected, reachable, weakly_connected_components, Direction, WccResult};
pub use pathfinding::{
    bellman_ford, bfs, dijkstra, BellmanFord, Dijkstra, PathResult, PathStatus, ShortestPathSolver,
};
pub use mst::{prim_mst, MSTResult, PrimConfig, PrimStart, SpanningEdge};
