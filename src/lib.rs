//! wgraph
//!
//! A mutable weighted graph store with shortest-path, minimum-spanning-tree
//! and connectivity analyses, meant to sit behind an interactive editor.
//!
//! # Architecture
//!
//! - [`graph`]: the mutable store. Directed or undirected, fixed at
//!   construction; undirected edges are mirrored into both orientations.
//! - [`algo`]: adapter layer. Projects the store into a dense
//!   [`wgraph_algorithms::GraphView`] and runs the analyses from the
//!   `wgraph-algorithms` crate on it.
//!
//! Analyses take `&GraphStore` and return owned values; they never mutate the
//! store.
//!
//! ## Analyses
//!
//! - Dijkstra shortest paths (rejects negative edges when it meets them)
//! - Bellman-Ford shortest paths with per-target negative-cycle reporting
//! - Prim minimum spanning tree (undirected, connected graphs)
//! - Connectivity (strong connectivity for directed graphs) and weakly
//!   connected components
//!
//! ## Example Usage
//!
//! ```rust
//! use wgraph::graph::GraphStore;
//! use wgraph::algo;
//!
//! let mut store = GraphStore::undirected();
//! for node in ["A", "B", "C", "D"] {
//!     store.add_node(node);
//! }
//! store.add_edge("A", "B", 1.0).unwrap();
//! store.add_edge("B", "C", 2.0).unwrap();
//! store.add_edge("A", "C", 4.0).unwrap();
//! store.add_edge("C", "D", 1.0).unwrap();
//!
//! assert!(algo::is_connected(&store));
//!
//! let paths = algo::shortest_paths_dijkstra(&store, "A", &["D"]).unwrap();
//! assert_eq!(paths[0].cost, 4.0);
//!
//! let mst = algo::minimum_spanning_tree(&store).unwrap();
//! assert_eq!(mst.edges.len(), 3);
//! assert_eq!(mst.total_weight, 4.0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use graph::{Edge, EdgeKey, GraphError, GraphResult, GraphStore, NodeId};

pub use algo::{
    AlgoError, MSTResult, PathResult, PathStatus, PrimConfig, PrimStart, SpanningEdge, WccResult,
};

pub use wgraph_algorithms::AlgoResult;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
