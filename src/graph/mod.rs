//! Mutable weighted graph store
//!
//! This module implements the data model the analyses read:
//! - Caller-labelled nodes, unique by label
//! - Weighted edges keyed by ordered `(source, target)` pairs
//! - Directed or undirected mode, fixed at construction

pub mod edge;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{EdgeKey, NodeId};
