#![forbid(unsafe_code)]

//! Graph helpers used by the glowdeck node-graph editor.
//!
//! The editor hands over plain node and edge lists; this crate answers two questions about them:
//! where a cluster of nodes sits on the canvas (`compute_cluster_bounds`) and how to walk from one
//! node to another along directed edges (`compute_shortest_path`).
//!
//! Every function borrows the caller's slices and returns freshly derived values. Nothing is
//! cached here, so callers that re-run a query on every drag event may memoize by input.

pub mod cluster;
pub mod graph;
pub mod model;

pub use cluster::{
    ALL_CLUSTERS, DEFAULT_CLUSTER_PADDING, compute_cluster_bounds, filter_nodes_by_cluster,
};
pub use graph::Adjacency;
pub use graph::alg::{compute_shortest_path, shortest_path_with};
pub use model::{ClusterBounds, GraphEdge, GraphNode, GraphPoint};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
