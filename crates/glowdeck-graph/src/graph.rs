//! Directed adjacency index over a borrowed edge list.
//!
//! Successor lists keep the order in which edges appear in the input. Path search relies on that
//! order to pick the same path every time when several shortest paths exist.

use crate::model::GraphEdge;
use rustc_hash::FxBuildHasher;

pub mod alg;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct Adjacency<'a> {
    out: HashMap<&'a str, Vec<&'a str>>,
    edge_count: usize,
}

impl<'a> Adjacency<'a> {
    pub fn from_edges(edges: &'a [GraphEdge]) -> Self {
        let mut out: HashMap<&'a str, Vec<&'a str>> = HashMap::default();
        for e in edges {
            // Duplicate edges are kept; the search skips the repeat through its visited set.
            out.entry(e.from.as_str()).or_default().push(e.to.as_str());
        }
        Self {
            out,
            edge_count: edges.len(),
        }
    }

    /// Targets of `v`'s outgoing edges, in edge list order. Unknown ids have none.
    pub fn successors(&self, v: &str) -> &[&'a str] {
        self.out.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `v` is the `from` end of at least one edge.
    pub fn contains_source(&self, v: &str) -> bool {
        self.out.contains_key(v)
    }

    pub fn source_count(&self) -> usize {
        self.out.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}
