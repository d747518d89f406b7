//! Breadth-first path search.

use super::Adjacency;
use crate::model::GraphEdge;
use rustc_hash::FxBuildHasher;
use std::collections::VecDeque;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Shortest directed path (fewest edges) from `start_id` to `target_id`.
///
/// The returned ids start with `start_id` and end with `target_id`. An empty vector means there
/// is no path, which also covers empty ids and a start node with no outgoing edges. When the two
/// ids are equal the path is that single id, even without edges.
pub fn compute_shortest_path(edges: &[GraphEdge], start_id: &str, target_id: &str) -> Vec<String> {
    if start_id.is_empty() || target_id.is_empty() {
        return Vec::new();
    }
    if start_id == target_id {
        return vec![start_id.to_string()];
    }
    if edges.is_empty() {
        return Vec::new();
    }

    let adj = Adjacency::from_edges(edges);
    shortest_path_with(&adj, start_id, target_id)
}

/// Same as [`compute_shortest_path`], over an index the caller already built.
pub fn shortest_path_with(adj: &Adjacency<'_>, start_id: &str, target_id: &str) -> Vec<String> {
    if start_id.is_empty() || target_id.is_empty() {
        return Vec::new();
    }
    if start_id == target_id {
        return vec![start_id.to_string()];
    }
    if !adj.contains_source(start_id) {
        tracing::trace!(start = start_id, "start node has no outgoing edges");
        return Vec::new();
    }

    // Nodes are marked when enqueued so each one gets exactly one parent: the first (shortest,
    // then earliest in edge order) discovery.
    let mut visited: HashSet<&str> = HashSet::default();
    visited.insert(start_id);
    let mut parent: HashMap<&str, &str> = HashMap::default();
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(start_id);

    while let Some(v) = queue.pop_front() {
        if v == target_id {
            let path = reconstruct_path(&parent, target_id);
            tracing::trace!(
                start = start_id,
                target = target_id,
                hops = path.len() - 1,
                "path found"
            );
            return path;
        }
        for &w in adj.successors(v) {
            if visited.insert(w) {
                parent.insert(w, v);
                queue.push_back(w);
            }
        }
    }

    tracing::trace!(
        start = start_id,
        target = target_id,
        visited = visited.len(),
        "target unreachable"
    );
    Vec::new()
}

fn reconstruct_path(parent: &HashMap<&str, &str>, target_id: &str) -> Vec<String> {
    let mut path = vec![target_id.to_string()];
    let mut cur = target_id;
    while let Some(&p) = parent.get(cur) {
        path.push(p.to_string());
        cur = p;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(&str, &str)]) -> Vec<GraphEdge> {
        pairs.iter().map(|(v, w)| GraphEdge::new(*v, *w)).collect()
    }

    #[test]
    fn one_hop_beats_two() {
        let e = edges(&[("a", "b"), ("b", "c"), ("a", "c")]);
        assert_eq!(compute_shortest_path(&e, "a", "c"), ["a", "c"]);
    }

    #[test]
    fn ties_follow_edge_order() {
        let e = edges(&[("s", "x"), ("s", "y"), ("y", "t"), ("x", "t")]);
        assert_eq!(compute_shortest_path(&e, "s", "t"), ["s", "x", "t"]);

        let e = edges(&[("s", "y"), ("s", "x"), ("y", "t"), ("x", "t")]);
        assert_eq!(compute_shortest_path(&e, "s", "t"), ["s", "y", "t"]);
    }

    #[test]
    fn prebuilt_index_answers_repeated_queries() {
        let e = edges(&[("a", "b"), ("b", "c"), ("c", "a")]);
        let adj = Adjacency::from_edges(&e);
        assert_eq!(shortest_path_with(&adj, "a", "c"), ["a", "b", "c"]);
        assert_eq!(shortest_path_with(&adj, "c", "b"), ["c", "a", "b"]);
        assert_eq!(shortest_path_with(&adj, "b", "b"), ["b"]);
        assert!(shortest_path_with(&adj, "", "b").is_empty());
    }
}
