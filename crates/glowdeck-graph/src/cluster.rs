//! Cluster filtering and bounding boxes.

use crate::model::{ClusterBounds, GraphNode};

/// Margin added around a cluster's tight box when the caller has no preference.
pub const DEFAULT_CLUSTER_PADDING: f64 = 48.0;

/// Filter value that keeps every node.
pub const ALL_CLUSTERS: &str = "all";

/// Bounding box of the nodes in `cluster_id`, grown by `padding` on every side.
///
/// Returns `None` when no node belongs to the cluster; an empty cluster has no box rather than a
/// zero-sized one.
pub fn compute_cluster_bounds(
    nodes: &[GraphNode],
    cluster_id: &str,
    padding: f64,
) -> Option<ClusterBounds> {
    let mut members = nodes.iter().filter(|n| n.in_cluster(cluster_id));
    let first = members.next()?;

    let mut min_x = first.position.x;
    let mut max_x = first.position.x;
    let mut min_y = first.position.y;
    let mut max_y = first.position.y;
    for n in members {
        min_x = min_x.min(n.position.x);
        max_x = max_x.max(n.position.x);
        min_y = min_y.min(n.position.y);
        max_y = max_y.max(n.position.y);
    }

    Some(ClusterBounds::from_extents(
        cluster_id,
        min_x - padding,
        max_x + padding,
        min_y - padding,
        max_y + padding,
    ))
}

/// Nodes visible under the `cluster_id` filter, in their original order.
///
/// [`ALL_CLUSTERS`] and the empty string both disable filtering. The editor's cluster picker
/// sends `""` before the user has chosen anything and expects the full graph back.
pub fn filter_nodes_by_cluster<'a>(nodes: &'a [GraphNode], cluster_id: &str) -> Vec<&'a GraphNode> {
    if nodes.is_empty() {
        return Vec::new();
    }
    if cluster_id.is_empty() || cluster_id == ALL_CLUSTERS {
        return nodes.iter().collect();
    }
    nodes.iter().filter(|n| n.in_cluster(cluster_id)).collect()
}
