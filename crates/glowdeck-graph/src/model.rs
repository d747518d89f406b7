//! Plain data exchanged with the editor.
//!
//! Field names serialize in camelCase so the same JSON the UI already keeps in its stores can be
//! deserialized directly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub x: f64,
    pub y: f64,
}

impl GraphPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique within one node list. Lookups take the first match when it is not.
    pub id: String,
    pub position: GraphPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            position: GraphPoint::new(x, y),
            cluster: None,
        }
    }

    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Exact, case-sensitive cluster match. A node without a cluster matches nothing.
    pub fn in_cluster(&self, cluster_id: &str) -> bool {
        self.cluster.as_deref() == Some(cluster_id)
    }
}

/// A directed edge. Endpoints are node ids and may name nodes that are not in the visible set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

impl GraphEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Padded axis-aligned box around the nodes of one cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterBounds {
    pub cluster_id: String,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl ClusterBounds {
    /// Derives size and center from already padded extents.
    pub fn from_extents(
        cluster_id: impl Into<String>,
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    ) -> Self {
        let width = max_x - min_x;
        let height = max_y - min_y;
        Self {
            cluster_id: cluster_id.into(),
            min_x,
            max_x,
            min_y,
            max_y,
            width,
            height,
            center_x: min_x + width / 2.0,
            center_y: min_y + height / 2.0,
        }
    }

    pub fn center(&self) -> GraphPoint {
        GraphPoint::new(self.center_x, self.center_y)
    }

    pub fn contains(&self, p: GraphPoint) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}
