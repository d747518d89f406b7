#![forbid(unsafe_code)]

//! `glowdeck` bundles the headless helpers used by the glowdeck dashboards and node-graph
//! editor.
//!
//! - `glowdeck_core` (re-exported at the root): numeric, tone, link and label helpers
//! - `glowdeck::graph`: cluster bounds and directed path search
//!
//! The free functions take every parameter explicitly. [`Deck`] fills in the optional ones
//! (padding, glow ceiling, normalization range) from a [`DeckConfig`].

pub use glowdeck_core::*;

pub use glowdeck_graph as graph;
pub use glowdeck_graph::{
    ClusterBounds, GraphEdge, GraphNode, GraphPoint, compute_cluster_bounds,
    compute_shortest_path, filter_nodes_by_cluster,
};

use glowdeck_core::config::CLUSTER_PADDING_KEY;
use glowdeck_graph::DEFAULT_CLUSTER_PADDING;

/// Config-driven entry point. Cheap to clone; holds no state besides its config.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    config: DeckConfig,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DeckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn cluster_padding(&self) -> f64 {
        self.config
            .get_f64(CLUSTER_PADDING_KEY)
            .unwrap_or(DEFAULT_CLUSTER_PADDING)
    }

    pub fn cluster_bounds(&self, nodes: &[GraphNode], cluster_id: &str) -> Option<ClusterBounds> {
        compute_cluster_bounds(nodes, cluster_id, self.cluster_padding())
    }

    /// Normalizes against the configured range (default `0..=100`).
    pub fn normalize(&self, value: f64) -> Result<f64> {
        let (min, max) = self.config.normalize_range();
        normalize(value, min, max)
    }

    pub fn glow_strength(&self, value: f64) -> Result<GlowStrength> {
        calculate_glow_strength(value, self.config.glow_max())
    }

    pub fn pulse_tone(&self, value: f64) -> Result<PulseTone> {
        get_pulse_tone(value, self.config.glow_max())
    }
}
