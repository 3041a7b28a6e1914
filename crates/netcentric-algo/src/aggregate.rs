//! Reduction of per-node scores and graph structure into summary rows.

use netcentric_graph::{Graph, NodeId};

use crate::components::connected_components;
use crate::error::MetricsError;

/// Structural summary of one (sub)graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSummary {
    pub components: usize,
    pub nodes: usize,
    pub edges: usize,
}

/// One output row: the metrics of a whole network or of one subnetwork.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRow {
    /// Label of the source the graph was loaded from.
    pub source: String,
    /// `whole_network` or `subnetwork_<index>`.
    pub subnetwork: String,
    pub component_count: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub average_closeness: f64,
}

/// `(component count, node count, edge count)` of `graph`.
pub fn summarize(graph: &Graph) -> GraphSummary {
    GraphSummary {
        components: connected_components(graph).len(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
    }
}

/// Arithmetic mean of a centrality map.
///
/// Zero entries is an error, never a silent NaN: an empty (sub)graph has no
/// average to report and must surface as a per-source failure.
pub fn average_closeness(scores: &[(NodeId, f64)]) -> Result<f64, MetricsError> {
    if scores.is_empty() {
        return Err(MetricsError::EmptyGraph);
    }
    let sum: f64 = scores.iter().map(|(_, c)| c).sum();
    Ok(sum / scores.len() as f64)
}
