//! Summary statistics for a graph snapshot.
//!
//! # Statistics Provided
//!
//! - **node_count / edge_count**: Snapshot dimensions.
//! - **density**: `edge_count / (node_count * (node_count - 1))`. Zero for
//!   graphs with fewer than two nodes.
//! - **isolated_node_count**: Nodes with no in-edges and no out-edges.
//! - **max_in_degree / max_out_degree**: Degree extrema, counting parallel
//!   edges individually.
//! - **weak_component_count / strong_component_count**: Partition sizes from
//!   the connectivity engine.
//! - **largest_weak_component / coverage**: Size of the biggest weak
//!   component and the fraction of all nodes it contains.

use serde::Serialize;

use crate::components::{strong_components, weak_components};
use crate::graph::Graph;

/// Summary statistics computed from a [`Graph`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Number of nodes in the snapshot.
    pub node_count: usize,
    /// Number of edges, counting parallel edges individually.
    pub edge_count: usize,
    /// Directed density in `[0.0, 1.0]` (can exceed 1.0 on multigraphs).
    pub density: f64,
    /// Nodes with no incident edges.
    pub isolated_node_count: usize,
    /// Maximum in-degree over all nodes.
    pub max_in_degree: usize,
    /// Maximum out-degree over all nodes.
    pub max_out_degree: usize,
    /// Number of weakly connected components.
    pub weak_component_count: usize,
    /// Number of strongly connected components.
    pub strong_component_count: usize,
    /// Node count of the largest weak component.
    pub largest_weak_component: usize,
    /// `largest_weak_component / node_count`; 0.0 for the empty graph.
    pub coverage: f64,
}

impl GraphStats {
    /// Compute all statistics for one snapshot.
    #[must_use]
    pub fn from_graph(g: &Graph) -> Self {
        let node_count = g.node_count();
        let edge_count = g.edge_count();

        let isolated_node_count = (0..node_count)
            .filter(|&v| g.in_degree(v) == 0 && g.out_degree(v) == 0)
            .count();
        let max_in_degree = (0..node_count).map(|v| g.in_degree(v)).max().unwrap_or(0);
        let max_out_degree = (0..node_count).map(|v| g.out_degree(v)).max().unwrap_or(0);

        let weak = weak_components(g);
        let strong = strong_components(g);
        let largest_weak_component = weak.largest_size();

        Self {
            node_count,
            edge_count,
            density: compute_density(node_count, edge_count),
            isolated_node_count,
            max_in_degree,
            max_out_degree,
            weak_component_count: weak.count,
            strong_component_count: strong.count,
            largest_weak_component,
            coverage: compute_ratio(largest_weak_component, node_count),
        }
    }

    /// Return `true` if the snapshot has no edges.
    #[must_use]
    pub fn is_edgeless(&self) -> bool {
        self.edge_count == 0
    }
}

// ---------------------------------------------------------------------------
// Internal helpers (cast precision suppressed at function scope)
// ---------------------------------------------------------------------------

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_edges = (node_count * (node_count - 1)) as f64;
    edge_count as f64 / max_edges
}

#[allow(clippy::cast_precision_loss)]
fn compute_ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0_f64;
    }
    part as f64 / whole as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
