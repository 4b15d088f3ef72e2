//! Damped PageRank over unweighted or per-channel-weighted transitions.
//!
//! # Overview
//!
//! PageRank scores an address by how much transfer flow (or link structure,
//! in the unweighted variant) concentrates on it under a random-surfer
//! model.
//!
//! # Algorithm
//!
//! Power iteration on the damped transition:
//!
//! ```text
//! score'(v) = (1-d)/n + d · [ Σ_{u→v} score(u)·w(u,v)/outWeight(u)
//!                             + (Σ_{dangling u} score(u)) / n ]
//! ```
//!
//! `outWeight(u)` is the out-degree in the unweighted variant and the summed
//! outgoing channel weight in a weighted one. A dangling node
//! (`outWeight(u) = 0`, which includes a node whose out-edges all carry zero
//! weight) redistributes its whole mass uniformly every iteration, so the
//! score vector keeps summing to 1.
//!
//! Iteration stops when the L1 change between successive vectors drops below
//! the configured tolerance, or at the iteration cap. Hitting the cap is not
//! an error: the last vector is returned with `converged = false` and a
//! warning is logged.

use serde::Serialize;
use tracing::{instrument, warn};

use crate::graph::{Graph, NodeId};
use crate::metrics::Weighting;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for a PageRank run.
#[derive(Debug, Clone)]
pub struct PageRankConfig {
    /// Damping factor (probability of following an edge vs teleporting).
    /// Default: 0.85.
    pub damping: f64,
    /// Convergence threshold on the L1 norm of the score delta.
    /// Default: 1e-10.
    pub tolerance: f64,
    /// Iteration cap. Default: 200.
    pub max_iter: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-10,
            max_iter: 200,
        }
    }
}

// ---------------------------------------------------------------------------
// Result type
// ---------------------------------------------------------------------------

/// Result of one PageRank run under one weighting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRankResult {
    /// Score per node; sums to 1 within numerical tolerance.
    pub scores: Vec<f64>,
    /// Iterations performed.
    pub iterations: usize,
    /// Whether the L1 delta dropped below tolerance before the cap.
    pub converged: bool,
}

// ---------------------------------------------------------------------------
// PageRank
// ---------------------------------------------------------------------------

/// Compute PageRank under the given weighting.
///
/// Each weighting variant is an independent run with its own `outWeight`
/// normalization; runs share no iteration state.
#[must_use]
#[instrument(skip(g, config), fields(nodes = g.node_count(), edges = g.edge_count()))]
pub fn pagerank(g: &Graph, weighting: Weighting, config: &PageRankConfig) -> PageRankResult {
    let n = g.node_count();
    if n == 0 {
        return PageRankResult {
            scores: Vec::new(),
            iterations: 0,
            converged: true,
        };
    }

    let n_f64 = node_count_f64(n);
    let base = (1.0 - config.damping) / n_f64;

    // Per-source normalization, then a fixed per-edge transition share.
    let mut out_weight = vec![0.0f64; n];
    for (eid, e) in g.edges().iter().enumerate() {
        out_weight[e.from] += weighting.edge_weight(g, eid);
    }
    let share: Vec<f64> = g
        .edges()
        .iter()
        .enumerate()
        .map(|(eid, e)| {
            if out_weight[e.from] > 0.0 {
                weighting.edge_weight(g, eid) / out_weight[e.from]
            } else {
                0.0
            }
        })
        .collect();
    let dangling: Vec<NodeId> = (0..n).filter(|&u| out_weight[u] == 0.0).collect();

    let mut scores = vec![1.0 / n_f64; n];
    let mut next = vec![0.0f64; n];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.max_iter {
        iterations += 1;

        let dangling_mass: f64 = dangling.iter().map(|&u| scores[u]).sum();
        let floor = base + config.damping * dangling_mass / n_f64;
        next.fill(floor);

        for (eid, e) in g.edges().iter().enumerate() {
            next[e.to] += config.damping * scores[e.from] * share[eid];
        }

        let delta: f64 = scores
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut scores, &mut next);

        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            iterations,
            tolerance = config.tolerance,
            "pagerank hit the iteration cap before converging"
        );
    }

    PageRankResult {
        scores,
        iterations,
        converged,
    }
}

#[allow(clippy::cast_precision_loss)]
fn node_count_f64(n: usize) -> f64 {
    n as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
