//! HITS (Hyperlink-Induced Topic Search) hub and authority scores.
//!
//! # Overview
//!
//! Two co-iterated scores per node:
//!
//! - **Hub**: how much a node sends toward good authorities; in a transfer
//!   graph, an address that funds important receivers.
//! - **Authority**: how much a node receives from good hubs.
//!
//! # Algorithm
//!
//! Weighted power co-iteration (Kleinberg, 1999):
//!
//! 1. Initialize both vectors to 1.
//! 2. Authority update: `a'(v) = Σ_{u→v} h(u)·w(u,v)`.
//! 3. Hub update: `h'(v) = Σ_{v→w} a'(w)·w(v,w)`.
//! 4. Normalize both to unit L2 norm.
//! 5. Stop when the L2 delta of the authority vector drops below tolerance,
//!    or at the iteration cap (best-effort result, warning logged).
//!
//! Equivalent to power iteration toward the principal eigenvectors of
//! `AᵀA` (authority) and `AAᵀ` (hub) for weighted adjacency `A`. A graph
//! with zero edges has all-zero hub and authority vectors by definition and
//! skips iteration entirely.

use serde::Serialize;
use tracing::{instrument, warn};

use crate::graph::Graph;
use crate::metrics::Weighting;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for a HITS run.
#[derive(Debug, Clone)]
pub struct HitsConfig {
    /// Convergence threshold on the L2 delta of the authority vector.
    /// Default: 1e-8.
    pub tolerance: f64,
    /// Iteration cap. Default: 100.
    pub max_iter: usize,
}

impl Default for HitsConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iter: 100,
        }
    }
}

// ---------------------------------------------------------------------------
// Result type
// ---------------------------------------------------------------------------

/// Result of one HITS run under one weighting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitsResult {
    /// Hub score per node (unit L2 norm, or all zero).
    pub hubs: Vec<f64>,
    /// Authority score per node (unit L2 norm, or all zero).
    pub authorities: Vec<f64>,
    /// Iterations performed.
    pub iterations: usize,
    /// Whether the delta dropped below tolerance before the cap.
    pub converged: bool,
}

// ---------------------------------------------------------------------------
// HITS
// ---------------------------------------------------------------------------

/// Compute hub and authority scores under the given weighting.
///
/// Each weighting variant is an independent run; runs share no iteration
/// state.
#[must_use]
#[instrument(skip(g, config), fields(nodes = g.node_count(), edges = g.edge_count()))]
pub fn hits(g: &Graph, weighting: Weighting, config: &HitsConfig) -> HitsResult {
    let n = g.node_count();
    if n == 0 {
        return HitsResult {
            hubs: Vec::new(),
            authorities: Vec::new(),
            iterations: 0,
            converged: true,
        };
    }
    if g.edge_count() == 0 {
        return HitsResult {
            hubs: vec![0.0; n],
            authorities: vec![0.0; n],
            iterations: 0,
            converged: true,
        };
    }

    let mut hub = vec![1.0f64; n];
    let mut auth = vec![1.0f64; n];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.max_iter {
        iterations += 1;

        let mut new_auth = vec![0.0f64; n];
        for (eid, e) in g.edges().iter().enumerate() {
            new_auth[e.to] += hub[e.from] * weighting.edge_weight(g, eid);
        }

        let mut new_hub = vec![0.0f64; n];
        for (eid, e) in g.edges().iter().enumerate() {
            new_hub[e.from] += new_auth[e.to] * weighting.edge_weight(g, eid);
        }

        normalize_l2(&mut new_auth);
        normalize_l2(&mut new_hub);

        let delta: f64 = auth
            .iter()
            .zip(new_auth.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt();

        auth = new_auth;
        hub = new_hub;

        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            iterations,
            tolerance = config.tolerance,
            "hits hit the iteration cap before converging"
        );
    }

    HitsResult {
        hubs: hub,
        authorities: auth,
        iterations,
        converged,
    }
}

/// Normalize to unit L2 norm; a zero vector is left untouched.
fn normalize_l2(v: &mut [f64]) {
    let norm: f64 = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
