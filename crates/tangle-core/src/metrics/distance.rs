//! All-pairs hop-distance statistics and harmonic centrality.
//!
//! # Overview
//!
//! One breadth-first sweep per source node over the forward adjacency,
//! `O(V·(V+E))` aggregate. Each sweep contributes to three accumulators:
//!
//! - the number of reachable ordered pairs `(u, v)`, `u ≠ v`;
//! - the sum of hop distances over those pairs;
//! - the in-harmonic vector: reaching `v` at distance `d` adds `1/d` to
//!   `harmonic[v]`.
//!
//! Unreachable pairs are excluded from both the sum and the count: not
//! infinite, not zero, just absent. Distances are hop counts; weight
//! channels are never consulted.
//!
//! # Parallelism
//!
//! Sweeps are independent, so sources are processed with a rayon
//! fold/reduce: each task owns its distance buffer and partial accumulators
//! and partials are summed afterwards. Nothing is shared mutably.

use std::collections::VecDeque;

use rayon::prelude::*;
use serde::Serialize;
use tracing::instrument;

use crate::graph::{Graph, NodeId};

const UNREACHED: u32 = u32::MAX;

/// Aggregate distance statistics plus the per-node harmonic centrality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceStats {
    /// Mean hop distance over reachable ordered pairs; 0.0 when no pair is
    /// reachable (see `reachable_pairs` to distinguish the degenerate case).
    pub average_path_length: f64,
    /// Number of ordered pairs `(u, v)`, `u ≠ v`, with `v` reachable from `u`.
    pub reachable_pairs: u64,
    /// In-harmonic centrality per node: `Σ 1/d(u, v)` over sources `u` that
    /// reach `v`. A node nobody reaches scores 0.
    pub harmonic: Vec<f64>,
}

/// Per-task sweep state: reusable BFS scratch plus running partials.
struct Sweep {
    dist: Vec<u32>,
    queue: VecDeque<NodeId>,
    hop_sum: u64,
    pairs: u64,
    harmonic: Vec<f64>,
}

impl Sweep {
    fn new(n: usize) -> Self {
        Self {
            dist: vec![UNREACHED; n],
            queue: VecDeque::new(),
            hop_sum: 0,
            pairs: 0,
            harmonic: vec![0.0; n],
        }
    }

    /// BFS from `source`, folding every newly reached node into the partials.
    fn run(&mut self, g: &Graph, source: NodeId) {
        self.dist.fill(UNREACHED);
        self.dist[source] = 0;
        self.queue.push_back(source);

        while let Some(u) = self.queue.pop_front() {
            let next = self.dist[u] + 1;
            for e in g.out_edges(u) {
                let v = e.node;
                if self.dist[v] == UNREACHED {
                    self.dist[v] = next;
                    self.pairs += 1;
                    self.hop_sum += u64::from(next);
                    self.harmonic[v] += 1.0 / f64::from(next);
                    self.queue.push_back(v);
                }
            }
        }
    }

    fn into_partial(self) -> Partial {
        Partial {
            hop_sum: self.hop_sum,
            pairs: self.pairs,
            harmonic: self.harmonic,
        }
    }
}

struct Partial {
    hop_sum: u64,
    pairs: u64,
    harmonic: Vec<f64>,
}

impl Partial {
    fn empty(n: usize) -> Self {
        Self {
            hop_sum: 0,
            pairs: 0,
            harmonic: vec![0.0; n],
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.hop_sum += other.hop_sum;
        self.pairs += other.pairs;
        for (a, b) in self.harmonic.iter_mut().zip(other.harmonic) {
            *a += b;
        }
        self
    }
}

/// Run a breadth-first sweep from every node and aggregate distance
/// statistics and harmonic centrality.
#[must_use]
#[instrument(skip(g), fields(nodes = g.node_count(), edges = g.edge_count()))]
pub fn distance_stats(g: &Graph) -> DistanceStats {
    let n = g.node_count();
    if n == 0 {
        return DistanceStats {
            average_path_length: 0.0,
            reachable_pairs: 0,
            harmonic: Vec::new(),
        };
    }

    let partial = (0..n)
        .into_par_iter()
        .fold(
            || Sweep::new(n),
            |mut sweep, source| {
                sweep.run(g, source);
                sweep
            },
        )
        .map(Sweep::into_partial)
        .reduce(|| Partial::empty(n), Partial::merge);

    DistanceStats {
        average_path_length: mean_distance(partial.hop_sum, partial.pairs),
        reachable_pairs: partial.pairs,
        harmonic: partial.harmonic,
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean_distance(hop_sum: u64, pairs: u64) -> f64 {
    if pairs == 0 {
        return 0.0;
    }
    hop_sum as f64 / pairs as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
