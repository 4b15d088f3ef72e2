//! Analytics engines over one immutable [`Graph`](crate::graph::Graph).
//!
//! # Overview
//!
//! Each engine answers a different question about a transfer graph:
//!
//! - **Degree/strength** (`degree`): How many transfers touch each address,
//!   and how much flows through it per weight channel?
//! - **Distance & harmonic centrality** (`distance`): How many hops separate
//!   addresses, and which addresses are reachable cheaply from everywhere?
//! - **PageRank** (`pagerank`): Where does a random surfer following
//!   transfers (weighted or not) spend its time?
//! - **HITS** (`hits`): Which addresses are strong senders to important
//!   receivers (hubs), and which are important receivers (authorities)?
//!
//! All engines are pure functions of the snapshot; none mutates shared state
//! and any subset may run concurrently.

pub mod degree;
pub mod distance;
pub mod hits;
pub mod pagerank;

use crate::graph::{EdgeId, Graph};

/// Which per-edge weight a link-analysis run consults.
///
/// The distance engine deliberately takes no `Weighting`; hop distance is
/// unweighted by definition here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// Every edge counts 1.
    Unweighted,
    /// Use the given weight-channel column.
    Channel(usize),
}

impl Weighting {
    /// The effective weight of `edge` under this weighting.
    ///
    /// # Panics
    ///
    /// Panics if a [`Weighting::Channel`] index is out of range for `g`.
    #[must_use]
    pub fn edge_weight(self, g: &Graph, edge: EdgeId) -> f64 {
        match self {
            Self::Unweighted => 1.0,
            Self::Channel(c) => g.weight(c, edge),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn weighting_selects_channel_or_unit() {
        let mut b = GraphBuilder::new(["transfers", "amount"]);
        b.add_edge(0, 1, &[5.0, 250.0]).expect("edge");
        let g = b.finish();

        assert!((Weighting::Unweighted.edge_weight(&g, 0) - 1.0).abs() < f64::EPSILON);
        assert!((Weighting::Channel(0).edge_weight(&g, 0) - 5.0).abs() < f64::EPSILON);
        assert!((Weighting::Channel(1).edge_weight(&g, 0) - 250.0).abs() < f64::EPSILON);
    }
}
