//! Graph construction from an ordered stream of edge records.
//!
//! # Overview
//!
//! [`GraphBuilder`] accepts `(from, to, weights)` records one at a time and
//! produces an immutable [`Graph`]. The channel set is declared up front and
//! every record must match its arity; weights must be finite and
//! non-negative. Both checks fail fast with the offending record's position.
//!
//! ## Node Count
//!
//! The node count is `1 + max id` over all referenced ids. Sparse id spaces
//! therefore materialize isolated zero-degree nodes below the maximum, which
//! is what the downstream engines expect (an address with no transfers is
//! still an address).
//!
//! ## Ingestion Profiles
//!
//! The builder does not deduplicate parallel edges. Callers feeding the
//! multigraph profile pass every transfer individually; callers feeding the
//! collapsed profile guarantee at most one record per ordered pair with
//! pre-summed weights. Either way the supplied edges are the ground truth.

#![allow(clippy::module_name_repetitions)]

use tracing::instrument;

use super::{Csr, Edge, Endpoint, Graph, NodeId};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors raised while feeding records into a [`GraphBuilder`].
///
/// Both variants are fatal for the whole ingestion: a stream that trips
/// either check never produces a `Graph`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// A record's weight tuple does not match the declared channel set.
    #[error("record {record}: expected {expected} weight values, found {found}")]
    ChannelArity {
        /// Zero-based position of the offending record.
        record: usize,
        /// Declared channel count.
        expected: usize,
        /// Arity actually supplied.
        found: usize,
    },
    /// A weight value is negative, NaN, or infinite.
    #[error("record {record}: channel '{channel}' has invalid weight {value}")]
    InvalidWeight {
        /// Zero-based position of the offending record.
        record: usize,
        /// Name of the offending channel.
        channel: String,
        /// The rejected value.
        value: f64,
    },
}

// ---------------------------------------------------------------------------
// GraphBuilder
// ---------------------------------------------------------------------------

/// Accumulates edge records and builds the immutable [`Graph`] snapshot.
///
/// Construction is strictly sequential; [`finish`](Self::finish) is the
/// point after which the graph is shared read-only with the engines.
#[derive(Debug)]
pub struct GraphBuilder {
    channels: Vec<String>,
    edges: Vec<Edge>,
    /// `weights[channel]` is that channel's column, parallel to `edges`.
    weights: Vec<Vec<f64>>,
    max_id: Option<NodeId>,
    hasher: blake3::Hasher,
}

impl GraphBuilder {
    /// Create a builder with a fixed, ordered set of weight channels.
    ///
    /// An empty channel set is valid and yields a purely structural graph.
    #[must_use]
    pub fn new<I, S>(channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let channels: Vec<String> = channels.into_iter().map(Into::into).collect();

        let mut hasher = blake3::Hasher::new();
        for name in &channels {
            hasher.update(name.as_bytes());
            hasher.update(b"\x00");
        }

        let weights = vec![Vec::new(); channels.len()];
        Self {
            channels,
            edges: Vec::new(),
            weights,
            max_id: None,
            hasher,
        }
    }

    /// Pre-allocate for an expected number of edges.
    #[must_use]
    pub fn with_capacity<I, S>(channels: I, edges: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut b = Self::new(channels);
        b.edges.reserve(edges);
        for column in &mut b.weights {
            column.reserve(edges);
        }
        b
    }

    /// Append one edge record.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ChannelArity`] when `weights` does not match the
    /// declared channel count, and [`BuildError::InvalidWeight`] when any
    /// value is negative or non-finite. The builder is unchanged on error.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        weights: &[f64],
    ) -> Result<(), BuildError> {
        let record = self.edges.len();

        if weights.len() != self.channels.len() {
            return Err(BuildError::ChannelArity {
                record,
                expected: self.channels.len(),
                found: weights.len(),
            });
        }
        for (channel, &w) in self.channels.iter().zip(weights) {
            if !w.is_finite() || w < 0.0 {
                return Err(BuildError::InvalidWeight {
                    record,
                    channel: channel.clone(),
                    value: w,
                });
            }
        }

        self.hasher.update(&(from as u64).to_le_bytes());
        self.hasher.update(&(to as u64).to_le_bytes());
        for &w in weights {
            self.hasher.update(&w.to_bits().to_le_bytes());
        }

        self.edges.push(Edge { from, to });
        for (column, &w) in self.weights.iter_mut().zip(weights) {
            column.push(w);
        }
        self.max_id = Some(self.max_id.map_or(from.max(to), |m| m.max(from).max(to)));
        Ok(())
    }

    /// Build the immutable snapshot: dense node range, forward and backward
    /// CSR adjacency, content hash.
    #[must_use]
    #[instrument(skip(self), fields(edges = self.edges.len()))]
    pub fn finish(self) -> Graph {
        let node_count = self.max_id.map_or(0, |m| m + 1);
        let fwd = build_csr(node_count, &self.edges, Direction::Forward);
        let back = build_csr(node_count, &self.edges, Direction::Backward);
        let content_hash = format!("blake3:{}", self.hasher.finalize());

        Graph {
            node_count,
            edges: self.edges,
            channels: self.channels,
            weights: self.weights,
            fwd,
            back,
            content_hash,
        }
    }
}

// ---------------------------------------------------------------------------
// CSR construction
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn key(self, e: Edge) -> NodeId {
        match self {
            Self::Forward => e.from,
            Self::Backward => e.to,
        }
    }

    fn other(self, e: Edge) -> NodeId {
        match self {
            Self::Forward => e.to,
            Self::Backward => e.from,
        }
    }
}

/// Counting-sort edges into CSR layout: one prefix-sum pass over the counts,
/// one placement pass over the edges. `O(V + E)`.
fn build_csr(node_count: usize, edges: &[Edge], dir: Direction) -> Csr {
    let mut offsets = vec![0usize; node_count + 1];
    for &e in edges {
        offsets[dir.key(e) + 1] += 1;
    }
    for i in 1..offsets.len() {
        offsets[i] += offsets[i - 1];
    }

    let mut cursor = offsets.clone();
    let mut entries = vec![Endpoint::default(); edges.len()];
    for (eid, &e) in edges.iter().enumerate() {
        let key = dir.key(e);
        entries[cursor[key]] = Endpoint {
            node: dir.other(e),
            edge: eid,
        };
        cursor[key] += 1;
    }

    Csr { offsets, entries }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
