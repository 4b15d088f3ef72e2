//! Immutable graph snapshot for transfer-graph analytics.
//!
//! # Overview
//!
//! A [`Graph`] owns the full edge list, one weight column per named channel,
//! and CSR-packed forward and backward adjacency built once at construction.
//! Node ids are dense integers `0..n` where `n = 1 + max id` referenced by
//! any edge; ids that appear in no edge still exist below `n` and simply have
//! empty adjacency.
//!
//! ## Pipeline
//!
//! ```text
//! edge records
//!      ↓  build::GraphBuilder::add_edge()  (arity + weight validation)
//! GraphBuilder
//!      ↓  finish()
//! Graph (edge arena, weight columns, fwd/back CSR, content hash)
//!      ↓  stats::GraphStats::from_graph()
//! GraphStats (density, component counts, coverage, …)
//! ```
//!
//! ## Snapshot Identity
//!
//! [`Graph::content_hash`] is a BLAKE3 hash of the ingested edge stream
//! (channel names, endpoints, weight bits, in ingestion order). Compare it
//! against a stored value to tell whether two result sets describe the same
//! snapshot.

pub mod build;
pub mod stats;

pub use build::{BuildError, GraphBuilder};
pub use stats::GraphStats;

/// Dense node identifier in `[0, node_count)`.
pub type NodeId = usize;

/// Index into the edge arena in `[0, edge_count)`.
pub type EdgeId = usize;

/// A directed edge endpoint pair. Weights live in per-channel columns on the
/// owning [`Graph`], indexed by [`EdgeId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Source node.
    pub from: NodeId,
    /// Target node.
    pub to: NodeId,
}

/// One adjacency entry: the neighbor on the far end plus the edge that
/// connects to it, so per-edge weights stay reachable while iterating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Endpoint {
    /// Neighboring node.
    pub node: NodeId,
    /// The connecting edge's arena index.
    pub edge: EdgeId,
}

/// CSR-packed adjacency: `offsets` has `node_count + 1` entries and
/// `entries[offsets[u]..offsets[u + 1]]` are `u`'s neighbors.
#[derive(Debug, Clone)]
pub(crate) struct Csr {
    pub(crate) offsets: Vec<usize>,
    pub(crate) entries: Vec<Endpoint>,
}

impl Csr {
    fn neighbors(&self, u: NodeId) -> &[Endpoint] {
        &self.entries[self.offsets[u]..self.offsets[u + 1]]
    }
}

/// An immutable directed multigraph snapshot with named weight channels.
///
/// Built by [`GraphBuilder`]; never mutated afterwards. All analysis engines
/// borrow the snapshot read-only, so a single `Graph` can back any number of
/// concurrent computations.
#[derive(Debug)]
pub struct Graph {
    pub(crate) node_count: usize,
    pub(crate) edges: Vec<Edge>,
    pub(crate) channels: Vec<String>,
    /// `weights[channel][edge]`, column-major per channel.
    pub(crate) weights: Vec<Vec<f64>>,
    pub(crate) fwd: Csr,
    pub(crate) back: Csr,
    pub(crate) content_hash: String,
}

impl Graph {
    /// Number of nodes (`1 + max id` referenced at ingestion; 0 for an empty
    /// edge stream).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges, counting parallel edges individually.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The full edge arena in ingestion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Names of the weight channels, in declaration order.
    #[must_use]
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// Resolve a channel name to its column index.
    #[must_use]
    pub fn channel_index(&self, name: &str) -> Option<usize> {
        self.channels.iter().position(|c| c == name)
    }

    /// Weight of `edge` on `channel`.
    ///
    /// # Panics
    ///
    /// Panics if `channel` or `edge` is out of range.
    #[must_use]
    pub fn weight(&self, channel: usize, edge: EdgeId) -> f64 {
        self.weights[channel][edge]
    }

    /// Out-edges of `u` as `(neighbor, edge)` entries.
    ///
    /// # Panics
    ///
    /// Panics if `u >= node_count`.
    #[must_use]
    pub fn out_edges(&self, u: NodeId) -> &[Endpoint] {
        self.fwd.neighbors(u)
    }

    /// In-edges of `v` as `(neighbor, edge)` entries; `node` is the source.
    ///
    /// # Panics
    ///
    /// Panics if `v >= node_count`.
    #[must_use]
    pub fn in_edges(&self, v: NodeId) -> &[Endpoint] {
        self.back.neighbors(v)
    }

    /// Out-degree of `u`, counting parallel edges individually.
    #[must_use]
    pub fn out_degree(&self, u: NodeId) -> usize {
        self.out_edges(u).len()
    }

    /// In-degree of `v`, counting parallel edges individually.
    #[must_use]
    pub fn in_degree(&self, v: NodeId) -> usize {
        self.in_edges(v).len()
    }

    /// BLAKE3 content hash of the ingested edge stream.
    ///
    /// Identifies the snapshot a result set was computed from; if this
    /// changes, the graph was rebuilt from different input.
    #[must_use]
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
