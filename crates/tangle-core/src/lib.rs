#![forbid(unsafe_code)]
//! tangle-core: analytics engines for directed, weighted transfer graphs.
//!
//! # Overview
//!
//! The crate is organized around one immutable [`Graph`] snapshot and a set
//! of independent engines, each a pure function of that snapshot:
//!
//! ```text
//! edge records ──► graph::GraphBuilder ──► Graph (read-only)
//!                                            │
//!          ┌─────────────────┬───────────────┼────────────────┬─────────────┐
//!          ▼                 ▼               ▼                ▼             ▼
//!   metrics::degree   components::weak/  metrics::distance  metrics::   metrics::
//!   (degree/strength)  strong_components (avg path length,  pagerank    hits
//!                                         harmonic)
//! ```
//!
//! The builder is the only ingestion-ordering-sensitive stage; once
//! [`GraphBuilder::finish`] returns, the snapshot is never mutated and every
//! engine may run in any order or concurrently.
//!
//! # Conventions
//!
//! - **Errors**: typed errors (`thiserror`) at ingestion; analysis engines
//!   cannot fail on a well-formed graph and return plain values.
//! - **Logging**: `tracing` macros; engine entry points are `#[instrument]`ed.

pub mod components;
pub mod graph;
pub mod metrics;

pub use components::{Components, strong_components, weak_components};
pub use graph::{BuildError, Edge, EdgeId, Endpoint, Graph, GraphBuilder, GraphStats, NodeId};
pub use metrics::Weighting;
pub use metrics::degree::{DegreeStrength, degree_strength};
pub use metrics::distance::{DistanceStats, distance_stats};
pub use metrics::hits::{HitsConfig, HitsResult, hits};
pub use metrics::pagerank::{PageRankConfig, PageRankResult, pagerank};
