//! Weak and strong connectivity partitions.
//!
//! # Overview
//!
//! Two independent total partitions of the node set:
//!
//! - **Weak components** treat every edge as undirected and come from a
//!   union-find pass over the edge list (`O(E·α(V))`).
//! - **Strong components** require mutual directed reachability and come
//!   from an iterative Tarjan low-link DFS (`O(V+E)`).
//!
//! # Canonical Ids
//!
//! Neither union-find roots nor Tarjan's emission order are stable across
//! implementations, so raw labels are relabeled before exposure: components
//! are numbered `0, 1, 2, …` by ascending smallest contained node id. Two
//! runs over the same snapshot therefore produce identical assignments, and
//! test suites can assert exact ids.

mod tarjan;
mod union_find;

pub use union_find::UnionFind;

use serde::Serialize;
use tracing::instrument;

use crate::graph::Graph;

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// A total partition of the node set into connected components.
///
/// `assignment[v]` is the component id of node `v`; ids are canonical (see
/// the module docs) and dense in `[0, count)`. An isolated node is its own
/// singleton component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Components {
    /// Component id per node.
    pub assignment: Vec<usize>,
    /// Number of components.
    pub count: usize,
}

impl Components {
    /// Node count of each component, indexed by component id.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.count];
        for &c in &self.assignment {
            sizes[c] += 1;
        }
        sizes
    }

    /// Size of the largest component, or 0 for the empty graph.
    #[must_use]
    pub fn largest_size(&self) -> usize {
        self.sizes().into_iter().max().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Weak connectivity
// ---------------------------------------------------------------------------

/// Partition nodes by undirected reachability.
#[must_use]
#[instrument(skip(g), fields(nodes = g.node_count(), edges = g.edge_count()))]
pub fn weak_components(g: &Graph) -> Components {
    let n = g.node_count();
    let mut uf = UnionFind::new(n);
    for e in g.edges() {
        uf.union(e.from, e.to);
    }

    let mut raw = vec![0usize; n];
    for (v, slot) in raw.iter_mut().enumerate() {
        *slot = uf.find(v);
    }
    canonicalize(&raw, n)
}

/// Partition nodes by mutual directed reachability (Tarjan).
#[must_use]
#[instrument(skip(g), fields(nodes = g.node_count(), edges = g.edge_count()))]
pub fn strong_components(g: &Graph) -> Components {
    let (raw, count) = tarjan::strong_component_ids(g);
    canonicalize(&raw, count)
}

// ---------------------------------------------------------------------------
// Canonical relabeling
// ---------------------------------------------------------------------------

/// Relabel arbitrary component labels to the canonical numbering.
///
/// Scanning nodes in ascending id order and assigning the next fresh id at
/// each unseen label numbers every component at its smallest member, which
/// is exactly the "ascending smallest contained node id" rule.
fn canonicalize(raw: &[usize], label_bound: usize) -> Components {
    let mut remap = vec![usize::MAX; label_bound];
    let mut assignment = vec![0usize; raw.len()];
    let mut next = 0usize;

    for (v, &label) in raw.iter().enumerate() {
        if remap[label] == usize::MAX {
            remap[label] = next;
            next += 1;
        }
        assignment[v] = remap[label];
    }

    Components {
        assignment,
        count: next,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
