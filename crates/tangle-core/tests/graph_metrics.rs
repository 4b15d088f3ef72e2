//! Known-topology regression tests for the analytics engines.
//!
//! Each test uses a hand-crafted graph whose metric values were derived by
//! hand and hardcoded, so any kernel change that shifts a value gets caught
//! here first.

use tangle_core::{
    GraphBuilder, HitsConfig, PageRankConfig, Weighting, degree_strength, distance_stats, hits,
    pagerank, strong_components, weak_components,
};

// ---------------------------------------------------------------------------
// Helpers: build graphs in each ingestion profile
// ---------------------------------------------------------------------------

fn structural(edges: &[(usize, usize)]) -> tangle_core::Graph {
    let mut b = GraphBuilder::new(Vec::<String>::new());
    for &(from, to) in edges {
        b.add_edge(from, to, &[]).expect("edge");
    }
    b.finish()
}

fn collapsed(edges: &[(usize, usize, f64, f64)]) -> tangle_core::Graph {
    let mut b = GraphBuilder::new(["transfers", "amount"]);
    for &(from, to, ntr, amount) in edges {
        b.add_edge(from, to, &[ntr, amount]).expect("edge");
    }
    b.finish()
}

// ===========================================================================
// Topology 1: Ring with a tail (0 → 1 → 2 → 0, 2 → 3)
//
//   0 → 1
//   ↑   ↓
//   └── 2 → 3
//
// Properties:
//   - One weak component; strong components {0,1,2} and {3}.
//   - 9 reachable ordered pairs, hop sum 15.
//   - Node 3 is dangling (no out-edges).
// ===========================================================================

const RING_TAIL: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 0), (2, 3)];

#[test]
fn ring_tail_connectivity() {
    let g = structural(&RING_TAIL);
    let weak = weak_components(&g);
    let strong = strong_components(&g);

    assert_eq!(weak.count, 1);
    assert_eq!(weak.assignment, vec![0, 0, 0, 0]);
    assert_eq!(strong.count, 2);
    assert_eq!(strong.assignment, vec![0, 0, 0, 1]);
}

#[test]
fn ring_tail_distance_table() {
    // Reference BFS table:
    //   from 0: 1→1, 2→2, 3→3
    //   from 1: 2→1, 0→2, 3→2
    //   from 2: 0→1, 3→1, 1→2
    //   from 3: (nothing)
    let stats = distance_stats(&structural(&RING_TAIL));
    assert_eq!(stats.reachable_pairs, 9);
    assert!((stats.average_path_length - 15.0 / 9.0).abs() < 1e-12);
}

#[test]
fn ring_tail_harmonic() {
    let stats = distance_stats(&structural(&RING_TAIL));
    let expected = [1.5, 1.5, 1.5, 1.0 + 0.5 + 1.0 / 3.0];
    for (node, (&got, &want)) in stats.harmonic.iter().zip(expected.iter()).enumerate() {
        assert!((got - want).abs() < 1e-12, "harmonic[{node}] = {got}, want {want}");
    }
}

#[test]
fn ring_tail_pagerank_sums_to_one_despite_dangling() {
    let g = structural(&RING_TAIL);
    let r = pagerank(&g, Weighting::Unweighted, &PageRankConfig::default());
    assert!(r.converged);
    let total: f64 = r.scores.iter().sum();
    assert!((total - 1.0).abs() < 1e-6, "sum = {total}");
    let floor = 0.15 / 4.0;
    assert!(r.scores.iter().all(|&s| s >= floor - 1e-12));
}

// ===========================================================================
// Topology 2: Two isolated pairs (0 → 1, 2 → 3)
//
// Properties:
//   - Two weak components, four strong singletons.
//   - Exactly two reachable ordered pairs, each at distance 1.
// ===========================================================================

#[test]
fn isolated_pairs_average_path_length_is_one() {
    let stats = distance_stats(&structural(&[(0, 1), (2, 3)]));
    assert_eq!(stats.reachable_pairs, 2);
    assert!((stats.average_path_length - 1.0).abs() < 1e-12);
}

#[test]
fn isolated_pairs_components() {
    let g = structural(&[(0, 1), (2, 3)]);
    let weak = weak_components(&g);
    assert_eq!(weak.count, 2);
    assert_eq!(weak.assignment, vec![0, 0, 1, 1]);
    assert_eq!(strong_components(&g).count, 4);
}

// ===========================================================================
// Topology 3: Directed 5-cycle
//
// Properties:
//   - PageRank fixed point is exactly uniform 1/5 for every weighting
//     (rotational symmetry).
// ===========================================================================

#[test]
fn five_cycle_pagerank_uniform_all_weightings() {
    let g = collapsed(&[
        (0, 1, 2.0, 10.0),
        (1, 2, 4.0, 20.0),
        (2, 3, 6.0, 30.0),
        (3, 4, 8.0, 40.0),
        (4, 0, 10.0, 50.0),
    ]);
    for weighting in [
        Weighting::Unweighted,
        Weighting::Channel(0),
        Weighting::Channel(1),
    ] {
        let r = pagerank(&g, weighting, &PageRankConfig::default());
        assert!(r.converged);
        for &s in &r.scores {
            // Every node has exactly one out-edge, so each node forwards its
            // whole damped mass regardless of the edge's weight.
            assert!((s - 0.2).abs() < 1e-9, "{weighting:?}: {s}");
        }
    }
}

// ===========================================================================
// Topology 4: Collapsed-profile single record (0 → 1, transfers=5, amount=100)
// ===========================================================================

#[test]
fn collapsed_round_trip_degree_strength() {
    let g = collapsed(&[(0, 1, 5.0, 100.0)]);
    let ds = degree_strength(&g);

    assert_eq!(ds.out_degree, vec![1, 0]);
    assert_eq!(ds.in_degree, vec![0, 1]);
    assert!((ds.out_strength[0][0] - 5.0).abs() < f64::EPSILON);
    assert!((ds.out_strength[1][0] - 100.0).abs() < f64::EPSILON);
    assert!(ds.in_strength[0][0].abs() < f64::EPSILON);
    assert!(ds.out_strength[0][1].abs() < f64::EPSILON);
}

// ===========================================================================
// Topology 5: Fan-in with weighted skew
//
//   0 ──9──▶ 2 ◀──1── 1      (amounts on the edges)
//
// Properties:
//   - HITS authority concentrates on 2; the weighted hub score favors 0.
// ===========================================================================

#[test]
fn fan_in_hits_weighted_vs_unweighted() {
    let mut b = GraphBuilder::new(["amount"]);
    b.add_edge(0, 2, &[9.0]).expect("edge");
    b.add_edge(1, 2, &[1.0]).expect("edge");
    let g = b.finish();

    let unweighted = hits(&g, Weighting::Unweighted, &HitsConfig::default());
    assert!(unweighted.converged);
    assert!((unweighted.hubs[0] - unweighted.hubs[1]).abs() < 1e-9);
    assert!((unweighted.authorities[2] - 1.0).abs() < 1e-9);

    let weighted = hits(&g, Weighting::Channel(0), &HitsConfig::default());
    assert!(weighted.converged);
    assert!(weighted.hubs[0] > weighted.hubs[1]);
}

// ===========================================================================
// Degenerate topologies
// ===========================================================================

#[test]
fn zero_node_graph_every_engine_is_empty() {
    let g = GraphBuilder::new(["transfers", "amount"]).finish();

    assert_eq!(g.node_count(), 0);
    let ds = degree_strength(&g);
    assert!(ds.in_degree.is_empty());

    assert_eq!(weak_components(&g).count, 0);
    assert_eq!(strong_components(&g).count, 0);

    let stats = distance_stats(&g);
    assert_eq!(stats.reachable_pairs, 0);

    let pr = pagerank(&g, Weighting::Unweighted, &PageRankConfig::default());
    assert!(pr.scores.is_empty() && pr.converged);

    let h = hits(&g, Weighting::Unweighted, &HitsConfig::default());
    assert!(h.hubs.is_empty() && h.converged);
}

#[test]
fn result_sets_serialize_for_downstream_consumers() {
    let g = collapsed(&[(0, 1, 5.0, 100.0)]);

    let ds = serde_json::to_value(degree_strength(&g)).expect("degree json");
    assert_eq!(ds["out_degree"][0], 1);

    let pr = serde_json::to_value(pagerank(
        &g,
        Weighting::Unweighted,
        &PageRankConfig::default(),
    ))
    .expect("pagerank json");
    assert_eq!(pr["converged"], true);

    let weak = serde_json::to_value(weak_components(&g)).expect("components json");
    assert_eq!(weak["count"], 1);
}

#[test]
fn self_loop_only_graph() {
    let g = collapsed(&[(0, 0, 3.0, 30.0)]);

    let ds = degree_strength(&g);
    assert_eq!(ds.in_degree[0], 1);
    assert_eq!(ds.out_degree[0], 1);

    assert_eq!(weak_components(&g).count, 1);
    assert_eq!(strong_components(&g).count, 1);

    let stats = distance_stats(&g);
    assert_eq!(stats.reachable_pairs, 0, "a self-loop is not an ordered pair");

    let pr = pagerank(&g, Weighting::Channel(1), &PageRankConfig::default());
    assert!((pr.scores[0] - 1.0).abs() < 1e-9);
}
