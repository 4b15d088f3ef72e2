//! TSV result writers, one per metric.
//!
//! Every writer emits a header row followed by one row per node in
//! ascending node-id order. Floats use Rust's shortest round-trip `Display`
//! so values survive a parse back without loss.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use tangle_core::{Components, DegreeStrength, HitsResult, PageRankResult};

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn finish(mut w: BufWriter<File>, path: &Path) -> Result<()> {
    w.flush()
        .with_context(|| format!("flush output file {}", path.display()))?;
    Ok(())
}

/// Collapsed-profile degree/strength table (7 columns).
pub fn write_collapsed_degree(
    path: &Path,
    ds: &DegreeStrength,
    transfers: usize,
    amount: usize,
) -> Result<()> {
    let mut w = create(path)?;
    writeln!(
        w,
        "node_id\tin_degree\tout_degree\tin_strength_transfers\tout_strength_transfers\tin_strength_amount\tout_strength_amount"
    )?;
    for v in 0..ds.in_degree.len() {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            v,
            ds.in_degree[v],
            ds.out_degree[v],
            ds.in_strength[transfers][v],
            ds.out_strength[transfers][v],
            ds.in_strength[amount][v],
            ds.out_strength[amount][v],
        )?;
    }
    finish(w, path)
}

/// Multigraph-profile degree/strength table (5 columns).
pub fn write_multigraph_degree(path: &Path, ds: &DegreeStrength, amount: usize) -> Result<()> {
    let mut w = create(path)?;
    writeln!(w, "node_id\tin_degree\tout_degree\tin_strength\tout_strength")?;
    for v in 0..ds.in_degree.len() {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            v,
            ds.in_degree[v],
            ds.out_degree[v],
            ds.in_strength[amount][v],
            ds.out_strength[amount][v],
        )?;
    }
    finish(w, path)
}

/// Per-node weak and strong component ids.
pub fn write_connectivity(path: &Path, weak: &Components, strong: &Components) -> Result<()> {
    let mut w = create(path)?;
    writeln!(w, "node_id\tweak_component\tstrong_component")?;
    for (v, (wc, sc)) in weak
        .assignment
        .iter()
        .zip(strong.assignment.iter())
        .enumerate()
    {
        writeln!(w, "{v}\t{wc}\t{sc}")?;
    }
    finish(w, path)
}

/// Per-node harmonic centrality.
pub fn write_harmonic(path: &Path, harmonic: &[f64]) -> Result<()> {
    let mut w = create(path)?;
    writeln!(w, "node_id\tharmonic")?;
    for (v, h) in harmonic.iter().enumerate() {
        writeln!(w, "{v}\t{h}")?;
    }
    finish(w, path)
}

/// PageRank in the three weight variants.
pub fn write_pagerank(
    path: &Path,
    unweighted: &PageRankResult,
    by_transfers: &PageRankResult,
    by_amount: &PageRankResult,
) -> Result<()> {
    let mut w = create(path)?;
    writeln!(w, "node_id\tpagerank\tpagerank_transfers\tpagerank_amount")?;
    for v in 0..unweighted.scores.len() {
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            v, unweighted.scores[v], by_transfers.scores[v], by_amount.scores[v],
        )?;
    }
    finish(w, path)
}

/// HITS hub and authority scores in the three weight variants.
pub fn write_hits(
    path: &Path,
    unweighted: &HitsResult,
    by_transfers: &HitsResult,
    by_amount: &HitsResult,
) -> Result<()> {
    let mut w = create(path)?;
    writeln!(
        w,
        "node_id\thub\thub_transfers\thub_amount\tauthority\tauthority_transfers\tauthority_amount"
    )?;
    for v in 0..unweighted.hubs.len() {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            v,
            unweighted.hubs[v],
            by_transfers.hubs[v],
            by_amount.hubs[v],
            unweighted.authorities[v],
            by_transfers.authorities[v],
            by_amount.authorities[v],
        )?;
    }
    finish(w, path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
