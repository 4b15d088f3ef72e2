//! End-to-end tests for the `tgl` binary: real files in, real files out.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tgl() -> Command {
    Command::cargo_bin("tgl").expect("tgl binary")
}

/// Collapsed-profile fixture: ring 0 → 1 → 2 → 0 plus 2 → 3.
const RING_TAIL: &str = "0\t1\t2\t10\n1\t2\t4\t20\n2\t0\t6\t30\n2\t3\t8\t40\n";

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

/// Run summary format shared by the file-producing subcommands.
fn summary_line(nodes: u64, edges: u64) -> String {
    format!("^{nodes}\t{edges}\t\\d+\n$")
}

#[test]
fn degree_collapsed_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_fixture(&dir, "edges.tsv", "0\t1\t5\t100\n");
    let output = dir.path().join("degree.tsv");

    tgl()
        .args([
            "degree",
            input.to_str().expect("utf8"),
            output.to_str().expect("utf8"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_match(summary_line(2, 1)).expect("regex"));

    let text = fs::read_to_string(&output).expect("read output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3, "header + 2 nodes");
    assert_eq!(
        lines[0],
        "node_id\tin_degree\tout_degree\tin_strength_transfers\tout_strength_transfers\tin_strength_amount\tout_strength_amount"
    );
    assert_eq!(lines[1], "0\t0\t1\t0\t5\t0\t100");
    assert_eq!(lines[2], "1\t1\t0\t5\t0\t100\t0");
}

#[test]
fn mg_degree_accumulates_parallel_transfers() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_fixture(&dir, "edges.tsv", "0\t1\t10\n0\t1\t15\n");
    let output = dir.path().join("degree.tsv");

    tgl()
        .args([
            "mg-degree",
            input.to_str().expect("utf8"),
            output.to_str().expect("utf8"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_match(summary_line(2, 2)).expect("regex"));

    let text = fs::read_to_string(&output).expect("read output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "0\t0\t2\t0\t25");
    assert_eq!(lines[2], "1\t2\t0\t25\t0");
}

#[test]
fn connectivity_reports_partitions_and_coverage() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_fixture(&dir, "edges.tsv", RING_TAIL);
    let output = dir.path().join("connectivity.tsv");

    tgl()
        .args([
            "connectivity",
            input.to_str().expect("utf8"),
            output.to_str().expect("utf8"),
        ])
        .assert()
        .success()
        // nodes edges weak strong coverage elapsed
        .stdout(predicate::str::is_match("^4\t4\t1\t2\t1\t\\d+\n$").expect("regex"));

    let text = fs::read_to_string(&output).expect("read output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "node_id\tweak_component\tstrong_component");
    assert_eq!(lines[1], "0\t0\t0");
    assert_eq!(lines[2], "1\t0\t0");
    assert_eq!(lines[3], "2\t0\t0");
    assert_eq!(lines[4], "3\t0\t1");
}

#[test]
fn distance_prints_average_in_summary() {
    let dir = TempDir::new().expect("temp dir");
    // Two isolated pairs: average path length exactly 1.
    let input = write_fixture(&dir, "edges.tsv", "0\t1\t1\t5\n2\t3\t1\t5\n");

    tgl()
        .args(["distance", input.to_str().expect("utf8")])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^4\t2\t1\t\\d+\n$").expect("regex"));
}

#[test]
fn harmonic_scores_ring_tail() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_fixture(&dir, "edges.tsv", RING_TAIL);
    let output = dir.path().join("harmonic.tsv");

    tgl()
        .args([
            "harmonic",
            input.to_str().expect("utf8"),
            output.to_str().expect("utf8"),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&output).expect("read output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "node_id\tharmonic");
    assert_eq!(lines[1], "0\t1.5");
    assert_eq!(lines[2], "1\t1.5");
    assert_eq!(lines[3], "2\t1.5");
    // h(3) = 1 + 1/2 + 1/3
    let h3: f64 = lines[4]
        .split('\t')
        .nth(1)
        .expect("value column")
        .parse()
        .expect("float");
    assert!((h3 - (1.0 + 0.5 + 1.0 / 3.0)).abs() < 1e-12);
}

#[test]
fn pagerank_outputs_three_distributions() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_fixture(&dir, "edges.tsv", RING_TAIL);
    let output = dir.path().join("pagerank.tsv");

    tgl()
        .args([
            "pagerank",
            input.to_str().expect("utf8"),
            output.to_str().expect("utf8"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_match(summary_line(4, 4)).expect("regex"));

    let text = fs::read_to_string(&output).expect("read output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "node_id\tpagerank\tpagerank_transfers\tpagerank_amount");
    assert_eq!(lines.len(), 5);

    // Each variant column sums to 1.
    for col in 1..=3 {
        let total: f64 = lines[1..]
            .iter()
            .map(|l| {
                l.split('\t')
                    .nth(col)
                    .expect("column")
                    .parse::<f64>()
                    .expect("float")
            })
            .sum();
        assert!((total - 1.0).abs() < 1e-6, "column {col} sums to {total}");
    }
}

#[test]
fn hits_outputs_hub_and_authority_columns() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_fixture(&dir, "edges.tsv", "0\t2\t9\t90\n1\t2\t1\t10\n");
    let output = dir.path().join("hits.tsv");

    tgl()
        .args([
            "hits",
            input.to_str().expect("utf8"),
            output.to_str().expect("utf8"),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&output).expect("read output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "node_id\thub\thub_transfers\thub_amount\tauthority\tauthority_transfers\tauthority_amount"
    );
    assert_eq!(lines.len(), 4);

    let cell = |row: usize, col: usize| -> f64 {
        lines[row]
            .split('\t')
            .nth(col)
            .expect("column")
            .parse()
            .expect("float")
    };
    // Node 2 is the sole authority under every weighting.
    assert!((cell(3, 4) - 1.0).abs() < 1e-9);
    // Weighted hub score favors the heavy sender 0 over 1.
    assert!(cell(1, 2) > cell(2, 2));
    // Unweighted hub scores are symmetric.
    assert!((cell(1, 1) - cell(2, 1)).abs() < 1e-9);
}

#[test]
fn stats_lists_snapshot_summary() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_fixture(&dir, "edges.tsv", RING_TAIL);

    tgl()
        .args(["stats", input.to_str().expect("utf8")])
        .assert()
        .success()
        .stdout(predicate::str::contains("node_count\t4"))
        .stdout(predicate::str::contains("weak_components\t1"))
        .stdout(predicate::str::contains("strong_components\t2"))
        .stdout(predicate::str::contains("coverage\t1"));
}

#[test]
fn malformed_row_fails_with_line_number() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_fixture(&dir, "edges.tsv", "0\t1\t5\t100\n0\t2\tbogus\t1\n");
    let output = dir.path().join("degree.tsv");

    tgl()
        .args([
            "degree",
            input.to_str().expect("utf8"),
            output.to_str().expect("utf8"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));

    assert!(!output.exists(), "no output file after a fatal parse error");
}

#[test]
fn truncated_row_fails_with_line_number() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_fixture(&dir, "edges.tsv", "0\t1\t5\n");
    let output = dir.path().join("degree.tsv");

    tgl()
        .args([
            "degree",
            input.to_str().expect("utf8"),
            output.to_str().expect("utf8"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("out.tsv");

    tgl()
        .args([
            "degree",
            dir.path().join("nope.tsv").to_str().expect("utf8"),
            output.to_str().expect("utf8"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("open edge list"));
}

#[test]
fn empty_input_yields_empty_results() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_fixture(&dir, "edges.tsv", "");
    let output = dir.path().join("degree.tsv");

    tgl()
        .args([
            "degree",
            input.to_str().expect("utf8"),
            output.to_str().expect("utf8"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_match(summary_line(0, 0)).expect("regex"));

    let text = fs::read_to_string(&output).expect("read output");
    assert_eq!(text.lines().count(), 1, "header only");
}
