//! Integration tests for the pathgraph CLI
//!
//! These tests run the pathgraph binary against graph files in a temporary
//! directory and check the written reports.

mod support;

use predicates::prelude::*;
use std::fs;
use support::{pathgraph, report_blocks, write_graph};
use tempfile::tempdir;

// ============================================================================
// Help and usage
// ============================================================================

#[test]
fn test_help_flag() {
    pathgraph()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pathgraph"))
        .stdout(predicate::str::contains("solve"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_invalid_strategy_is_usage_error() {
    let dir = tempdir().unwrap();
    pathgraph()
        .current_dir(dir.path())
        .args(["solve", "--strategy", "fibonacci"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid dijkstra strategy"));
}

// ============================================================================
// Solve
// ============================================================================

#[test]
fn test_bare_invocation_uses_default_files() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph-input.txt", 3, "1", &[(1, 2, 5), (2, 3, 3)]);

    pathgraph().current_dir(dir.path()).assert().success();

    let report = fs::read_to_string(dir.path().join("graph-output.txt")).unwrap();
    assert_eq!(
        report,
        "Dijkstra\n\n3\n1 -1 -1\n2 5 1\n3 8 2\n\nBellman-Ford\n\n3\n1 0 0\n2 5 1\n3 8 2\n"
    );
}

#[test]
fn test_solve_isolated_nodes() {
    let dir = tempdir().unwrap();
    let input = write_graph(dir.path(), "in.txt", 3, "1", &[]);
    let output = dir.path().join("out.txt");

    pathgraph()
        .arg("solve")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let report = fs::read_to_string(&output).unwrap();
    let (dijkstra, bellman_ford) = report_blocks(&report);
    assert_eq!(dijkstra, vec!["1 -1 -1", "2 2147483647 null", "3 2147483647 null"]);
    assert_eq!(bellman_ford, vec!["1 0 0", "2 2147483647 null", "3 2147483647 null"]);
}

#[test]
fn test_solve_orders_rows_numerically() {
    let dir = tempdir().unwrap();
    let input = write_graph(
        dir.path(),
        "in.txt",
        12,
        "10",
        &[(10, 2, 1), (2, 11, 4), (11, 1, 2), (10, 12, 9)],
    );
    let output = dir.path().join("out.txt");

    pathgraph()
        .args(["solve", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let report = fs::read_to_string(&output).unwrap();
    let (dijkstra, bellman_ford) = report_blocks(&report);
    let ids: Vec<u32> = dijkstra
        .iter()
        .map(|row| row.split_whitespace().next().unwrap().parse().unwrap())
        .collect();
    assert_eq!(ids, (1..=12).collect::<Vec<u32>>());

    assert_eq!(dijkstra[0], "1 7 11");
    assert_eq!(dijkstra[9], "10 -1 -1");
    assert_eq!(bellman_ford[9], "10 0 0");
    // Non-start rows agree between the two algorithms
    for (i, (d, b)) in dijkstra.iter().zip(&bellman_ford).enumerate() {
        if i != 9 {
            assert_eq!(d, b);
        }
    }
}

#[test]
fn test_solve_binary_heap_matches_linear_scan() {
    let dir = tempdir().unwrap();
    let edges = [(1, 2, 7), (1, 3, 9), (1, 6, 14), (2, 3, 10), (2, 4, 15), (3, 4, 11), (3, 6, 2), (4, 5, 6), (5, 6, 9)];
    let input = write_graph(dir.path(), "in.txt", 6, "1", &edges);

    for (strategy, name) in [("linear-scan", "linear.txt"), ("binary-heap", "heap.txt")] {
        pathgraph()
            .args(["solve", "--strategy", strategy, "--input"])
            .arg(&input)
            .arg("--output")
            .arg(dir.path().join(name))
            .assert()
            .success();
    }

    let linear = fs::read_to_string(dir.path().join("linear.txt")).unwrap();
    let heap = fs::read_to_string(dir.path().join("heap.txt")).unwrap();
    assert_eq!(linear, heap);
    assert!(linear.contains("\n5 20 6\n"));
}

#[test]
fn test_solve_json_format() {
    let dir = tempdir().unwrap();
    let input = write_graph(dir.path(), "in.txt", 3, "1", &[(1, 2, 5), (2, 3, 3)]);
    let output = dir.path().join("out.json");

    pathgraph()
        .args(["--format", "json", "solve", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["start"], "1");
    assert_eq!(value["dijkstra"].as_array().unwrap().len(), 3);
    assert_eq!(value["dijkstra"][0]["parent"], "-1");
    assert_eq!(value["bellman_ford"][2]["distance"], 8);
}

#[test]
fn test_negative_cycle_warning() {
    let dir = tempdir().unwrap();
    let input = write_graph(dir.path(), "in.txt", 3, "1", &[(1, 2, 4), (2, 3, -1)]);

    pathgraph()
        .args(["solve", "--check-negative-cycles", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(dir.path().join("out.txt"))
        .assert()
        .success()
        .stderr(predicate::str::contains("negative cycle"));

    assert!(dir.path().join("out.txt").exists());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();

    pathgraph()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: failed to open"));

    assert!(!dir.path().join("graph-output.txt").exists());
}

#[test]
fn test_malformed_header() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("graph-input.txt"), "three\n1\n0\n").unwrap();

    pathgraph()
        .current_dir(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed input at line 1"));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();

    let output = pathgraph()
        .current_dir(dir.path())
        .args(["--format", "json", "solve"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(value["error"]["code"], 1);
    assert_eq!(value["error"]["type"], "failed_operation_with_target");
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();

    pathgraph()
        .current_dir(dir.path())
        .arg("--quiet")
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Show and config
// ============================================================================

#[test]
fn test_show_nodes() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph-input.txt", 3, "1", &[(1, 3, 9), (1, 2, 4)]);

    pathgraph()
        .current_dir(dir.path())
        .args(["show", "1", "9"])
        .assert()
        .success()
        .stdout(
            "Node 1 with value null.\n Connected to 2 at weight 4.\n Connected to 3 at weight 9.\nNo node named 9.\n",
        );
}

#[test]
fn test_config_file_is_discovered() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "edges.txt", 2, "2", &[(1, 2, 6)]);
    fs::write(
        dir.path().join("pathgraph.toml"),
        "input = \"edges.txt\"\noutput = \"result.txt\"\ndijkstra_strategy = \"binary-heap\"\n",
    )
    .unwrap();

    pathgraph().current_dir(dir.path()).assert().success();

    let report = fs::read_to_string(dir.path().join("result.txt")).unwrap();
    let (dijkstra, bellman_ford) = report_blocks(&report);
    assert_eq!(dijkstra, vec!["1 6 2", "2 -1 -1"]);
    assert_eq!(bellman_ford, vec!["1 6 2", "2 0 0"]);
}

#[test]
fn test_config_command_prints_effective_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "check_negative_cycles = true\n").unwrap();

    pathgraph()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("check_negative_cycles = true"))
        .stdout(predicate::str::contains("format = \"json\""))
        .stdout(predicate::str::contains("input = \"graph-input.txt\""));
}

#[test]
fn test_invalid_config_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("pathgraph.toml"), "dijkstra_strategy = 5\n").unwrap();

    pathgraph()
        .current_dir(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}
