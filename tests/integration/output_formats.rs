// tests/integration/output_formats.rs
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn stdout_of(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_char_freq")).args(args).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn json_output_has_reports() {
    let out = stdout_of(&["--text", "aab", "--format", "json"]);
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["mode"], "count");
    let rows = value["reports"][0]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["char"], "A");
    assert_eq!(rows[0]["code"], 65);
    assert_eq!(rows[0]["value"], 2);
}

#[test]
fn json_rank_values_sum_to_one() {
    let out = stdout_of(&["--text", "the lazy dog", "--mode", "rank", "--format", "json"]);
    let value: Value = serde_json::from_str(&out).unwrap();
    let sum: f64 = value["reports"][0]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["value"].as_f64().unwrap())
        .sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn yaml_output_is_parseable_shape() {
    Command::new(env!("CARGO_BIN_EXE_char_freq"))
        .args(["--text", "ab", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode: count"))
        .stdout(predicate::str::contains("char: A"));
}

#[test]
fn markdown_output_has_table() {
    let out = stdout_of(&["--text", "ab", "--format", "md"]);
    assert!(out.contains("| CHAR | CODE | COUNT |"));
    assert!(out.contains("| A | 65 | 1 |"));
}

#[test]
fn rank_table_uses_four_decimals() {
    let out = stdout_of(&["--text", "aabb", "--mode", "rank"]);
    assert!(out.contains("   Char    Rank"));
    assert!(out.contains("    A     0.5000"));
}
