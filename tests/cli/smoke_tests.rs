use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{TempWorkspace, bin};

#[test]
fn shows_help() {
    Command::new(bin())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("char_freq"));
}

#[test]
fn counts_text_argument_as_table() {
    Command::new(bin())
        .args(["--text", "aAbb1!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("   Char   Count"))
        .stdout(predicate::str::contains("    A     2\n    B     2\n"));
}

#[test]
fn reads_stdin_when_no_paths() {
    Command::new(bin())
        .args(["--format", "csv"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>,L,76,2"));
}

#[test]
fn symbol_class_depends_on_screen() {
    Command::new(bin())
        .args(["--text", "aAbb1!", "--class", "symbol", "--screen", "seven-bit", "--format", "csv"])
        .assert()
        .success()
        .stdout("source,char,code,count\n<text>,!,33,1\n");

    Command::new(bin())
        .args(["--text", "aAbb1!", "--class", "symbol", "--format", "csv"])
        .assert()
        .success()
        .stdout("source,char,code,count\n");
}

#[test]
fn rank_mode_sorted_by_value() {
    Command::new(bin())
        .args(["--text", "abbccc", "--mode", "rank", "--sort", "value:desc", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("source\tchar\tcode\trank\n<text>\tC\t67\t0.5\n"));
}

#[test]
fn missing_file_reports_error_and_fails() {
    let ws = TempWorkspace::new("char_freq_missing");
    let present = ws.write_file("present.txt", "zz");
    let missing = ws.path().join("missing.txt");

    Command::new(bin())
        .arg(&missing)
        .arg(&present)
        .args(["--format", "csv", "--no-parent-fallback"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error processing"))
        .stderr(predicate::str::contains("File does not exist"))
        .stdout(predicate::str::contains(",Z,90,2"));
}

#[test]
fn relative_path_falls_back_to_parent_directory() {
    let ws = TempWorkspace::new("char_freq_parent");
    ws.write_file("data.txt", "xyz");
    let sub = ws.path().join("run");
    std::fs::create_dir_all(&sub).unwrap();

    Command::new(bin())
        .current_dir(&sub)
        .args(["data.txt", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(",X,88,1"));

    Command::new(bin())
        .current_dir(&sub)
        .args(["data.txt", "--no-parent-fallback"])
        .assert()
        .failure();
}

#[test]
fn rejects_zero_top() {
    Command::new(bin())
        .args(["--text", "abc", "--top", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--top"));
}

#[test]
fn rejects_unknown_sort_key() {
    Command::new(bin())
        .args(["--text", "abc", "--sort", "size:desc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort key"));
}

#[test]
fn generates_and_analyzes_sample() {
    let ws = TempWorkspace::new("char_freq_sample");
    let sample = ws.path().join("test.cfa");

    let assert = Command::new(bin())
        .arg("--generate-sample")
        .arg(&sample)
        .args(["--sample-len", "1000", "--seed", "7", "--class", "ascii", "--screen", "seven-bit"])
        .args(["--format", "jsonl"])
        .assert()
        .success();

    let bytes = std::fs::read(&sample).unwrap();
    assert_eq!(bytes.len(), 1000);
    assert!(bytes.iter().all(|b| (b' '..=b'~').contains(b)));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let total: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(total["type"], "total");
    assert_eq!(total["count"], 1000);
}

#[test]
fn table_total_counts_rows_hidden_by_top() {
    Command::new(bin())
        .args(["--text", "abbccc", "--mode", "rank", "--sort", "value:desc", "--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    C     0.5000\n"))
        .stdout(predicate::str::contains("   TOTAL  1.0000\n"))
        .stdout(predicate::str::contains("    B").not());
}
