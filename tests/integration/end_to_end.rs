// tests/integration/end_to_end.rs
use char_freq::{
    app::{RunSummary, run_with},
    cli::{Args, build_config},
};
use clap::Parser;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn run(argv: &[&str]) -> (String, RunSummary) {
    let args = Args::parse_from(std::iter::once("char_freq").chain(argv.iter().copied()));
    let config = build_config(&args).expect("config builds");
    let mut out = Vec::new();
    let summary = run_with(&config, &mut out).expect("run succeeds");
    (String::from_utf8(out).expect("utf8"), summary)
}

#[test]
fn counts_each_file_separately() {
    let ws = TempWorkspace::new("char_freq_e2e");
    let a = ws.write_file("a.txt", "Hello");
    let b = ws.write_file("b.txt", "World");

    let (out, summary) = run(&[a.to_str().unwrap(), b.to_str().unwrap(), "--format", "csv"]);
    assert_eq!(summary, RunSummary { analyzed: 2, failed: 0 });
    let lines: Vec<_> = out.lines().skip(1).collect();
    assert!(lines.iter().any(|l| l.ends_with(",L,76,2") && l.contains("a.txt")));
    assert!(lines.iter().any(|l| l.ends_with(",L,76,1") && l.contains("b.txt")));
}

#[test]
fn file_input_matches_text_input() {
    let ws = TempWorkspace::new("char_freq_e2e");
    let text = "The quick brown fox jumps over the lazy dog 0123456789";
    let path = ws.write_file("pangram.txt", text);

    for class in ["alpha", "digit", "alnum", "ascii", "symbol"] {
        let (from_file, _) = run(&[path.to_str().unwrap(), "--class", class, "--format", "tsv"]);
        let (from_text, _) = run(&["--text", text, "--class", class, "--format", "tsv"]);
        let strip = |s: &str| s.lines().skip(1).map(|l| l.split_once('\t').unwrap().1.to_string()).collect::<Vec<_>>();
        assert_eq!(strip(&from_file), strip(&from_text), "class {class}");
    }
}

#[test]
fn none_class_yields_empty_report() {
    let (out, summary) = run(&["--text", "anything 123", "--class", "none", "--format", "csv"]);
    assert_eq!(out, "source,char,code,count\n");
    assert!(summary.is_success());
}

#[test]
fn top_applies_after_sort() {
    let (out, _) = run(&["--text", "aaabbc", "--sort", "count:desc", "--top", "2", "--format", "csv"]);
    assert_eq!(out, "source,char,code,count\n<text>,A,65,3\n<text>,B,66,2\n");
}

#[test]
fn ties_keep_char_order_with_secondary_key() {
    let (out, _) = run(&["--text", "ccbbaa", "--sort", "value:desc,char:desc", "--format", "csv"]);
    assert_eq!(out, "source,char,code,count\n<text>,C,67,2\n<text>,B,66,2\n<text>,A,65,2\n");
}

#[test]
fn empty_file_gives_empty_rank_table() {
    let ws = TempWorkspace::new("char_freq_e2e");
    let path = ws.write_file("empty.txt", "");
    let (out, summary) = run(&[path.to_str().unwrap(), "--mode", "rank", "--format", "csv"]);
    assert_eq!(out, "source,char,code,rank\n");
    assert!(summary.is_success());
}
