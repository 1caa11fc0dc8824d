use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;

fn names_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("names.txt");
    fs::write(&path, "Kim\nLee\nPark\n").expect("write names");
    path
}

#[test]
fn cli_draws_a_numbered_list() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let names = names_file(&tmp);

    let exe = assert_cmd::cargo_bin!("kuji-cli");
    let assert = Command::new(exe)
        .args([
            "draw",
            "--no-history",
            "--seed",
            "7",
            names.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with(" 1: "));
    assert!(lines[2].starts_with(" 3: "));
}

#[test]
fn cli_renders_svg_to_a_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let names = names_file(&tmp);
    let out = tmp.path().join("chart.svg");

    let exe = assert_cmd::cargo_bin!("kuji-cli");
    Command::new(exe)
        .args([
            "render",
            "--no-history",
            "--seed",
            "7",
            "--out",
            out.to_string_lossy().as_ref(),
            names.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).expect("read svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(">Board<"));
}

#[test]
fn cli_persists_history_between_runs() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let names = names_file(&tmp);
    let history = tmp.path().join("history.json");

    let exe = assert_cmd::cargo_bin!("kuji-cli");
    Command::new(&exe)
        .args([
            "draw",
            "--seed",
            "7",
            "--history",
            history.to_string_lossy().as_ref(),
            names.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let assert = Command::new(&exe)
        .args(["history", "--history", history.to_string_lossy().as_ref()])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let records: serde_json::Value = serde_json::from_str(&stdout).expect("history json");
    assert_eq!(records.as_array().map(Vec::len), Some(1));
    assert_eq!(records[0]["combinations"].as_array().map(Vec::len), Some(3));
}

#[test]
fn cli_rejects_unknown_flags_with_usage() {
    let exe = assert_cmd::cargo_bin!("kuji-cli");
    Command::new(exe).args(["--bogus"]).assert().code(2);
}

#[test]
fn cli_imports_names_from_a_csv_table() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let roster = tmp.path().join("roster.csv");
    fs::write(&roster, "id,name\n1,Kim\n2,Lee\n3,\n4,Park\n").expect("write csv");

    let exe = assert_cmd::cargo_bin!("kuji-cli");
    let assert = Command::new(exe)
        .args([
            "draw",
            "--csv",
            "--no-history",
            "--seed",
            "3",
            roster.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.contains("Kim"));
    assert!(!stdout.contains("name"));
}
