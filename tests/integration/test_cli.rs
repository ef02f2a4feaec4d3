use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn novachef() -> Command {
    let mut cmd = Command::cargo_bin("novachef").expect("binary builds");
    // Keep CLI behavior hermetic regardless of the host environment.
    for key in [
        "NOVACHEF_API_KEY",
        "GEMINI_API_KEY",
        "NOVACHEF_DETECT_URL",
        "NOVACHEF_LOG",
        "NOVACHEF_LOG_DIR",
        "NOVACHEF_LOG_CONSOLE",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn test_version_flag() {
    novachef()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("novachef"));
}

#[test]
fn test_run_applies_recipe_in_order() {
    novachef()
        .args(["run", "aGVsbG8=", "--op", "base64-decode", "--op", "to-uppercase"])
        .assert()
        .success()
        .stdout("HELLO\n");
}

#[test]
fn test_run_reads_stdin_when_no_input_given() {
    novachef()
        .args(["run", "--op", "base64-decode"])
        .write_stdin("aGVsbG8=")
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn test_run_reads_input_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input_path = dir.path().join("input.txt");
    fs::write(&input_path, "68656c6c6f").expect("write input");

    novachef()
        .args(["run", "--file"])
        .arg(&input_path)
        .args(["--op", "hex-decode"])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn test_run_embeds_recoverable_errors_in_output() {
    novachef()
        .args(["run", "not base64 !!", "--op", "base64-decode"])
        .assert()
        .success()
        .stdout("Error: Invalid Base64 input\n");
}

#[test]
fn test_run_skips_unknown_operation_ids() {
    novachef()
        .args(["run", "abc", "--op", "no-such-op", "--op", "to-uppercase"])
        .assert()
        .success()
        .stdout("ABC\n");
}

#[test]
fn test_run_with_empty_recipe_echoes_input() {
    novachef()
        .args(["run", "unchanged"])
        .assert()
        .success()
        .stdout("unchanged\n");
}

#[test]
fn test_ops_lists_catalog_in_order() {
    let assert = novachef().arg("ops").assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let first = output.lines().next().expect("at least one line");
    assert!(first.starts_with("base64-decode"));
    assert!(output.contains("SHA-256 Hash"));
    assert!(output.contains("json-prettify"));
}

#[test]
fn test_ops_filters_by_category() {
    novachef()
        .args(["ops", "--category", "Hashing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sha512").and(predicate::str::contains("rot13").not()));
}

#[test]
fn test_ops_filters_by_search_term() {
    novachef()
        .args(["ops", "--search", "base"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("base64-encode")
                .and(predicate::str::contains("reverse").not()),
        );
}

#[test]
fn test_ops_reports_empty_filter_results() {
    novachef()
        .args(["ops", "--search", "bcrypt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No operations match"));
}

#[test]
fn test_ops_rejects_unknown_category() {
    novachef()
        .args(["ops", "--category", "Compression"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn test_detect_without_configuration_degrades_gracefully() {
    novachef()
        .args(["detect", "aGVsbG8="])
        .assert()
        .success()
        .stdout(predicate::str::contains("not configured"));
}
