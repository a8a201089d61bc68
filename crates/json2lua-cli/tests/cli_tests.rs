//! Integration tests for the `json2lua` CLI binary.
//!
//! Uses `assert_cmd` and `predicates` to exercise the convert subcommand
//! through the actual binary: stdin/stdout piping, file I/O, compact mode,
//! and error handling for malformed input.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

#[test]
fn convert_stdin_to_stdout() {
    let input = r#"{"name":"Alice","age":30}"#;

    Command::cargo_bin("json2lua")
        .unwrap()
        .arg("convert")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("return {"))
        .stdout(predicate::str::contains("name = \"Alice\""))
        .stdout(predicate::str::contains("age = 30"));
}

#[test]
fn convert_file_to_stdout() {
    Command::cargo_bin("json2lua")
        .unwrap()
        .args(["convert", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("gameConfig = {"))
        .stdout(predicate::str::contains("volume = 0.8"));
}

#[test]
fn convert_file_to_file() {
    let output_path = "/tmp/json2lua-test-convert-output.lua";

    // Clean up from any prior run
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("json2lua")
        .unwrap()
        .args(["convert", "-i", sample_json_path(), "-o", output_path])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(content.starts_with("return {"));
    assert!(content.contains("version = \"1.0.0\""));

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn convert_compact_flag() {
    let input = r#"{"items":[1,2,3],"name":"compact"}"#;

    Command::cargo_bin("json2lua")
        .unwrap()
        .args(["convert", "--compact"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("return {items={ 1, 2, 3 },name=\"compact\"}\n");
}

#[test]
fn convert_exact_indented_output() {
    let input = r#"{"a":1,"b":"x"}"#;

    Command::cargo_bin("json2lua")
        .unwrap()
        .arg("convert")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("return {\n\ta = 1,\n\tb = \"x\"\n}\n");
}

#[test]
fn convert_empty_stdin_yields_empty_table() {
    Command::cargo_bin("json2lua")
        .unwrap()
        .arg("convert")
        .write_stdin("")
        .assert()
        .success()
        .stdout("return {}\n");
}

#[test]
fn convert_malformed_input_fails() {
    Command::cargo_bin("json2lua")
        .unwrap()
        .arg("convert")
        .write_stdin("{invalid json}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to convert JSON to Lua"));
}

#[test]
fn convert_missing_input_file_fails() {
    Command::cargo_bin("json2lua")
        .unwrap()
        .args(["convert", "-i", "/nonexistent/path.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}
