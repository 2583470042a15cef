//! Tests for the argtable binary.

use std::process::{Command, Output};

fn argtable(args: &[&str]) -> Output {
    // Keep the user's config file out of the picture.
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = dir.path().join("config.toml");

    Command::new(env!("CARGO_BIN_EXE_argtable"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_lists_query_options() {
    let output = argtable(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--get-int"));
    assert!(stdout.contains("--get-bool"));
}

#[test]
fn test_queries_print_resolved_values() {
    let output = argtable(&[
        "--get", "-CTC", "--get-int", "-bar", "--get-bool", "-flag", "--", "--CTC=verbose",
        "-bar=12", "-flag",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "-CTC=verbose\n-bar=12\n-flag=true");
}

#[test]
fn test_table_dump_resolves_negation() {
    let output = argtable(&["--", "-noCTC", "file", "-bar"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "-CTC=0\n-noCTC=\npositional: file\npositional: -bar");
}

#[test]
fn test_json_dump() {
    let output = argtable(&["--format", "json", "--", "-a=1", "-a=2"]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["values"]["-a"], "1");
    assert_eq!(json["all_values"]["-a"], serde_json::json!(["1", "2"]));
    assert_eq!(json["positionals"], serde_json::json!([]));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "not toml [[[").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_argtable"))
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: loading configuration"), "got: {}", stderr);
}
