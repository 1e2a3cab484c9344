//! Integration tests for the `swipekit` binary.

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn run_cli(config: Option<&str>, input: &str) -> (bool, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    if let Some(contents) = config {
        std::fs::write(&path, contents).unwrap();
    }

    let mut child = Command::new(env!("CARGO_BIN_EXE_swipekit"))
        .env("SWIPEKIT_CONFIG", &path)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

#[test]
fn test_classifies_each_line() {
    let input = concat!(
        r#"{"dx": 100, "dy": 10, "vx": 0.5, "vy": 0.5}"#,
        "\n",
        r#"{"dx": 2, "dy": 1, "vx": 0, "vy": 0}"#,
        "\n",
        "not json\n",
        "\n",
        r#"{"dx": 100, "dy": 90, "vx": 0.5, "vy": 0}"#,
        "\n",
    );
    let (ok, stdout) = run_cli(None, input);
    assert!(ok);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"{"click":false,"direction":"SWIPE_RIGHT"}"#,
            r#"{"click":true,"direction":null}"#,
            r#"{"click":false,"direction":null}"#,
        ]
    );
}

#[test]
fn test_uses_config_overrides() {
    let (ok, stdout) = run_cli(
        Some("[swipe]\nvelocity_threshold = 0.8\n"),
        "{\"dx\": 100, \"dy\": 0, \"vx\": 0.5, \"vy\": 0}\n",
    );
    assert!(ok);
    assert_eq!(stdout.trim(), r#"{"click":false,"direction":null}"#);
}

#[test]
fn test_invalid_config_fails() {
    let (ok, stdout) = run_cli(Some("[swipe]\nvelocity_threshold = -1\n"), "");
    assert!(!ok);
    assert!(stdout.is_empty());
}
