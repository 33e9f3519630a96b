use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn jtf(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jtf"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run jtf")
}

fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("output file exists");
    serde_json::from_str(&text).expect("output is valid JSON")
}

#[test]
fn test_writes_expanded_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("users.jtf"),
        r#"{"user": {"name": @person.fullName, "age": @number.int(18, 65)}}"#,
    )
    .unwrap();

    let out = jtf(dir.path(), &["-i", "users.jtf", "-o", "users.json"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("=== JSON Template Parser ==="));
    assert!(stdout.contains("Output saved to users.json"));

    let value = read_json(&dir.path().join("users.json"));
    assert!(value["user"]["name"].is_string());
    let age = value["user"]["age"].as_i64().unwrap();
    assert!((18..=65).contains(&age));
}

#[test]
fn test_uses_default_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.jtf"), r#"[{"n": @number.int(3,3)}] @repeat(3)"#).unwrap();

    let out = jtf(dir.path(), &["--quiet"]);
    assert!(out.status.success());
    assert_eq!(
        read_json(&dir.path().join("output.json")),
        serde_json::json!([{"n": 3}, {"n": 3}, {"n": 3}])
    );
}

#[test]
fn test_positional_input_overrides_flag() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.jtf"), r#"{"from": "a"}"#).unwrap();

    let out = jtf(dir.path(), &["a.jtf", "-i", "missing.jtf", "-o", "a.json", "-q"]);
    assert!(out.status.success());
    assert_eq!(
        read_json(&dir.path().join("a.json")),
        serde_json::json!({"from": "a"})
    );
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = jtf(dir.path(), &["-i", "nope.jtf"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Input file 'nope.jtf' not found"), "stderr: {}", stderr);
    assert!(!dir.path().join("output.json").exists());
}

#[test]
fn test_syntax_error_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.jtf"), r#"{"name": @person.firstName"#).unwrap();

    let out = jtf(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error"));
}

#[test]
fn test_seed_makes_output_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("input.jtf"),
        r#"{"items": [{"id": @string.uuid, "city": @location.city}] @repeat(4)}"#,
    )
    .unwrap();

    let first = jtf(dir.path(), &["--seed", "7", "-o", "first.json", "-q"]);
    let second = jtf(dir.path(), &["--seed", "7", "-o", "second.json", "-q"]);
    assert!(first.status.success() && second.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("first.json")).unwrap(),
        fs::read_to_string(dir.path().join("second.json")).unwrap()
    );
}

#[test]
fn test_quiet_and_compact() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.jtf"), r#"{"a": 1, "b": [true]}"#).unwrap();

    let out = jtf(dir.path(), &["--quiet", "--compact"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("output.json")).unwrap(),
        r#"{"a":1,"b":[true]}"#
    );
}

#[test]
fn test_warnings_are_counted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.jtf"), r#"{"x": @invalid.method}"#).unwrap();

    let out = jtf(dir.path(), &[]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("1 warning(s)"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown method: invalid.method"));
    assert_eq!(
        read_json(&dir.path().join("output.json")),
        serde_json::json!({"x": "invalid.method"})
    );
}
