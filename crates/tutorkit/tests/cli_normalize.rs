//! Integration tests for `tutorkit normalize`.

use std::fs;
use std::process::Command;

#[test]
fn test_normalize_prints_canonical_json() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("meta.yaml"),
        "title: Counter\nmainCommand: npm start\nprepareCommands:\n  - [npm install, Install]\npreviews:\n  - [5173, Web]\nterminal:\n  panels: output\n  activePanel: 1\n",
    )
    .expect("Failed to write document");

    let output = Command::new(env!("CARGO_BIN_EXE_tutorkit"))
        .current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .args(["normalize", "meta.yaml"])
        .output()
        .expect("Failed to execute tutorkit");

    assert!(
        output.status.success(),
        "normalize should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let document: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(
        document,
        serde_json::json!({
            "title": "Counter",
            "mainCommand": { "command": "npm start" },
            "prepareCommands": [{ "command": "npm install", "title": "Install" }],
            "previews": [{ "port": 5173, "title": "Web" }],
            "terminal": { "panels": "output", "activePanel": 1 }
        })
    );
}

#[test]
fn test_normalize_invalid_document_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("meta.json"),
        r#"{ "title": "Hello", "terminal": { "panels": "terminal", "activePanel": 0 } }"#,
    )
    .expect("Failed to write document");

    let output = Command::new(env!("CARGO_BIN_EXE_tutorkit"))
        .current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .args(["normalize", "meta.json"])
        .output()
        .expect("Failed to execute tutorkit");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("Failed to normalize 'meta.json'"), "stderr: {}", stderr);
    assert!(
        stderr.contains("Number must be greater than 0, received 0"),
        "stderr: {}",
        stderr
    );
}
