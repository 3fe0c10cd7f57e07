// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[tokio::test]
async fn run_hidden_returns_exit_code() {
    let adapter = LocalProcessAdapter::new();
    let code = adapter.run_hidden("sh", "-c \"exit 3\"").await.unwrap();
    assert_eq!(code, 3);

    let code = adapter.run_hidden("sh", "-c true").await.unwrap();
    assert_eq!(code, 0);
}

#[tokio::test]
async fn run_hidden_spawn_failure_is_an_error() {
    let adapter = LocalProcessAdapter::new();
    let result = adapter.run_hidden("wcron-no-such-binary", "").await;
    assert!(matches!(result, Err(ProcessError::Spawn { .. })));
}

#[tokio::test]
async fn run_logged_writes_start_output_and_completion() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("task.log");
    let adapter = LocalProcessAdapter::new();

    let code = adapter.run_logged("echo", "hello world", &log).await.unwrap();
    assert_eq!(code, 0);

    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.contains("Starting: echo hello world"), "{content}");
    assert!(content.contains("hello world"));
    assert!(content.contains("Completed with exit code: 0"));
    // every line carries a timestamp
    for line in content.lines() {
        assert!(line.starts_with('['), "unstamped line: {line}");
    }
}

#[tokio::test]
async fn run_logged_records_nonzero_exit_code() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("task.log");
    let adapter = LocalProcessAdapter::new();

    let code = adapter
        .run_logged("sh", "-c \"exit 7\"", &log)
        .await
        .unwrap();
    assert_eq!(code, 7);

    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.contains("Completed with exit code: 7"));
}

#[tokio::test]
async fn run_logged_spawn_failure_appends_error_line() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("task.log");
    let adapter = LocalProcessAdapter::new();

    let result = adapter
        .run_logged("wcron-no-such-binary", "", &log)
        .await;
    assert!(result.is_err());

    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.contains("Error:"));
}

#[tokio::test]
async fn run_logged_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("logs").join("nested").join("task.log");
    let adapter = LocalProcessAdapter::new();

    adapter.run_logged("echo", "ok", &log).await.unwrap();
    assert!(log.exists());
}
