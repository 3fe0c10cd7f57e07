// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Edit and remove flows against a pinned temp home
//!
//! These run on any host: on a machine without schtasks the sync step
//! fails per-entry and the command reports it (graceful backend failure,
//! non-zero exit), which is what these tests pin down.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::wcron;
use predicates::prelude::*;
use tempfile::tempdir;

#[cfg(not(windows))]
#[test]
fn edit_creates_the_crontab_file_with_header() {
    let home = tempdir().unwrap();

    // `true` exits immediately without touching the file
    wcron(home.path())
        .env("EDITOR", "true")
        .arg("-e")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to list registered tasks"));

    let crontab = home.path().join(".wcron").join("crontab");
    assert!(crontab.exists());
    let content = std::fs::read_to_string(&crontab).unwrap();
    assert!(content.starts_with("# wcron crontab"));
}

#[cfg(not(windows))]
#[test]
fn failing_editor_aborts_the_edit() {
    let home = tempdir().unwrap();

    wcron(home.path())
        .env("EDITOR", "false")
        .arg("-e")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exited with failure"));
}

#[cfg(not(windows))]
#[test]
fn config_editor_override_beats_environment() {
    let home = tempdir().unwrap();
    let config_dir = home.path().join(".wcron");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "editor = \"false\"\n").unwrap();

    // EDITOR would succeed, but the configured editor fails: proof the
    // override won.
    wcron(home.path())
        .env("EDITOR", "true")
        .arg("-e")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'false'"));
}

#[cfg(not(windows))]
#[test]
fn remove_clears_the_crontab_file_even_when_backend_fails() {
    let home = tempdir().unwrap();
    let dir = home.path().join(".wcron");
    std::fs::create_dir_all(&dir).unwrap();
    let crontab = dir.join("crontab");
    std::fs::write(&crontab, "@daily backup.bat\n").unwrap();

    wcron(home.path())
        .arg("-r")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be removed"));

    assert!(!crontab.exists());
}

#[cfg(not(windows))]
#[test]
fn custom_crontab_path_is_respected() {
    let home = tempdir().unwrap();
    let custom = home.path().join("custom-tab");

    wcron(home.path())
        .env("EDITOR", "true")
        .args(["-e", "--crontab"])
        .arg(&custom)
        .assert()
        .failure(); // sync still fails without a backend

    assert!(custom.exists());
}
