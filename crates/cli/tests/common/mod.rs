// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI integration tests

use assert_cmd::Command;
use std::path::Path;

/// A `wcron` invocation with its home directory pinned to a temp dir, so
/// tests never touch the real `~/.wcron`.
pub fn wcron(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wcron").unwrap();
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("VISUAL")
        .env_remove("EDITOR");
    cmd
}
