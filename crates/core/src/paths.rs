// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Well-known locations under the user's `~/.wcron` directory

use std::path::PathBuf;

/// `~/.wcron`, the directory holding the crontab file, config, logs,
/// and stored credentials. `None` when the home directory is unknown.
pub fn wcron_home() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".wcron"))
}

/// `~/.wcron/crontab`
pub fn crontab_path() -> Option<PathBuf> {
    wcron_home().map(|dir| dir.join("crontab"))
}

/// `~/.wcron/config.toml`
pub fn config_path() -> Option<PathBuf> {
    wcron_home().map(|dir| dir.join("config.toml"))
}

/// `~/.wcron/logs`, where `@log` output capture lands
pub fn logs_dir() -> Option<PathBuf> {
    wcron_home().map(|dir| dir.join("logs"))
}

/// `~/.wcron/credentials`, DPAPI-protected secrets
pub fn credentials_dir() -> Option<PathBuf> {
    wcron_home().map(|dir| dir.join("credentials"))
}
