// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration, `~/.wcron/config.toml`
//!
//! Holds the policy decisions that are not part of the crontab file itself:
//! the default authentication mode for registered tasks and an optional
//! editor override. A missing file means defaults.

use crate::entry::AuthMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Tool configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Authentication mode used when an entry carries no `@pwd`/`@s4u` marker
    pub auth_mode: AuthMode,
    /// Editor to use for `wcron -e`, before `$VISUAL`/`$EDITOR`
    pub editor: Option<String>,
    /// Account name for password/S4U registrations; defaults to the current user
    pub run_as: Option<String>,
}

impl Config {
    /// Load from a path; a missing file yields the default configuration
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load from the default location, or defaults when the home directory
    /// is unknown
    pub fn load_default() -> Result<Self, ConfigError> {
        match crate::paths::config_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
