// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-execution collaborator
//!
//! Used by the hidden `wcron --command` mode that registered tasks invoke,
//! not at sync time. The logged variant appends timestamped start, output,
//! and completion lines to a per-task log file.

mod local;

pub use local::LocalProcessAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProcessAdapter, ProcessCall};

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors from process execution
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to start '{command}': {message}")]
    Spawn { command: String, message: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Adapter for running the user's command
#[async_trait]
pub trait ProcessAdapter: Clone + Send + Sync + 'static {
    /// Run with no console window, discarding output; returns the exit code
    async fn run_hidden(&self, command: &str, arguments: &str) -> Result<i32, ProcessError>;

    /// Run with output captured to `log_file`; returns the exit code
    async fn run_logged(
        &self,
        command: &str,
        arguments: &str,
        log_file: &Path,
    ) -> Result<i32, ProcessError>;
}
