// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake process adapter for testing

use super::{ProcessAdapter, ProcessError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Recorded process call
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessCall {
    Hidden {
        command: String,
        arguments: String,
    },
    Logged {
        command: String,
        arguments: String,
        log_file: PathBuf,
    },
}

/// Fake process adapter returning a fixed exit code
#[derive(Clone, Default)]
pub struct FakeProcessAdapter {
    calls: Arc<Mutex<Vec<ProcessCall>>>,
    exit_code: Arc<Mutex<i32>>,
}

impl FakeProcessAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit code future runs will report
    pub fn set_exit_code(&self, code: i32) {
        *self.exit_code.lock().unwrap_or_else(|e| e.into_inner()) = code;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ProcessCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl ProcessAdapter for FakeProcessAdapter {
    async fn run_hidden(&self, command: &str, arguments: &str) -> Result<i32, ProcessError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ProcessCall::Hidden {
                command: command.to_string(),
                arguments: arguments.to_string(),
            });
        Ok(*self.exit_code.lock().unwrap_or_else(|e| e.into_inner()))
    }

    async fn run_logged(
        &self,
        command: &str,
        arguments: &str,
        log_file: &Path,
    ) -> Result<i32, ProcessError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ProcessCall::Logged {
                command: command.to_string(),
                arguments: arguments.to_string(),
                log_file: log_file.to_path_buf(),
            });
        Ok(*self.exit_code.lock().unwrap_or_else(|e| e.into_inner()))
    }
}
