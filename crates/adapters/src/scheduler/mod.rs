// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task Scheduler backend adapter
//!
//! The reconciliation engine never constructs a scheduler client itself; it
//! receives this capability set. Registrations live under a dedicated
//! managed folder so the tool never touches unrelated user tasks.

mod schtasks;
mod triggers;

pub use schtasks::SchtasksAdapter;
pub use triggers::trigger_args;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSchedulerAdapter, SchedulerCall};

use async_trait::async_trait;
use chrono::{DateTime, Local};
use thiserror::Error;
use wcron_core::{AuthMode, Entry, Schedule};

/// The managed namespace: every task this tool owns is registered under it
pub const MANAGED_FOLDER: &str = "\\Wcron";

/// Errors from scheduler operations
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("failed to register task '{name}': {message}")]
    Registration { name: String, message: String },
    #[error("failed to delete task '{name}': {message}")]
    Deletion { name: String, message: String },
    #[error("failed to query scheduled tasks: {0}")]
    Query(String),
    #[error("unsupported schedule '{schedule}': {reason}")]
    UnsupportedSchedule { schedule: String, reason: String },
    #[error("home directory could not be determined")]
    NoHome,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The backend's view of a registered task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInfo {
    /// Task name within the managed folder (= the entry identity)
    pub name: String,
    pub enabled: bool,
    pub state: String,
    pub next_run: Option<DateTime<Local>>,
    pub last_run: Option<DateTime<Local>>,
}

/// Everything the backend needs to register one task
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSpec {
    pub name: String,
    pub schedule: Schedule,
    pub command: String,
    pub arguments: String,
    /// Wrap execution with output capture to a per-task log file
    pub logging: bool,
    pub auth: AuthMode,
    pub description: String,
}

impl TaskSpec {
    /// Build a spec from a parsed entry, resolving the effective auth mode
    /// (per-entry marker beats the configured default).
    pub fn from_entry(entry: &Entry, default_auth: AuthMode) -> Self {
        let description = format!(
            "Cron: {} {} {}",
            entry.schedule.raw(),
            entry.command,
            entry.arguments
        )
        .trim_end()
        .to_string();

        Self {
            name: entry.identity.clone(),
            schedule: entry.schedule.clone(),
            command: entry.command.clone(),
            arguments: entry.arguments.clone(),
            logging: entry.behaviors.logging,
            auth: entry.behaviors.auth.unwrap_or(default_auth),
            description,
        }
    }
}

/// Adapter for the OS task scheduler
#[async_trait]
pub trait SchedulerAdapter: Clone + Send + Sync + 'static {
    /// Idempotent creation of the managed container
    async fn ensure_namespace(&self) -> Result<(), SchedulerError>;

    /// All tasks currently registered under the managed namespace
    async fn list_managed(&self) -> Result<Vec<TaskInfo>, SchedulerError>;

    /// Look up a single managed task by name
    async fn get_task(&self, name: &str) -> Result<Option<TaskInfo>, SchedulerError>;

    /// Create-or-update a task registration by name
    async fn register(&self, spec: &TaskSpec) -> Result<(), SchedulerError>;

    /// Delete a managed task by name
    async fn delete(&self, name: &str) -> Result<(), SchedulerError>;
}
