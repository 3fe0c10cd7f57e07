// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort synchronization against the scheduler backend
//!
//! The backend has no transactional registration primitive, so partial
//! success is preferable to all-or-nothing rollback: every per-entry
//! failure is recorded and reported, while the rest of the crontab is still
//! applied. Nothing is retried within one sync; retry is the next
//! user-initiated sync.

use crate::plan::compute_plan;
use thiserror::Error;
use wcron_adapters::{SchedulerAdapter, TaskSpec};
use wcron_core::{AuthMode, Entry};

/// Aggregate sync failure: one message per failed operation
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("sync completed with errors:\n{}", errors.join("\n"))]
    Partial { errors: Vec<String> },
}

impl SyncError {
    pub fn errors(&self) -> &[String] {
        match self {
            SyncError::Partial { errors } => errors,
        }
    }
}

/// Policy decisions injected into the engine
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncPolicy {
    /// Authentication mode for entries without an explicit marker
    pub default_auth: AuthMode,
}

/// Counts of successfully applied operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub registered: usize,
    pub deleted: usize,
}

/// Reconciles desired entries against the scheduler's managed namespace
#[derive(Debug, Clone)]
pub struct SyncEngine<S> {
    scheduler: S,
    policy: SyncPolicy,
}

impl<S: SchedulerAdapter> SyncEngine<S> {
    pub fn new(scheduler: S, policy: SyncPolicy) -> Self {
        Self { scheduler, policy }
    }

    /// Synchronize the scheduler to exactly the desired entries.
    ///
    /// Deletion pass first, then create/update. Each operation failure is
    /// caught individually and recorded; processing continues. Any recorded
    /// failure fails the sync as a whole, with the report of what did apply
    /// carried alongside the aggregated error messages.
    pub async fn sync(&self, desired: &[Entry]) -> Result<SyncReport, SyncError> {
        let mut errors = Vec::new();
        let mut report = SyncReport::default();

        if let Err(e) = self.scheduler.ensure_namespace().await {
            errors.push(format!("failed to prepare task folder: {}", e));
        }

        let current = match self.scheduler.list_managed().await {
            Ok(current) => current,
            Err(e) => {
                // Without the current view no deletions can be computed;
                // registrations are still idempotent, so proceed with those.
                errors.push(format!("failed to list registered tasks: {}", e));
                Vec::new()
            }
        };

        let plan = compute_plan(desired, &current);
        tracing::info!(
            upsert = plan.upsert.len(),
            delete = plan.delete.len(),
            "applying sync plan"
        );

        for name in &plan.delete {
            match self.scheduler.delete(name).await {
                Ok(()) => report.deleted += 1,
                Err(e) => errors.push(format!("failed to delete task '{}': {}", name, e)),
            }
        }

        for entry in &plan.upsert {
            let spec = TaskSpec::from_entry(entry, self.policy.default_auth);
            match self.scheduler.register(&spec).await {
                Ok(()) => report.registered += 1,
                Err(e) => errors.push(format!("failed to create task '{}': {}", spec.name, e)),
            }
        }

        if errors.is_empty() {
            Ok(report)
        } else {
            Err(SyncError::Partial { errors })
        }
    }

    /// Delete every task under the managed namespace, best-effort.
    ///
    /// Returns how many were removed; individual failures aggregate the
    /// same way as in `sync`.
    pub async fn remove_all(&self) -> Result<usize, SyncError> {
        let current = match self.scheduler.list_managed().await {
            Ok(current) => current,
            Err(e) => {
                return Err(SyncError::Partial {
                    errors: vec![format!("failed to list registered tasks: {}", e)],
                })
            }
        };

        let mut errors = Vec::new();
        let mut deleted = 0;
        for task in &current {
            match self.scheduler.delete(&task.name).await {
                Ok(()) => deleted += 1,
                Err(e) => errors.push(format!("failed to delete task '{}': {}", task.name, e)),
            }
        }

        if errors.is_empty() {
            Ok(deleted)
        } else {
            Err(SyncError::Partial { errors })
        }
    }

    /// The tasks currently registered under the managed namespace
    pub async fn list(
        &self,
    ) -> Result<Vec<wcron_adapters::TaskInfo>, wcron_adapters::SchedulerError> {
        self.scheduler.list_managed().await
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
