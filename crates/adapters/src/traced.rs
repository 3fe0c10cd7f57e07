// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::scheduler::{SchedulerAdapter, SchedulerError, TaskInfo, TaskSpec};
use async_trait::async_trait;

/// Wrapper that adds tracing to any SchedulerAdapter
#[derive(Clone)]
pub struct TracedSchedulerAdapter<S> {
    inner: S,
}

impl<S> TracedSchedulerAdapter<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: SchedulerAdapter> SchedulerAdapter for TracedSchedulerAdapter<S> {
    async fn ensure_namespace(&self) -> Result<(), SchedulerError> {
        let result = self.inner.ensure_namespace().await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "ensure_namespace failed");
        }
        result
    }

    async fn list_managed(&self) -> Result<Vec<TaskInfo>, SchedulerError> {
        let start = std::time::Instant::now();
        let result = self.inner.list_managed().await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), elapsed_ms, "listed managed tasks");
            }
            Err(e) => tracing::error!(elapsed_ms, error = %e, "list failed"),
        }

        result
    }

    async fn get_task(&self, name: &str) -> Result<Option<TaskInfo>, SchedulerError> {
        let result = self.inner.get_task(name).await;
        tracing::trace!(name, found = ?result.as_ref().map(|t| t.is_some()).ok(), "queried");
        result
    }

    async fn register(&self, spec: &TaskSpec) -> Result<(), SchedulerError> {
        tracing::info!(
            name = %spec.name,
            schedule = spec.schedule.raw(),
            command = %spec.command,
            logging = spec.logging,
            auth = %spec.auth,
            "registering"
        );

        let start = std::time::Instant::now();
        let result = self.inner.register(spec).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(()) => tracing::info!(name = %spec.name, elapsed_ms, "registered"),
            Err(e) => tracing::error!(name = %spec.name, elapsed_ms, error = %e, "register failed"),
        }

        result
    }

    async fn delete(&self, name: &str) -> Result<(), SchedulerError> {
        let result = self.inner.delete(name).await;
        match &result {
            Ok(()) => tracing::info!(name, "deleted"),
            Err(e) => tracing::error!(name, error = %e, "delete failed"),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
