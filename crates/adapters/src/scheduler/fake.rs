// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake scheduler adapter for testing

use super::{SchedulerAdapter, SchedulerError, TaskInfo, TaskSpec};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Recorded scheduler call
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerCall {
    EnsureNamespace,
    ListManaged,
    GetTask { name: String },
    Register { name: String },
    Delete { name: String },
}

/// In-memory scheduler adapter for testing
#[derive(Clone, Default)]
pub struct FakeSchedulerAdapter {
    tasks: Arc<Mutex<HashMap<String, TaskSpec>>>,
    calls: Arc<Mutex<Vec<SchedulerCall>>>,
    fail_register: Arc<Mutex<HashSet<String>>>,
    fail_delete: Arc<Mutex<HashSet<String>>>,
}

impl FakeSchedulerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<SchedulerCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Seed a task as already registered
    pub fn seed(&self, spec: TaskSpec) {
        self.tasks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(spec.name.clone(), spec);
    }

    /// Registered task names, sorted
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tasks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Get a registered spec by name
    pub fn get_spec(&self, name: &str) -> Option<TaskSpec> {
        self.tasks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
    }

    /// Make future registrations of `name` fail
    pub fn fail_register(&self, name: &str) {
        self.fail_register
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string());
    }

    /// Make future deletions of `name` fail
    pub fn fail_delete(&self, name: &str) {
        self.fail_delete
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string());
    }

    fn record(&self, call: SchedulerCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }

    fn info_for(spec: &TaskSpec) -> TaskInfo {
        TaskInfo {
            name: spec.name.clone(),
            enabled: true,
            state: "Ready".to_string(),
            next_run: None,
            last_run: None,
        }
    }
}

#[async_trait]
impl SchedulerAdapter for FakeSchedulerAdapter {
    async fn ensure_namespace(&self) -> Result<(), SchedulerError> {
        self.record(SchedulerCall::EnsureNamespace);
        Ok(())
    }

    async fn list_managed(&self) -> Result<Vec<TaskInfo>, SchedulerError> {
        self.record(SchedulerCall::ListManaged);
        let tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        let mut infos: Vec<TaskInfo> = tasks.values().map(Self::info_for).collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(infos)
    }

    async fn get_task(&self, name: &str) -> Result<Option<TaskInfo>, SchedulerError> {
        self.record(SchedulerCall::GetTask {
            name: name.to_string(),
        });
        let tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        Ok(tasks.get(name).map(Self::info_for))
    }

    async fn register(&self, spec: &TaskSpec) -> Result<(), SchedulerError> {
        self.record(SchedulerCall::Register {
            name: spec.name.clone(),
        });
        let should_fail = self
            .fail_register
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&spec.name);
        if should_fail {
            return Err(SchedulerError::Registration {
                name: spec.name.clone(),
                message: "injected registration failure".to_string(),
            });
        }
        self.tasks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(spec.name.clone(), spec.clone());
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), SchedulerError> {
        self.record(SchedulerCall::Delete {
            name: name.to_string(),
        });
        let should_fail = self
            .fail_delete
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(name);
        if should_fail {
            return Err(SchedulerError::Deletion {
                name: name.to_string(),
                message: "injected deletion failure".to_string(),
            });
        }
        self.tasks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(name);
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
