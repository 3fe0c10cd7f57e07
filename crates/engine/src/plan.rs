// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure sync-plan computation

use std::collections::HashSet;
use wcron_adapters::TaskInfo;
use wcron_core::Entry;

/// What one synchronization pass will do. Computed fresh on every sync,
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct SyncPlan {
    /// Entries to register (create-or-update; the content-derived identity
    /// makes overwriting by name safe)
    pub upsert: Vec<Entry>,
    /// Identities currently registered but no longer desired
    pub delete: Vec<String>,
}

impl SyncPlan {
    pub fn is_empty(&self) -> bool {
        self.upsert.is_empty() && self.delete.is_empty()
    }
}

/// Diff the desired entries against the currently registered tasks.
///
/// Every desired entry is upserted: registering under an existing identity
/// overwrites it, and identical identity implies identical desired
/// behavior, so there is no separate "update" case to detect.
pub fn compute_plan(desired: &[Entry], current: &[TaskInfo]) -> SyncPlan {
    let desired_ids: HashSet<&str> = desired.iter().map(|e| e.identity.as_str()).collect();

    let delete = current
        .iter()
        .filter(|task| !desired_ids.contains(task.name.as_str()))
        .map(|task| task.name.clone())
        .collect();

    SyncPlan {
        upsert: desired.to_vec(),
        delete,
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
