// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::scheduler::{FakeSchedulerAdapter, TaskSpec};
use wcron_core::{AuthMode, Entry};

fn spec(line: &str) -> TaskSpec {
    TaskSpec::from_entry(&Entry::parse(line).unwrap(), AuthMode::Interactive)
}

#[tokio::test]
async fn traced_wrapper_passes_operations_through() {
    let fake = FakeSchedulerAdapter::new();
    let traced = TracedSchedulerAdapter::new(fake.clone());
    let task = spec("@daily backup.bat");

    traced.ensure_namespace().await.unwrap();
    traced.register(&task).await.unwrap();
    assert_eq!(traced.list_managed().await.unwrap().len(), 1);
    assert!(traced.get_task(&task.name).await.unwrap().is_some());
    traced.delete(&task.name).await.unwrap();

    assert!(fake.registered_names().is_empty());
}

#[tokio::test]
async fn traced_wrapper_passes_errors_through() {
    let fake = FakeSchedulerAdapter::new();
    let traced = TracedSchedulerAdapter::new(fake.clone());
    let task = spec("@daily backup.bat");

    fake.fail_register(&task.name);
    assert!(traced.register(&task).await.is_err());

    fake.seed(spec("@hourly check.bat"));
    let name = fake.registered_names()[0].clone();
    fake.fail_delete(&name);
    assert!(traced.delete(&name).await.is_err());
}
