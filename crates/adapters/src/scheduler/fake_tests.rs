// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use wcron_core::{AuthMode, Entry};

fn spec(line: &str) -> TaskSpec {
    TaskSpec::from_entry(&Entry::parse(line).unwrap(), AuthMode::Interactive)
}

#[tokio::test]
async fn register_then_list_round_trips() {
    let fake = FakeSchedulerAdapter::new();
    let spec = spec("@daily backup.bat");

    fake.register(&spec).await.unwrap();

    let tasks = fake.list_managed().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].name, spec.name);
    assert!(tasks[0].enabled);
}

#[tokio::test]
async fn register_overwrites_same_name() {
    let fake = FakeSchedulerAdapter::new();
    let spec = spec("@daily backup.bat");

    fake.register(&spec).await.unwrap();
    fake.register(&spec).await.unwrap();

    assert_eq!(fake.registered_names().len(), 1);
}

#[tokio::test]
async fn delete_removes_task() {
    let fake = FakeSchedulerAdapter::new();
    let spec = spec("@daily backup.bat");
    fake.seed(spec.clone());

    fake.delete(&spec.name).await.unwrap();
    assert!(fake.registered_names().is_empty());
    assert!(fake.get_task(&spec.name).await.unwrap().is_none());
}

#[tokio::test]
async fn injected_failures_surface_as_errors() {
    let fake = FakeSchedulerAdapter::new();
    let target = spec("@daily backup.bat");

    fake.fail_register(&target.name);
    assert!(fake.register(&target).await.is_err());
    assert!(fake.registered_names().is_empty());

    let other = spec("@hourly check.bat");
    fake.seed(other.clone());
    fake.fail_delete(&other.name);
    assert!(fake.delete(&other.name).await.is_err());
    // a failed delete leaves the task in place
    assert_eq!(fake.registered_names(), vec![other.name]);
}

#[tokio::test]
async fn calls_are_recorded_in_order() {
    let fake = FakeSchedulerAdapter::new();
    let spec = spec("@daily backup.bat");

    fake.ensure_namespace().await.unwrap();
    fake.register(&spec).await.unwrap();
    fake.list_managed().await.unwrap();
    fake.delete(&spec.name).await.unwrap();

    let calls = fake.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0], SchedulerCall::EnsureNamespace);
    assert_eq!(
        calls[1],
        SchedulerCall::Register {
            name: spec.name.clone()
        }
    );
    assert_eq!(calls[2], SchedulerCall::ListManaged);
    assert_eq!(
        calls[3],
        SchedulerCall::Delete {
            name: spec.name.clone()
        }
    );
}
