// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for external I/O: the Task Scheduler backend, the credential
//! store, and the process-execution collaborator.

pub mod credential;
pub mod process;
pub mod scheduler;
pub mod traced;

pub use credential::{CredentialAdapter, CredentialError, DpapiCredentialAdapter};
pub use process::{LocalProcessAdapter, ProcessAdapter, ProcessError};
pub use scheduler::{SchedulerAdapter, SchedulerError, SchtasksAdapter, TaskInfo, TaskSpec};
pub use traced::TracedSchedulerAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use credential::FakeCredentialAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use process::{FakeProcessAdapter, ProcessCall};
#[cfg(any(test, feature = "test-support"))]
pub use scheduler::{FakeSchedulerAdapter, SchedulerCall};
