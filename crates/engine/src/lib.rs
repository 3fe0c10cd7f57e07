// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wcron-engine: reconciliation between the crontab file and the scheduler
//!
//! Given the desired entries (from the crontab store) and whatever is
//! currently registered under the managed namespace, the engine computes
//! the create/update/delete plan and applies it best-effort: individual
//! failures are isolated and reported, never allowed to block the rest.

mod plan;
mod sync;

pub use plan::{compute_plan, SyncPlan};
pub use sync::{SyncEngine, SyncError, SyncPolicy, SyncReport};
