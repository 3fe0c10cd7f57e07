// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wcron -r` - remove all managed cron jobs and the crontab file

use anyhow::Result;
use wcron_adapters::SchedulerAdapter;
use wcron_core::CrontabFile;
use wcron_engine::SyncEngine;

pub async fn run<S: SchedulerAdapter>(
    engine: &SyncEngine<S>,
    crontab: &CrontabFile,
) -> Result<()> {
    let result = engine.remove_all().await;

    // The file is cleared even when some deletions failed: the remaining
    // tasks are listed in the error report and a later -e retries them.
    crontab.clear()?;

    match result {
        Ok(removed) => {
            println!("Removed {} task(s) and cleared the crontab file", removed);
            Ok(())
        }
        Err(e) => {
            eprintln!("Some tasks could not be removed:");
            for line in e.errors() {
                eprintln!("  {}", line);
            }
            anyhow::bail!("removal finished with {} failure(s)", e.errors().len())
        }
    }
}
