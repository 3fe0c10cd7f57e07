// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wcron -l` - list managed cron jobs

use crate::output;
use anyhow::{Context, Result};
use wcron_adapters::SchedulerAdapter;
use wcron_core::CrontabFile;
use wcron_engine::SyncEngine;

pub async fn run<S: SchedulerAdapter>(
    engine: &SyncEngine<S>,
    crontab: &CrontabFile,
) -> Result<()> {
    let tasks = engine
        .list()
        .await
        .context("failed to list registered tasks")?;

    if tasks.is_empty() {
        println!("No cron jobs");
        println!("Run 'wcron -e' to create one");
    } else {
        print!("{}", output::render_tasks(&tasks));
    }

    println!();
    println!("Crontab file: {}", crontab.path().display());
    Ok(())
}
