// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wcron -e` - edit the crontab file and synchronize

use anyhow::Result;
use wcron_adapters::SchedulerAdapter;
use wcron_core::{Config, CrontabFile};
use wcron_engine::SyncEngine;

pub async fn run<S: SchedulerAdapter>(
    engine: &SyncEngine<S>,
    crontab: &CrontabFile,
    config: &Config,
) -> Result<()> {
    crontab.open_editor(config.editor.as_deref()).await?;

    let entries = crontab.read_all()?;
    tracing::info!(count = entries.len(), "synchronizing crontab");

    match engine.sync(&entries).await {
        Ok(report) => {
            println!(
                "Installed {} task(s), removed {}",
                report.registered, report.deleted
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Some entries could not be synchronized:");
            for line in e.errors() {
                eprintln!("  {}", line);
            }
            anyhow::bail!("crontab synchronized with {} failure(s)", e.errors().len())
        }
    }
}
