// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! wcron - crontab for the Windows Task Scheduler

mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wcron_adapters::{
    CredentialAdapter, DpapiCredentialAdapter, SchtasksAdapter, TracedSchedulerAdapter,
};
use wcron_core::{Config, CrontabFile};
use wcron_engine::{SyncEngine, SyncPolicy};

#[derive(Parser)]
#[command(
    name = "wcron",
    version,
    about = "Manage Windows scheduled tasks with a crontab"
)]
struct Cli {
    /// List all cron jobs
    #[arg(short = 'l', long)]
    list: bool,

    /// Edit the crontab file, then synchronize
    #[arg(short = 'e', long)]
    edit: bool,

    /// Remove all cron jobs
    #[arg(short = 'r', long)]
    remove: bool,

    /// Crontab file path (defaults to ~/.wcron/crontab)
    #[arg(long)]
    crontab: Option<PathBuf>,

    /// Execute a command with a hidden window (internal use by the Task Scheduler)
    #[arg(short = 'c', long = "command", hide = true)]
    command: Option<String>,

    /// Log file path for command execution (internal use)
    #[arg(long, hide = true)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Internal execution mode comes first: it is what registered tasks
    // invoke, and must never print the management UI.
    if let Some(command) = &cli.command {
        let code = commands::exec::run(command, cli.log_file.as_deref()).await;
        std::process::exit(code);
    }

    let selected = [cli.list, cli.edit, cli.remove]
        .iter()
        .filter(|flag| **flag)
        .count();
    if selected == 0 {
        output::print_usage();
        return Ok(());
    }
    if selected > 1 {
        anyhow::bail!("only one of --list, --edit, --remove can be given at a time");
    }

    let config = Config::load_default()?;
    let crontab = match &cli.crontab {
        Some(path) => CrontabFile::new(path.clone()),
        None => CrontabFile::default_location()?,
    };

    let scheduler = build_scheduler(&config).await?;
    let engine = SyncEngine::new(
        scheduler,
        SyncPolicy {
            default_auth: config.auth_mode,
        },
    );

    if cli.list {
        commands::list::run(&engine, &crontab).await
    } else if cli.edit {
        commands::edit::run(&engine, &crontab, &config).await
    } else {
        commands::remove::run(&engine, &crontab).await
    }
}

/// Wire the real scheduler backend: schtasks, the account to run tasks as,
/// and a stored password when one is available.
async fn build_scheduler(
    config: &Config,
) -> Result<TracedSchedulerAdapter<SchtasksAdapter>> {
    let account = config.run_as.clone().unwrap_or_else(|| {
        std::env::var("USERNAME")
            .or_else(|_| std::env::var("USER"))
            .unwrap_or_default()
    });

    let mut scheduler = SchtasksAdapter::new()?;
    if !account.is_empty() {
        scheduler = scheduler.with_run_as(account.as_str());

        // A missing or unreachable credential store only matters for
        // entries that actually request password mode; registration of
        // those will report the missing credential.
        match DpapiCredentialAdapter::new() {
            Ok(credentials) => match credentials.get(&account).await {
                Ok(Some(password)) => scheduler = scheduler.with_password(password),
                Ok(None) => {}
                Err(e) => tracing::debug!(error = %e, "credential store unavailable"),
            },
            Err(e) => tracing::debug!(error = %e, "credential store unavailable"),
        }
    }

    Ok(TracedSchedulerAdapter::new(scheduler))
}
