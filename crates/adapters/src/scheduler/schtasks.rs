// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `schtasks.exe`-backed scheduler adapter
//!
//! Each managed task's action re-invokes this tool's own binary in its
//! hidden execution mode (`wcron --command base64:...`), so output capture
//! and window hiding behave the same for every registered command. The
//! command line is base64-encoded to survive the quoting layers between
//! schtasks and the shell.

use super::{
    trigger_args, SchedulerAdapter, SchedulerError, TaskInfo, TaskSpec, MANAGED_FOLDER,
};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::path::PathBuf;
use tokio::process::Command;
use wcron_core::AuthMode;

/// Scheduler adapter shelling out to `schtasks.exe`
#[derive(Debug, Clone)]
pub struct SchtasksAdapter {
    runner: PathBuf,
    logs_dir: PathBuf,
    run_as: Option<String>,
    password: Option<String>,
}

impl SchtasksAdapter {
    /// Create an adapter using this process's binary as the task runner and
    /// `~/.wcron/logs` for output capture.
    pub fn new() -> Result<Self, SchedulerError> {
        let runner = std::env::current_exe()?;
        let logs_dir = wcron_core::paths::logs_dir().ok_or(SchedulerError::NoHome)?;
        Ok(Self {
            runner,
            logs_dir,
            run_as: None,
            password: None,
        })
    }

    /// Account used for password/S4U registrations
    pub fn with_run_as(mut self, account: impl Into<String>) -> Self {
        self.run_as = Some(account.into());
        self
    }

    /// Password used for password-mode registrations
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    fn task_path(&self, name: &str) -> String {
        format!("{}\\{}", MANAGED_FOLDER, name)
    }

    /// The `/TR` action string: this binary in hidden execution mode
    fn action(&self, spec: &TaskSpec) -> String {
        let command_line = if spec.arguments.is_empty() {
            spec.command.clone()
        } else {
            format!("{} {}", spec.command, spec.arguments)
        };
        let encoded = BASE64.encode(command_line.as_bytes());

        let mut action = format!(
            "\"{}\" --command base64:{}",
            self.runner.display(),
            encoded
        );
        if spec.logging {
            let log_file = self.logs_dir.join(format!("{}.log", spec.name));
            action.push_str(&format!(" --log-file \"{}\"", log_file.display()));
        }
        action
    }

    fn account(&self) -> String {
        self.run_as.clone().unwrap_or_else(|| {
            std::env::var("USERNAME")
                .or_else(|_| std::env::var("USER"))
                .unwrap_or_else(|_| String::new())
        })
    }

    async fn run(&self, args: &[String]) -> Result<std::process::Output, SchedulerError> {
        tracing::debug!(?args, "schtasks");
        Ok(Command::new("schtasks").args(args).output().await?)
    }
}

#[async_trait]
impl SchedulerAdapter for SchtasksAdapter {
    async fn ensure_namespace(&self) -> Result<(), SchedulerError> {
        // schtasks creates the folder implicitly when the first task is
        // registered under it; only the logs directory needs to exist.
        std::fs::create_dir_all(&self.logs_dir)?;
        Ok(())
    }

    async fn list_managed(&self) -> Result<Vec<TaskInfo>, SchedulerError> {
        let args = vec![
            "/Query".to_string(),
            "/TN".to_string(),
            format!("{}\\", MANAGED_FOLDER),
            "/FO".to_string(),
            "CSV".to_string(),
            "/NH".to_string(),
        ];
        let output = self.run(&args).await?;

        if !output.status.success() {
            // An absent folder means no managed tasks yet, not a failure
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("cannot find") || stderr.contains("does not exist") {
                return Ok(Vec::new());
            }
            return Err(SchedulerError::Query(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_query_csv(&stdout))
    }

    async fn get_task(&self, name: &str) -> Result<Option<TaskInfo>, SchedulerError> {
        let args = vec![
            "/Query".to_string(),
            "/TN".to_string(),
            self.task_path(name),
            "/FO".to_string(),
            "CSV".to_string(),
            "/NH".to_string(),
        ];
        let output = self.run(&args).await?;
        if !output.status.success() {
            return Ok(None);
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_query_csv(&stdout).into_iter().next())
    }

    async fn register(&self, spec: &TaskSpec) -> Result<(), SchedulerError> {
        let mut args = vec![
            "/Create".to_string(),
            "/TN".to_string(),
            self.task_path(&spec.name),
            "/TR".to_string(),
            self.action(spec),
            // overwrite an existing registration: same name implies same
            // desired behavior, because the name is content-derived
            "/F".to_string(),
        ];
        args.extend(trigger_args(&spec.schedule)?);

        match spec.auth {
            AuthMode::Interactive => {}
            AuthMode::Password => {
                let password =
                    self.password
                        .as_deref()
                        .ok_or_else(|| SchedulerError::Registration {
                            name: spec.name.clone(),
                            message: "password mode requested but no stored credential".into(),
                        })?;
                args.extend([
                    "/RU".to_string(),
                    self.account(),
                    "/RP".to_string(),
                    password.to_string(),
                ]);
            }
            AuthMode::S4u => {
                args.extend(["/RU".to_string(), self.account(), "/NP".to_string()]);
            }
        }

        let output = self.run(&args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SchedulerError::Registration {
                name: spec.name.clone(),
                message: stderr.trim().to_string(),
            });
        }
        tracing::info!(name = %spec.name, "task registered");
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), SchedulerError> {
        let args = vec![
            "/Delete".to_string(),
            "/TN".to_string(),
            self.task_path(name),
            "/F".to_string(),
        ];
        let output = self.run(&args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SchedulerError::Deletion {
                name: name.to_string(),
                message: stderr.trim().to_string(),
            });
        }
        tracing::info!(name, "task deleted");
        Ok(())
    }
}

/// Parse `schtasks /Query /FO CSV /NH` output: one
/// `"TaskName","Next Run Time","Status"` row per task.
fn parse_query_csv(output: &str) -> Vec<TaskInfo> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let fields = split_csv_line(line);
            let full_name = fields.first()?;
            // Tasks outside the managed folder are never ours
            let name = full_name
                .strip_prefix(&format!("{}\\", MANAGED_FOLDER))?
                .to_string();
            let next_run = fields.get(1).and_then(|s| parse_run_time(s));
            let state = fields.get(2).cloned().unwrap_or_default();
            Some(TaskInfo {
                name,
                enabled: state != "Disabled",
                state,
                next_run,
                last_run: None,
            })
        })
        .collect()
}

/// Minimal CSV field splitter for schtasks output (quoted fields, comma
/// separated, `""` escapes a quote).
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// schtasks prints run times in the system locale; accept the common
/// `M/D/YYYY h:mm:ss AM` and ISO-ish forms, otherwise `None`.
fn parse_run_time(text: &str) -> Option<DateTime<Local>> {
    let text = text.trim();
    if text.is_empty() || text == "N/A" {
        return None;
    }
    for format in ["%m/%d/%Y %I:%M:%S %p", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Local.from_local_datetime(&naive).single();
        }
    }
    None
}

#[cfg(test)]
#[path = "schtasks_tests.rs"]
mod tests;
