// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local process adapter

use super::{ProcessAdapter, ProcessError};
use async_trait::async_trait;
use chrono::Local;
use std::io::Write;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use wcron_core::split_line;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Runs commands on the local machine with `tokio::process`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalProcessAdapter;

impl LocalProcessAdapter {
    pub fn new() -> Self {
        Self
    }

    fn build(command: &str, arguments: &str) -> Command {
        let mut cmd = Command::new(command);
        // arguments use the same quote-aware splitting as the crontab file
        cmd.args(split_line(arguments));
        #[cfg(windows)]
        cmd.creation_flags(CREATE_NO_WINDOW);
        cmd
    }
}

#[async_trait]
impl ProcessAdapter for LocalProcessAdapter {
    async fn run_hidden(&self, command: &str, arguments: &str) -> Result<i32, ProcessError> {
        let status = Self::build(command, arguments)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| ProcessError::Spawn {
                command: command.to_string(),
                message: e.to_string(),
            })?;

        Ok(status.code().unwrap_or(-1))
    }

    async fn run_logged(
        &self,
        command: &str,
        arguments: &str,
        log_file: &Path,
    ) -> Result<i32, ProcessError> {
        let full = if arguments.is_empty() {
            command.to_string()
        } else {
            format!("{} {}", command, arguments)
        };
        append_line(log_file, &format!("Starting: {}", full))?;

        let output = match Self::build(command, arguments)
            .stdin(Stdio::null())
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                append_line(log_file, &format!("Error: {}", e))?;
                return Err(ProcessError::Spawn {
                    command: command.to_string(),
                    message: e.to_string(),
                });
            }
        };

        for stream in [&output.stdout, &output.stderr] {
            for line in String::from_utf8_lossy(stream).lines() {
                append_line(log_file, line)?;
            }
        }

        let code = output.status.code().unwrap_or(-1);
        append_line(log_file, &format!("Completed with exit code: {}", code))?;
        Ok(code)
    }
}

/// Append one `[timestamp] text` line, creating the file if needed
fn append_line(log_file: &Path, text: &str) -> Result<(), std::io::Error> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    writeln!(file, "[{}] {}", timestamp, text)
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
