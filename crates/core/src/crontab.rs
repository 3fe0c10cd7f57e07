// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The crontab file store
//!
//! Reads and writes the user's crontab as an ordered list of lines. Blank
//! lines and `#` comments are skipped on read; lines that fail to parse are
//! dropped silently (the entry parser's tolerance policy). Writing is a full
//! overwrite: callers supply the complete desired entry list.

use crate::entry::{AuthMode, Entry};
use crate::paths;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::process::Command;

/// Errors from crontab file operations
#[derive(Debug, Error)]
pub enum CrontabError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("home directory could not be determined")]
    NoHome,
    #[error("editor '{editor}' failed to start: {message}")]
    EditorSpawn { editor: String, message: String },
    #[error("editor '{editor}' exited with failure")]
    EditorExit { editor: String },
}

/// Comment block written at the top of every generated crontab file
const HEADER: &str = "\
# wcron crontab
# Format: minute hour day month day-of-week command [arguments...]
#    or:  @shorthand command [arguments...]
# Examples:
#   0 9 * * * C:\\scripts\\backup.bat
#   */15 * * * * powershell.exe -File C:\\scripts\\check.ps1
#   @daily @log rclone sync C:\\data remote:backup
";

/// The user's crontab file
#[derive(Debug, Clone)]
pub struct CrontabFile {
    path: PathBuf,
}

impl CrontabFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default location, `~/.wcron/crontab`
    pub fn default_location() -> Result<Self, CrontabError> {
        let path = paths::crontab_path().ok_or(CrontabError::NoHome)?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse every data line of the file, in file order.
    ///
    /// A missing file is an empty crontab, not an error.
    pub fn read_all(&self) -> Result<Vec<Entry>, CrontabError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let mut entries = Vec::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match Entry::parse(trimmed) {
                Some(entry) => entries.push(entry),
                None => {
                    tracing::debug!(line = trimmed, "skipping malformed crontab line");
                }
            }
        }

        Ok(entries)
    }

    /// Overwrite the file with a header block and one line per entry
    pub fn write_all(&self, entries: &[Entry]) -> Result<(), CrontabError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut content = String::from(HEADER);
        content.push('\n');
        for entry in entries {
            content.push_str(&render_line(entry));
            content.push('\n');
        }

        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Delete the file; a nonexistent file is not an error
    pub fn clear(&self) -> Result<(), CrontabError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Raw file text for display; empty string for a missing file
    pub fn content(&self) -> Result<String, CrontabError> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        Ok(std::fs::read_to_string(&self.path)?)
    }

    /// Open the file in the user's editor and block until it exits.
    ///
    /// The file is created with the header block first if missing. Editor
    /// resolution order: explicit override, `$VISUAL`, `$EDITOR`, then the
    /// platform default.
    pub async fn open_editor(&self, override_editor: Option<&str>) -> Result<(), CrontabError> {
        if !self.path.exists() {
            self.write_all(&[])?;
        }

        let editor = resolve_editor(override_editor);
        tracing::info!(%editor, path = %self.path.display(), "opening editor");

        let status = Command::new(&editor)
            .arg(&self.path)
            .status()
            .await
            .map_err(|e| CrontabError::EditorSpawn {
                editor: editor.clone(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(CrontabError::EditorExit { editor });
        }
        Ok(())
    }
}

#[cfg(windows)]
const DEFAULT_EDITOR: &str = "notepad.exe";
#[cfg(not(windows))]
const DEFAULT_EDITOR: &str = "vi";

fn resolve_editor(override_editor: Option<&str>) -> String {
    if let Some(editor) = override_editor {
        if !editor.trim().is_empty() {
            return editor.to_string();
        }
    }
    for var in ["VISUAL", "EDITOR"] {
        if let Ok(editor) = std::env::var(var) {
            if !editor.trim().is_empty() {
                return editor;
            }
        }
    }
    DEFAULT_EDITOR.to_string()
}

/// Reconstruct the stored line for an entry: raw schedule, behavior markers,
/// command (re-quoted if it contains whitespace), arguments.
fn render_line(entry: &Entry) -> String {
    let mut line = String::new();
    line.push_str(entry.schedule.raw());
    line.push(' ');

    if entry.behaviors.logging {
        line.push_str("@log ");
    }
    match entry.behaviors.auth {
        Some(AuthMode::Password) => line.push_str("@pwd "),
        Some(AuthMode::S4u) => line.push_str("@s4u "),
        Some(AuthMode::Interactive) | None => {}
    }

    if entry.command.contains(char::is_whitespace) {
        line.push('"');
        line.push_str(&entry.command);
        line.push('"');
    } else {
        line.push_str(&entry.command);
    }

    if !entry.arguments.is_empty() {
        line.push(' ');
        line.push_str(&entry.arguments);
    }

    line.trim_end().to_string()
}

#[cfg(test)]
#[path = "crontab_tests.rs"]
mod tests;
