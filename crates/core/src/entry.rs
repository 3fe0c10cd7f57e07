// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Crontab entry parsing and deterministic task identities
//!
//! One entry is one logical scheduled job, parsed from a single crontab
//! line. Parsing is tolerant: a structurally invalid line yields `None`
//! rather than an error, so a stray typo in a hand-edited file never blocks
//! the valid entries around it.

use crate::schedule::Schedule;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// How a registered task authenticates when it runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Interactive token, no stored password
    #[default]
    Interactive,
    /// Run whether logged on or not, password stored with the registration
    Password,
    /// Service-for-user logon, no password stored
    S4u,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Interactive => write!(f, "interactive"),
            AuthMode::Password => write!(f, "password"),
            AuthMode::S4u => write!(f, "s4u"),
        }
    }
}

/// Optional modifiers parsed from inline `@` markers on the command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Behaviors {
    /// Wrap execution with output capture to a per-task log file
    pub logging: bool,
    /// Authentication mode override; `None` falls back to the configured default
    pub auth: Option<AuthMode>,
}

/// One logical scheduled job parsed from a crontab line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Deterministic content-derived task name, e.g. `cron-backup-a1b2c3d4`
    pub identity: String,
    pub schedule: Schedule,
    pub command: String,
    /// Arguments passed verbatim to the command, possibly empty
    pub arguments: String,
    pub behaviors: Behaviors,
    /// The verbatim source line, kept for diagnostics
    pub original_line: String,
}

/// Inline markers recognized at the front of the command token.
///
/// Prefix matches, mirroring the file format: `@log` immediately followed by
/// the command is accepted.
const MARKERS: [(&str, Marker); 3] = [
    ("@log", Marker::Log),
    ("@pwd", Marker::Password),
    ("@s4u", Marker::S4u),
];

#[derive(Clone, Copy)]
enum Marker {
    Log,
    Password,
    S4u,
}

impl Entry {
    /// Parse one crontab line. Returns `None` for structurally invalid lines.
    ///
    /// Shorthand form (`@daily cmd [args...]`) needs two tokens; the cron
    /// form (`m h dom mon dow cmd [args...]`) needs six. Tokens after the
    /// command are rejoined with single spaces as the argument string.
    pub fn parse(line: &str) -> Option<Entry> {
        let line = line.trim();
        let tokens = split_line(line);
        if tokens.len() < 2 {
            return None;
        }

        let shorthand_form =
            tokens[0].starts_with('@') || tokens[0].parse::<crate::Shorthand>().is_ok();

        let (schedule, command, rest) = if shorthand_form {
            let schedule = Schedule::parse(&tokens[0]).ok()?;
            (schedule, tokens[1].clone(), &tokens[2..])
        } else {
            if tokens.len() < 6 {
                return None;
            }
            let schedule = Schedule::parse(&tokens[..5].join(" ")).ok()?;
            (schedule, tokens[5].clone(), &tokens[6..])
        };

        let mut command = command;
        let mut arguments = rest.join(" ");
        let mut behaviors = Behaviors::default();

        // Strip stacked markers off the command position. A marker may be
        // glued to the command (`@logC:\x.exe`) or stand alone, in which
        // case the real command is pulled from the front of the arguments.
        while let Some((prefix, marker)) = MARKERS
            .iter()
            .copied()
            .find(|(prefix, _)| command.to_lowercase().starts_with(prefix))
        {
            match marker {
                Marker::Log => behaviors.logging = true,
                Marker::Password => behaviors.auth = Some(AuthMode::Password),
                Marker::S4u => behaviors.auth = Some(AuthMode::S4u),
            }
            command = command[prefix.len()..].trim_start().to_string();
            if command.is_empty() {
                if arguments.is_empty() {
                    return None;
                }
                match arguments.split_once(' ') {
                    Some((head, tail)) => {
                        command = head.to_string();
                        arguments = tail.to_string();
                    }
                    None => {
                        command = std::mem::take(&mut arguments);
                    }
                }
            }
        }

        let identity = task_identity(&schedule, &command, &arguments);

        Some(Entry {
            identity,
            schedule,
            command,
            arguments,
            behaviors,
            original_line: line.to_string(),
        })
    }
}

/// Quote-aware whitespace tokenizer.
///
/// Whitespace outside double quotes separates tokens; inside quotes it is
/// literal. Quotes themselves are not kept. An unterminated quote is
/// implicitly closed at end of line.
pub fn split_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Deterministic content-derived task name.
///
/// SHA-256 over `schedule|command|arguments` (normalized schedule), first
/// eight hex characters, prefixed with a readable token from the command
/// basename. Same triple in, same name out, across process runs.
pub fn task_identity(schedule: &Schedule, command: &str, arguments: &str) -> String {
    let content = format!("{}|{}|{}", schedule.normalized(), command, arguments);
    let digest = Sha256::digest(content.as_bytes());
    let hex = format!("{:x}", digest);
    format!("cron-{}-{}", command_stem(command), &hex[..8]).replace(' ', "-")
}

/// Basename of the command without directories or extension.
///
/// Handles both slash flavors itself rather than going through `Path`, so
/// `C:\scripts\check.ps1` yields `check` on any host platform.
fn command_stem(command: &str) -> &str {
    let base = command.rsplit(['/', '\\']).next().unwrap_or(command);
    match base.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => base,
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
