// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule grammar: five-field cron expressions and @shorthand keywords
//!
//! A schedule is either a five-field cron expression (minute, hour,
//! day-of-month, month, day-of-week) or a named shorthand like `@daily`.
//! Field semantics (ranges, steps) are validated by the Task Scheduler
//! backend, not here; this layer only checks the shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from schedule parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error(
        "invalid schedule '{0}': expected five cron fields (e.g. '0 9 * * *') or one of \
         @hourly, @daily, @midnight, @weekly, @monthly, @yearly, @annually, @reboot, @logon"
    )]
    Unrecognized(String),
}

/// Named schedule aliases standing in for common cron patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shorthand {
    Hourly,
    Daily,
    Midnight,
    Weekly,
    Monthly,
    Yearly,
    Annually,
    Reboot,
    Logon,
}

impl Shorthand {
    /// Canonical `@`-prefixed lowercase form
    pub fn canonical(&self) -> &'static str {
        match self {
            Shorthand::Hourly => "@hourly",
            Shorthand::Daily => "@daily",
            Shorthand::Midnight => "@midnight",
            Shorthand::Weekly => "@weekly",
            Shorthand::Monthly => "@monthly",
            Shorthand::Yearly => "@yearly",
            Shorthand::Annually => "@annually",
            Shorthand::Reboot => "@reboot",
            Shorthand::Logon => "@logon",
        }
    }
}

impl fmt::Display for Shorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl std::str::FromStr for Shorthand {
    type Err = ScheduleError;

    /// Case-insensitive, with or without the leading `@`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.to_lowercase();
        let keyword = keyword.strip_prefix('@').unwrap_or(&keyword);
        match keyword {
            "hourly" => Ok(Shorthand::Hourly),
            "daily" => Ok(Shorthand::Daily),
            "midnight" => Ok(Shorthand::Midnight),
            "weekly" => Ok(Shorthand::Weekly),
            "monthly" => Ok(Shorthand::Monthly),
            "yearly" => Ok(Shorthand::Yearly),
            "annually" => Ok(Shorthand::Annually),
            "reboot" => Ok(Shorthand::Reboot),
            "logon" => Ok(Shorthand::Logon),
            _ => Err(ScheduleError::Unrecognized(s.to_string())),
        }
    }
}

/// The parsed shape of a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleKind {
    /// Five raw cron fields: minute, hour, day-of-month, month, day-of-week
    Cron { fields: [String; 5] },
    /// A shorthand keyword
    Shorthand(Shorthand),
}

/// Normalized representation of "when to run"
///
/// The raw textual form is retained so the stored crontab file round-trips
/// exactly as the user typed it; `normalized()` is the canonical form used
/// for identity hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    raw: String,
    kind: ScheduleKind,
}

impl Schedule {
    /// Parse a schedule string.
    ///
    /// Interpretation order: text splitting into five whitespace-delimited
    /// fields is taken as a cron expression; anything else must match the
    /// shorthand keyword set.
    pub fn parse(text: &str) -> Result<Self, ScheduleError> {
        let fields: Vec<&str> = text.split_whitespace().collect();

        if fields.len() == 5 {
            let fields: [String; 5] = [
                fields[0].to_string(),
                fields[1].to_string(),
                fields[2].to_string(),
                fields[3].to_string(),
                fields[4].to_string(),
            ];
            return Ok(Self {
                raw: text.to_string(),
                kind: ScheduleKind::Cron { fields },
            });
        }

        if fields.len() == 1 {
            let keyword: Shorthand = fields[0].parse()?;
            return Ok(Self {
                raw: text.to_string(),
                kind: ScheduleKind::Shorthand(keyword),
            });
        }

        Err(ScheduleError::Unrecognized(text.to_string()))
    }

    /// The schedule text exactly as it appeared in the crontab file
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The parsed shape
    pub fn kind(&self) -> &ScheduleKind {
        &self.kind
    }

    /// Canonical text used for identity hashing.
    ///
    /// Cron fields are rejoined with single spaces; shorthands collapse to
    /// their `@`-prefixed lowercase form, so `@DAILY` and `daily` produce
    /// the same task identity.
    pub fn normalized(&self) -> String {
        match &self.kind {
            ScheduleKind::Cron { fields } => fields.join(" "),
            ScheduleKind::Shorthand(keyword) => keyword.canonical().to_string(),
        }
    }

    /// True when the schedule is a cron expression rather than a shorthand
    pub fn is_cron(&self) -> bool {
        matches!(self.kind, ScheduleKind::Cron { .. })
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized())
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
