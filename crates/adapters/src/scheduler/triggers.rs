// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Translation from schedules to `schtasks.exe` trigger arguments
//!
//! The grammar accepts any five-field expression; this is where the backend
//! validates stricter. Expressions with no Task Scheduler equivalent are
//! rejected with `UnsupportedSchedule`, which surfaces per-entry at sync
//! time rather than aborting the whole crontab.

use super::SchedulerError;
use wcron_core::{Schedule, ScheduleKind, Shorthand};

const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Build the `/SC ...` trigger portion of a `schtasks /Create` invocation
pub fn trigger_args(schedule: &Schedule) -> Result<Vec<String>, SchedulerError> {
    match schedule.kind() {
        ScheduleKind::Shorthand(keyword) => Ok(shorthand_args(*keyword)),
        ScheduleKind::Cron { fields } => cron_args(schedule, fields),
    }
}

fn shorthand_args(keyword: Shorthand) -> Vec<String> {
    let args: &[&str] = match keyword {
        Shorthand::Hourly => &["/SC", "HOURLY"],
        Shorthand::Daily | Shorthand::Midnight => &["/SC", "DAILY", "/ST", "00:00"],
        Shorthand::Weekly => &["/SC", "WEEKLY", "/D", "SUN", "/ST", "00:00"],
        Shorthand::Monthly => &["/SC", "MONTHLY", "/D", "1", "/ST", "00:00"],
        Shorthand::Yearly | Shorthand::Annually => {
            &["/SC", "MONTHLY", "/M", "JAN", "/D", "1", "/ST", "00:00"]
        }
        Shorthand::Reboot => &["/SC", "ONSTART"],
        Shorthand::Logon => &["/SC", "ONLOGON"],
    };
    args.iter().map(|s| s.to_string()).collect()
}

fn cron_args(schedule: &Schedule, fields: &[String; 5]) -> Result<Vec<String>, SchedulerError> {
    let [minute, hour, dom, month, dow] = fields;
    let all = |s: &str| s == "*";

    // */N * * * *  ->  every N minutes
    if let Some(step) = minute.strip_prefix("*/") {
        if all(hour) && all(dom) && all(month) && all(dow) {
            let step: u32 = step
                .parse()
                .ok()
                .filter(|n| (1..=1439).contains(n))
                .ok_or_else(|| unsupported(schedule, "minute step out of range"))?;
            return Ok(args(&["/SC", "MINUTE", "/MO", &step.to_string()]));
        }
    }

    let m = parse_field(minute, 59);

    // M * * * *  ->  hourly at minute M
    if let (Some(m), true, true, true, true) = (m, all(hour), all(dom), all(month), all(dow)) {
        return Ok(args(&["/SC", "HOURLY", "/ST", &time(0, m)]));
    }

    let h = parse_field(hour, 23);
    let (Some(m), Some(h)) = (m, h) else {
        return Err(unsupported(
            schedule,
            "minute and hour must be plain numbers (or */N for minutes)",
        ));
    };
    let st = time(h, m);

    match (all(dom), all(month), all(dow)) {
        // M H * * *  ->  daily
        (true, true, true) => Ok(args(&["/SC", "DAILY", "/ST", &st])),

        // M H * * DOW  ->  weekly on the given days
        (true, true, false) => {
            let days = weekday_list(dow)
                .ok_or_else(|| unsupported(schedule, "invalid day-of-week field"))?;
            Ok(args(&["/SC", "WEEKLY", "/D", &days, "/ST", &st]))
        }

        // M H DOM * *  ->  monthly on the given days
        (false, true, true) => {
            let days = number_list(dom, 1, 31)
                .ok_or_else(|| unsupported(schedule, "invalid day-of-month field"))?;
            Ok(args(&["/SC", "MONTHLY", "/D", &days, "/ST", &st]))
        }

        // M H DOM MON *  ->  specific months
        (false, false, true) => {
            let days = number_list(dom, 1, 31)
                .ok_or_else(|| unsupported(schedule, "invalid day-of-month field"))?;
            let months = month_list(month)
                .ok_or_else(|| unsupported(schedule, "invalid month field"))?;
            Ok(args(&[
                "/SC", "MONTHLY", "/M", &months, "/D", &days, "/ST", &st,
            ]))
        }

        (false, _, false) => Err(unsupported(
            schedule,
            "day-of-month and day-of-week cannot be combined",
        )),

        _ => Err(unsupported(
            schedule,
            "expression does not map to a Task Scheduler trigger",
        )),
    }
}

fn unsupported(schedule: &Schedule, reason: &str) -> SchedulerError {
    SchedulerError::UnsupportedSchedule {
        schedule: schedule.normalized(),
        reason: reason.to_string(),
    }
}

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn time(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}

fn parse_field(field: &str, max: u32) -> Option<u32> {
    field.parse().ok().filter(|n| *n <= max)
}

/// Expand a cron number list/range into validated numbers
fn expand(field: &str, min: u32, max: u32) -> Option<Vec<u32>> {
    let mut values = Vec::new();
    for item in field.split(',') {
        match item.split_once('-') {
            Some((lo, hi)) => {
                let lo: u32 = lo.parse().ok()?;
                let hi: u32 = hi.parse().ok()?;
                if lo > hi || lo < min || hi > max {
                    return None;
                }
                values.extend(lo..=hi);
            }
            None => {
                let n: u32 = item.parse().ok()?;
                if n < min || n > max {
                    return None;
                }
                values.push(n);
            }
        }
    }
    if values.is_empty() {
        return None;
    }
    Some(values)
}

/// `1-5` -> `MON,TUE,WED,THU,FRI`; 0 and 7 both mean Sunday
fn weekday_list(field: &str) -> Option<String> {
    let days = expand(field, 0, 7)?;
    let names: Vec<&str> = days
        .iter()
        .map(|d| WEEKDAYS[(*d as usize) % 7])
        .collect();
    Some(names.join(","))
}

fn number_list(field: &str, min: u32, max: u32) -> Option<String> {
    let numbers = expand(field, min, max)?;
    let parts: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
    Some(parts.join(","))
}

/// `1,6` -> `JAN,JUN`
fn month_list(field: &str) -> Option<String> {
    let months = expand(field, 1, 12)?;
    let names: Vec<&str> = months.iter().map(|m| MONTHS[(*m - 1) as usize]).collect();
    Some(names.join(","))
}

#[cfg(test)]
#[path = "triggers_tests.rs"]
mod tests;
