// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use wcron_core::Schedule;

fn translate(text: &str) -> Vec<String> {
    trigger_args(&Schedule::parse(text).unwrap()).unwrap()
}

fn translate_err(text: &str) -> SchedulerError {
    trigger_args(&Schedule::parse(text).unwrap()).unwrap_err()
}

#[test]
fn shorthands_map_to_native_schedules() {
    assert_eq!(translate("@hourly"), ["/SC", "HOURLY"]);
    assert_eq!(translate("@daily"), ["/SC", "DAILY", "/ST", "00:00"]);
    assert_eq!(translate("@midnight"), ["/SC", "DAILY", "/ST", "00:00"]);
    assert_eq!(
        translate("@weekly"),
        ["/SC", "WEEKLY", "/D", "SUN", "/ST", "00:00"]
    );
    assert_eq!(
        translate("@monthly"),
        ["/SC", "MONTHLY", "/D", "1", "/ST", "00:00"]
    );
    assert_eq!(
        translate("@yearly"),
        ["/SC", "MONTHLY", "/M", "JAN", "/D", "1", "/ST", "00:00"]
    );
    assert_eq!(translate("@annually"), translate("@yearly"));
    assert_eq!(translate("@reboot"), ["/SC", "ONSTART"]);
    assert_eq!(translate("@logon"), ["/SC", "ONLOGON"]);
}

#[test]
fn minute_steps_map_to_minute_schedule() {
    assert_eq!(translate("*/15 * * * *"), ["/SC", "MINUTE", "/MO", "15"]);
    assert_eq!(translate("*/1 * * * *"), ["/SC", "MINUTE", "/MO", "1"]);
}

#[test]
fn fixed_minute_maps_to_hourly() {
    assert_eq!(translate("30 * * * *"), ["/SC", "HOURLY", "/ST", "00:30"]);
}

#[test]
fn fixed_minute_and_hour_map_to_daily() {
    assert_eq!(translate("0 3 * * *"), ["/SC", "DAILY", "/ST", "03:00"]);
    assert_eq!(translate("45 23 * * *"), ["/SC", "DAILY", "/ST", "23:45"]);
}

#[test]
fn day_of_week_maps_to_weekly() {
    assert_eq!(
        translate("0 9 * * 1"),
        ["/SC", "WEEKLY", "/D", "MON", "/ST", "09:00"]
    );
    assert_eq!(
        translate("0 9 * * 1-5"),
        ["/SC", "WEEKLY", "/D", "MON,TUE,WED,THU,FRI", "/ST", "09:00"]
    );
    assert_eq!(
        translate("0 9 * * 1,3,5"),
        ["/SC", "WEEKLY", "/D", "MON,WED,FRI", "/ST", "09:00"]
    );
}

#[test]
fn sunday_is_both_zero_and_seven() {
    assert_eq!(
        translate("0 8 * * 0"),
        ["/SC", "WEEKLY", "/D", "SUN", "/ST", "08:00"]
    );
    assert_eq!(translate("0 8 * * 7"), translate("0 8 * * 0"));
}

#[test]
fn day_of_month_maps_to_monthly() {
    assert_eq!(
        translate("0 2 1 * *"),
        ["/SC", "MONTHLY", "/D", "1", "/ST", "02:00"]
    );
    assert_eq!(
        translate("30 2 1,15 * *"),
        ["/SC", "MONTHLY", "/D", "1,15", "/ST", "02:30"]
    );
}

#[test]
fn month_field_restricts_months() {
    assert_eq!(
        translate("0 6 1 1 *"),
        ["/SC", "MONTHLY", "/M", "JAN", "/D", "1", "/ST", "06:00"]
    );
    assert_eq!(
        translate("0 6 15 1,6 *"),
        ["/SC", "MONTHLY", "/M", "JAN,JUN", "/D", "15", "/ST", "06:00"]
    );
}

#[test]
fn dom_and_dow_combination_is_unsupported() {
    let err = translate_err("0 9 1 * 1");
    assert!(matches!(err, SchedulerError::UnsupportedSchedule { .. }));
    assert!(err.to_string().contains("cannot be combined"));
}

#[test]
fn exotic_fields_are_unsupported_not_panics() {
    for text in [
        "0 */2 * * *",  // hour steps
        "1-5 3 * * *",  // minute ranges
        "60 3 * * *",   // minute out of range
        "0 24 * * *",   // hour out of range
        "0 9 * * 8",    // day-of-week out of range
        "0 9 32 * *",   // day-of-month out of range
        "0 9 1 13 *",   // month out of range
        "*/0 * * * *",  // zero step
    ] {
        let err = translate_err(text);
        assert!(
            matches!(err, SchedulerError::UnsupportedSchedule { .. }),
            "expected unsupported for {text}, got {err:?}"
        );
    }
}

#[test]
fn unsupported_error_names_the_schedule() {
    let err = translate_err("0 */2 * * *");
    assert!(err.to_string().contains("0 */2 * * *"));
}
