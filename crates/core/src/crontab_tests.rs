// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::entry::Entry;
use tempfile::tempdir;

fn file_in(dir: &tempfile::TempDir) -> CrontabFile {
    CrontabFile::new(dir.path().join("crontab"))
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempdir().unwrap();
    let crontab = file_in(&dir);
    assert!(crontab.read_all().unwrap().is_empty());
    assert_eq!(crontab.content().unwrap(), "");
}

#[test]
fn comments_and_blank_lines_are_skipped_in_order() {
    let dir = tempdir().unwrap();
    let crontab = file_in(&dir);
    std::fs::write(
        crontab.path(),
        "# header comment\n\
         \n\
         @hourly first.bat\n\
         # interleaved comment\n\
         0 3 * * * second.bat --deep\n\
         \n",
    )
    .unwrap();

    let entries = crontab.read_all().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].command, "first.bat");
    assert_eq!(entries[1].command, "second.bat");
}

#[test]
fn comments_only_file_yields_zero_entries() {
    let dir = tempdir().unwrap();
    let crontab = file_in(&dir);
    std::fs::write(crontab.path(), "# just comments\n\n# and blanks\n\n").unwrap();
    assert!(crontab.read_all().unwrap().is_empty());
}

#[test]
fn malformed_lines_are_dropped_but_later_lines_still_parse() {
    let dir = tempdir().unwrap();
    let crontab = file_in(&dir);
    std::fs::write(
        crontab.path(),
        "0 3 * *\n\
         not-a-schedule\n\
         @daily good.bat\n",
    )
    .unwrap();

    let entries = crontab.read_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].command, "good.bat");
}

#[test]
fn write_then_read_round_trips_triples() {
    let dir = tempdir().unwrap();
    let crontab = file_in(&dir);

    let original = vec![
        Entry::parse("@hourly check.ps1").unwrap(),
        Entry::parse("0 3 * * * rclone sync C:\\data remote:backup").unwrap(),
        Entry::parse("*/15 9-17 * * 1-5 monitor.exe --quiet").unwrap(),
    ];
    crontab.write_all(&original).unwrap();

    let reread = crontab.read_all().unwrap();
    assert_eq!(reread.len(), original.len());
    for (a, b) in original.iter().zip(&reread) {
        assert_eq!(a.schedule.normalized(), b.schedule.normalized());
        assert_eq!(a.command, b.command);
        assert_eq!(a.arguments, b.arguments);
        assert_eq!(a.identity, b.identity);
    }
}

#[test]
fn round_trip_requotes_spaced_command() {
    let dir = tempdir().unwrap();
    let crontab = file_in(&dir);

    let original = Entry::parse("0 0 * * * \"C:\\Program Files\\app.exe\" --flag value").unwrap();
    crontab.write_all(std::slice::from_ref(&original)).unwrap();

    let reread = crontab.read_all().unwrap();
    assert_eq!(reread.len(), 1);
    assert_eq!(reread[0].command, "C:\\Program Files\\app.exe");
    assert_eq!(reread[0].arguments, "--flag value");
    assert_eq!(reread[0].identity, original.identity);
}

#[test]
fn round_trip_preserves_behavior_markers() {
    let dir = tempdir().unwrap();
    let crontab = file_in(&dir);

    let original = Entry::parse("@daily @log @pwd backup.bat").unwrap();
    crontab.write_all(std::slice::from_ref(&original)).unwrap();

    let reread = crontab.read_all().unwrap();
    assert_eq!(reread.len(), 1);
    assert!(reread[0].behaviors.logging);
    assert_eq!(reread[0].behaviors.auth, Some(crate::AuthMode::Password));
    assert_eq!(reread[0].identity, original.identity);
}

#[test]
fn write_empty_leaves_header_only_file() {
    let dir = tempdir().unwrap();
    let crontab = file_in(&dir);
    crontab.write_all(&[]).unwrap();

    assert!(crontab.path().exists());
    let content = crontab.content().unwrap();
    assert!(content.starts_with("# wcron crontab"));
    assert!(crontab.read_all().unwrap().is_empty());
}

#[test]
fn clear_removes_file_and_is_idempotent() {
    let dir = tempdir().unwrap();
    let crontab = file_in(&dir);
    crontab.write_all(&[]).unwrap();
    assert!(crontab.path().exists());

    crontab.clear().unwrap();
    assert!(!crontab.path().exists());

    // clearing again is not an error
    crontab.clear().unwrap();
}

#[test]
fn write_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let crontab = CrontabFile::new(dir.path().join("nested").join("deeper").join("crontab"));
    crontab.write_all(&[]).unwrap();
    assert!(crontab.path().exists());
}
