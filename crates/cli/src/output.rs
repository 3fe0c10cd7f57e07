// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console rendering

use wcron_adapters::TaskInfo;

/// Render managed tasks as a fixed-width table
pub fn render_tasks(tasks: &[TaskInfo]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<40} {:<10} NEXT RUN\n", "NAME", "STATE"));
    for task in tasks {
        let next_run = task
            .next_run
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<40} {:<10} {}\n",
            truncate(&task.name, 40),
            truncate(&task.state, 10),
            next_run
        ));
    }
    out
}

fn truncate(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Help screen shown when no mode flag is given
pub fn print_usage() {
    println!("Usage: wcron [-l | -e | -r]");
    println!();
    println!("Options:");
    println!("  -l, --list     List all cron jobs");
    println!("  -e, --edit     Edit crontab file");
    println!("  -r, --remove   Remove all cron jobs");
    println!();
    println!("Crontab format:");
    println!();
    println!("  * * * * * command [arguments...]");
    println!("  | | | | |");
    println!("  | | | | +- day of week (0-7, 0 and 7 = Sunday)");
    println!("  | | | +--- month (1-12)");
    println!("  | | +----- day of month (1-31)");
    println!("  | +------- hour (0-23)");
    println!("  +--------- minute (0-59)");
    println!();
    println!("  Shorthands: @hourly @daily @midnight @weekly @monthly");
    println!("              @yearly @annually @reboot @logon");
    println!();
    println!("Keywords (before the command):");
    println!("  @log     Capture command output to ~/.wcron/logs");
    println!("  @pwd     Run with the stored password (works when logged off)");
    println!("  @s4u     Run whether logged on or not, without a stored password");
    println!();
    println!("Examples:");
    println!("  0 3 * * * C:\\scripts\\backup.bat");
    println!("  */15 * * * * powershell.exe -File C:\\scripts\\check.ps1");
    println!("  0 9 * * 1 @log C:\\scripts\\weekly-report.bat");
    println!("  @daily @log rclone sync C:\\data remote:backup");
    println!();
    println!("Run 'wcron -e' to edit your scheduled jobs");
}
