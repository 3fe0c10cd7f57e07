// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wcron --command` - hidden execution mode used by registered tasks
//!
//! The Task Scheduler action re-invokes this binary with the user's
//! command, optionally base64-encoded to survive the quoting layers in
//! between. Exits with the child's exit code; never panics, because a
//! crash here would look like a task failure with no trace.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::path::Path;
use wcron_adapters::{LocalProcessAdapter, ProcessAdapter};
use wcron_core::split_line;

/// Run the encoded command line, returning the process exit code to report
pub async fn run(command: &str, log_file: Option<&Path>) -> i32 {
    let decoded = match decode(command) {
        Ok(decoded) => decoded,
        Err(message) => {
            tracing::error!(%message, "invalid command payload");
            return 1;
        }
    };

    let tokens = split_line(&decoded);
    let Some(program) = tokens.first() else {
        return 1;
    };
    let arguments = join_quoted(&tokens[1..]);

    let adapter = LocalProcessAdapter::new();
    let result = match log_file {
        Some(log_file) => adapter.run_logged(program, &arguments, log_file).await,
        None => adapter.run_hidden(program, &arguments).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "execution failed");
            1
        }
    }
}

fn decode(command: &str) -> Result<String, String> {
    let Some(encoded) = command.strip_prefix("base64:") else {
        return Ok(command.to_string());
    };
    let bytes = BASE64.decode(encoded).map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

/// Rejoin tokens, re-quoting any that contain whitespace so the argument
/// string splits back into the same tokens downstream.
fn join_quoted(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|token| {
            if token.contains(char::is_whitespace) {
                format!("\"{}\"", token)
            } else {
                token.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
