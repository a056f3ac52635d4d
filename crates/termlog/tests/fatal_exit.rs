//! Integration tests for the terminating emit.
//!
//! `fatalf` exits the process, so each scenario re-runs this test binary as a
//! child restricted to [`fatal_child`] and inspects the child's exit status
//! and standard error.

use std::io;

use assert_cmd::Command;
use predicates::prelude::*;
use termlog::{Config, FATAL_EXIT_CODE, Logger, Severity};
use termlog_sink::{StreamOptions, StreamWriter};

const CHILD_LEVEL_VAR: &str = "TERMLOG_FATAL_CHILD_LEVEL";

/// Child entry point; a no-op unless launched by [`run_child`].
#[test]
fn fatal_child() {
    let Ok(level) = std::env::var(CHILD_LEVEL_VAR) else {
        return;
    };
    let level: Severity = level.parse().expect("child severity");
    let stream = StreamWriter::with_options(io::stderr(), StreamOptions::bare());
    let logger = Logger::new(stream, Config::new(level));
    logger.fatalf(format_args!("fatal at {level}"));
}

fn run_child(level: Severity) -> assert_cmd::assert::Assert {
    let exe = std::env::current_exe().expect("test binary path");
    Command::new(exe)
        .args(["fatal_child", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_LEVEL_VAR, level.to_string())
        .assert()
}

// ============================================================================
// Exit Status
// ============================================================================

/// Verifies fatal logs the error and exits with status 1.
#[test]
fn fatal_logs_then_exits_with_failure() {
    run_child(Severity::Error)
        .failure()
        .code(FATAL_EXIT_CODE)
        .stderr(predicate::str::contains("[error] fatal at error"));
}

/// Verifies fatal exits even when the threshold suppresses the message.
#[test]
fn fatal_exits_when_message_suppressed() {
    run_child(Severity::Silent)
        .failure()
        .code(FATAL_EXIT_CODE)
        .stderr(predicate::str::contains("fatal at").not());
}

/// Verifies the exit status does not depend on the threshold.
#[test]
fn fatal_exit_status_is_level_independent() {
    for level in [Severity::Warn, Severity::Debug] {
        run_child(level).failure().code(FATAL_EXIT_CODE);
    }
}
