//! Integration tests for stream-backed output.
//!
//! These tests drive [`StreamWriter`] against real files and shared handles to
//! verify entry layout, ordering and the "errors are invisible" contract.

use std::fs::{self, File};
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;

use termlog_sink::{Record, Severity, StreamOptions, StreamWriter, Template, Writer};

fn plain(severity: Severity) -> Template {
    Template::new("", format!("\n[{}] ", severity.tag()))
}

// ============================================================================
// File Targets
// ============================================================================

/// Verifies entries land in a file in emission order.
#[test]
fn file_target_receives_entries_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app.log");
    let file = File::create(&path).expect("create log file");

    let stream = StreamWriter::with_options(file, StreamOptions::bare());
    for (index, severity) in [Severity::Error, Severity::Warn, Severity::Info]
        .into_iter()
        .enumerate()
    {
        let template = plain(severity);
        stream.write_record(&Record::new(severity, &template, format_args!("entry {index}")));
    }
    drop(stream);

    let contents = fs::read_to_string(&path).expect("read log file");
    assert_eq!(
        contents,
        "\n[error] entry 0\n\n[warn] entry 1\n\n[info] entry 2\n"
    );
}

/// Verifies default options stamp each entry with time and location.
#[test]
fn default_options_stamp_entries() {
    let stream = StreamWriter::new(Vec::new());
    let template = plain(Severity::Info);
    stream.write_record(&Record::new(Severity::Info, &template, format_args!("stamped")));

    let output = String::from_utf8(stream.into_inner()).expect("utf-8");
    let mut lines = output.lines();
    let stamp = lines.next().expect("stamp line");
    assert!(stamp.contains("stream_output.rs:"), "stamp {stamp:?}");
    assert_eq!(lines.next(), Some("[info] stamped"));
    assert!(lines.next().is_none());
}

// ============================================================================
// Failure Handling
// ============================================================================

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

/// Verifies a failing target never surfaces an error or panic.
#[test]
fn failing_target_is_silently_ignored() {
    let stream = StreamWriter::with_options(BrokenPipe, StreamOptions::bare());
    let template = plain(Severity::Error);
    stream.write_record(&Record::new(Severity::Error, &template, format_args!("lost")));
    stream.write_record(&Record::new(Severity::Error, &template, format_args!("lost again")));
}

// ============================================================================
// Shared Use
// ============================================================================

/// Verifies concurrent writers never interleave partial entries.
#[test]
fn concurrent_entries_stay_whole() {
    let stream = Arc::new(StreamWriter::with_options(Vec::new(), StreamOptions::bare()));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let stream = Arc::clone(&stream);
            thread::spawn(move || {
                let template = plain(Severity::Info);
                for n in 0..25 {
                    stream.write_record(&Record::new(
                        Severity::Info,
                        &template,
                        format_args!("worker {worker} line {n}"),
                    ));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker finished");
    }

    let stream = Arc::try_unwrap(stream).expect("sole owner");
    let output = String::from_utf8(stream.into_inner()).expect("utf-8");
    let entries: Vec<&str> = output.lines().filter(|line| !line.is_empty()).collect();
    assert_eq!(entries.len(), 100);
    assert!(entries.iter().all(|line| line.starts_with("[info] worker ")));
}
