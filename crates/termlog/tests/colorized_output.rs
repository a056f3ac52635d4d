//! Integration tests for plain and colorized prefixes.
//!
//! Output is rendered through a bare stream writer so the stamp is empty and
//! the bytes are fully deterministic.

use termlog::palette::{BLUE_BOLD, CYAN, GREEN, MAGENTA, RED, RESET};
use termlog::{Config, Layout, Logger, Severity};
use termlog_sink::{CaptureWriter, StreamOptions, StreamWriter};

fn render_all(config: Config, layout: Layout) -> String {
    let stream = StreamWriter::with_options(Vec::new(), StreamOptions::bare());
    let logger = Logger::with_layout(&stream, config, layout);
    logger.debugf(format_args!("d"));
    logger.infof(format_args!("i"));
    logger.warnf(format_args!("w"));
    logger.errorf(format_args!("e"));
    String::from_utf8(stream.into_inner()).expect("utf-8")
}

// ============================================================================
// Plain Output
// ============================================================================

/// Verifies the exact plain layout for every severity.
#[test]
fn plain_padded_output() {
    let output = render_all(Config::new(Severity::Debug), Layout::Padded);
    assert_eq!(
        output,
        "\n[debug] d\n\n[info]  i\n\n[warn]  w\n\n[error] e\n"
    );
}

/// Verifies the compact layout drops debug and single-spaces tags.
#[test]
fn plain_compact_output() {
    let output = render_all(Config::new(Severity::Debug), Layout::Compact);
    assert_eq!(output, "\n[info] i\n\n[warn] w\n\n[error] e\n");
}

/// Verifies plain output never carries an escape character.
#[test]
fn plain_output_has_no_escapes() {
    for layout in [Layout::Padded, Layout::Compact] {
        let output = render_all(Config::new(Severity::Debug), layout);
        assert!(!output.contains('\x1b'), "{output:?}");
    }
}

// ============================================================================
// Colorized Output
// ============================================================================

/// Verifies each severity carries its fixed stamp and tag codes plus resets.
#[test]
fn colorized_entries_use_fixed_codes() {
    let output = render_all(
        Config::new(Severity::Debug).with_colorful(true),
        Layout::Padded,
    );

    let expected = [
        format!("{CYAN}\n{RESET}{GREEN}[debug] {RESET}d\n"),
        format!("{GREEN}\n{RESET}{GREEN}[info]  {RESET}i\n"),
        format!("{BLUE_BOLD}\n{RESET}{MAGENTA}[warn]  {RESET}w\n"),
        format!("{MAGENTA}\n{RESET}{RED}[error] {RESET}e\n"),
    ];
    assert_eq!(output, expected.concat());
}

/// Verifies the colorized debug scenario: green tag followed by a reset.
#[test]
fn colorized_debug_scenario() {
    let capture = CaptureWriter::new();
    let logger = Logger::new(&capture, Config::new(Severity::Debug).with_colorful(true));
    logger.debugf(format_args!("z"));

    let entries = capture.entries();
    assert_eq!(entries.len(), 1);
    let template = format!("{}{}", entries[0].head, entries[0].tail);
    assert!(template.contains(&format!("{GREEN}[debug] ")));
    assert!(template.ends_with(RESET));
    assert_eq!(entries[0].message, "z");
}

/// Verifies every colorized template both opens a color and resets it.
#[test]
fn colorized_templates_open_and_reset() {
    let logger = Logger::new(
        CaptureWriter::new(),
        Config::new(Severity::Debug).with_colorful(true),
    );
    for severity in [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ] {
        let template = logger.template(severity).expect("template");
        assert!(template.head().starts_with('\x1b'));
        assert_eq!(template.tail().matches(RESET).count(), 2);
        assert!(template.tag_line().contains(&format!("[{}]", severity.tag())));
    }
}
