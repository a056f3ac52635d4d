//! crates/termlog-sink/src/capture.rs
//! In-memory writer that keeps every record it receives.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::record::Record;
use crate::severity::Severity;
use crate::writer::Writer;

/// Owned copy of a [`Record`] kept by a [`CaptureWriter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedRecord {
    /// Severity the record was emitted at.
    pub severity: Severity,
    /// Template text before the stamp.
    pub head: String,
    /// Template text after the stamp, ending with the level tag.
    pub tail: String,
    /// The caller's formatted message.
    pub message: String,
    /// `file:line` of the logging call.
    pub location: String,
}

impl CapturedRecord {
    /// Rebuilds the full entry around `stamp`.
    #[must_use]
    pub fn render(&self, stamp: &str) -> String {
        format!("{}{stamp}{}{}", self.head, self.tail, self.message)
    }

    /// Tail without its leading line break.
    #[must_use]
    pub fn tag_line(&self) -> &str {
        self.tail.strip_prefix('\n').unwrap_or(&self.tail)
    }
}

/// Writer that records every call for later inspection.
///
/// Useful as a test spy: each call to [`Writer::write_record`] appends one
/// [`CapturedRecord`], so the number of entries equals the number of writer
/// invocations.
///
/// # Examples
///
/// ```
/// use termlog_sink::{CaptureWriter, Record, Severity, Template, Writer};
///
/// let capture = CaptureWriter::new();
/// let template = Template::new("", "\n[warn]  ");
/// capture.write_record(&Record::new(Severity::Warn, &template, format_args!("disk low")));
///
/// let entries = capture.entries();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].tag_line(), "[warn]  ");
/// assert_eq!(entries[0].message, "disk low");
/// ```
#[derive(Debug, Default)]
pub struct CaptureWriter {
    entries: Mutex<Vec<CapturedRecord>>,
}

impl CaptureWriter {
    /// Creates an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedRecord>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of every captured record in arrival order.
    #[must_use]
    pub fn entries(&self) -> Vec<CapturedRecord> {
        self.lock().clone()
    }

    /// Removes and returns every captured record.
    pub fn take(&self) -> Vec<CapturedRecord> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of writer invocations seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Writer for CaptureWriter {
    fn write_record(&self, record: &Record<'_>) {
        let template = record.template();
        let location = record.location();
        let captured = CapturedRecord {
            severity: record.severity(),
            head: template.head().to_owned(),
            tail: template.tail().to_owned(),
            message: record.formatted_message(),
            location: format!("{}:{}", location.file(), location.line()),
        };
        self.lock().push(captured);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Template;

    #[test]
    fn take_drains_entries() {
        let capture = CaptureWriter::new();
        let template = Template::new("", "\n[error] ");
        capture.write_record(&Record::new(Severity::Error, &template, format_args!("a")));
        capture.write_record(&Record::new(Severity::Error, &template, format_args!("b")));

        let drained = capture.take();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[1].message, "b");
        assert!(capture.is_empty());
    }

    #[test]
    fn captured_record_renders_like_record() {
        let capture = CaptureWriter::new();
        let template = Template::new("", "\n[info]  ");
        let count = 3;
        capture.write_record(&Record::new(
            Severity::Info,
            &template,
            format_args!("{count} files"),
        ));

        let entry = &capture.entries()[0];
        assert_eq!(entry.render("STAMP"), "STAMP\n[info]  3 files");
        assert!(entry.location.contains("capture.rs:"));
    }
}
