//! crates/termlog-sink/src/stream.rs
//! Writer that renders records into any [`io::Write`] target.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use time::{OffsetDateTime, UtcOffset};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::record::Record;
use crate::writer::Writer;

/// Wall-clock format substituted for the template stamp.
pub const STAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

/// Controls what a [`StreamWriter`] places around each rendered record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamOptions {
    /// Emit a blank line before every entry.
    pub leading_newline: bool,
    /// Include the local wall-clock time in the stamp.
    pub timestamps: bool,
    /// Include the caller's `file:line` in the stamp.
    pub locations: bool,
}

impl StreamOptions {
    /// Options with every decoration disabled, producing an empty stamp.
    #[must_use]
    pub const fn bare() -> Self {
        Self {
            leading_newline: false,
            timestamps: false,
            locations: false,
        }
    }

    /// Returns a copy with [`leading_newline`](Self::leading_newline) set.
    #[must_use]
    pub const fn with_leading_newline(mut self, enabled: bool) -> Self {
        self.leading_newline = enabled;
        self
    }

    /// Returns a copy with [`timestamps`](Self::timestamps) set.
    #[must_use]
    pub const fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Returns a copy with [`locations`](Self::locations) set.
    #[must_use]
    pub const fn with_locations(mut self, enabled: bool) -> Self {
        self.locations = enabled;
        self
    }
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            leading_newline: false,
            timestamps: true,
            locations: true,
        }
    }
}

/// Line-oriented writer over an [`io::Write`] implementor.
///
/// Each record becomes one entry: the template rendered around a stamp built
/// from the current time and the caller location, followed by the message and
/// a trailing newline. The target is guarded by a [`Mutex`] so entries from
/// concurrent callers never interleave.
///
/// The local UTC offset is captured once at construction, before the process
/// is likely to have spawned threads; stamps fall back to UTC when the offset
/// cannot be determined. [`with_utc_offset`](Self::with_utc_offset) pins an
/// explicit offset.
///
/// I/O errors are swallowed. Logging call sites have no way to react to a
/// broken terminal, and the facade promises that emitting never fails.
///
/// # Examples
///
/// ```
/// use termlog_sink::{Record, Severity, StreamOptions, StreamWriter, Template, Writer};
///
/// let stream = StreamWriter::with_options(Vec::new(), StreamOptions::bare());
/// let template = Template::new("", "\n[info]  ");
/// stream.write_record(&Record::new(Severity::Info, &template, format_args!("ready")));
///
/// assert_eq!(stream.into_inner(), b"\n[info]  ready\n".to_vec());
/// ```
#[derive(Debug)]
pub struct StreamWriter<W> {
    target: Mutex<W>,
    options: StreamOptions,
    offset: UtcOffset,
}

impl StreamWriter<io::Stderr> {
    /// Writer for standard error that separates entries with a blank line.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_options(
            io::stderr(),
            StreamOptions::default().with_leading_newline(true),
        )
    }
}

impl StreamWriter<io::Stdout> {
    /// Writer for standard output using default options.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> StreamWriter<W> {
    /// Wraps `target` using [`StreamOptions::default`].
    #[must_use]
    pub fn new(target: W) -> Self {
        Self::with_options(target, StreamOptions::default())
    }

    /// Wraps `target` with explicit options.
    #[must_use]
    pub fn with_options(target: W, options: StreamOptions) -> Self {
        Self {
            target: Mutex::new(target),
            options,
            offset: UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        }
    }

    /// Returns the writer with stamps rendered at `offset`.
    #[must_use]
    pub fn with_utc_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = offset;
        self
    }

    /// The offset applied to timestamps.
    #[must_use]
    pub const fn utc_offset(&self) -> UtcOffset {
        self.offset
    }

    /// Returns the options used for every entry.
    #[must_use]
    pub const fn options(&self) -> StreamOptions {
        self.options
    }

    /// Consumes the writer and returns the wrapped target.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.target
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn clock(&self, now: OffsetDateTime) -> Option<String> {
        now.to_offset(self.offset).format(STAMP_FORMAT).ok()
    }

    fn stamp(&self, record: &Record<'_>) -> String {
        let mut stamp = String::new();
        if self.options.timestamps {
            if let Some(clock) = self.clock(OffsetDateTime::now_utc()) {
                stamp.push_str(&clock);
            }
        }
        if self.options.locations {
            let location = record.location();
            if !stamp.is_empty() {
                stamp.push(' ');
            }
            stamp.push_str(location.file());
            stamp.push(':');
            stamp.push_str(&location.line().to_string());
        }
        stamp
    }

    /// Renders a record into the exact bytes this writer would emit.
    #[must_use]
    pub fn render(&self, record: &Record<'_>) -> String {
        let stamp = self.stamp(record);
        let mut entry = String::new();
        if self.options.leading_newline {
            entry.push('\n');
        }
        entry.push_str(&record.to_string_with_stamp(&stamp));
        entry.push('\n');
        entry
    }
}

impl<W> Writer for StreamWriter<W>
where
    W: Write,
{
    fn write_record(&self, record: &Record<'_>) {
        let entry = self.render(record);
        let mut target = self.target.lock().unwrap_or_else(PoisonError::into_inner);
        if target.write_all(entry.as_bytes()).is_ok() {
            let _ = target.flush();
        }
    }
}
