//! crates/termlog/src/logger.rs
//! Severity filtering in front of a [`Writer`].

use std::fmt;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use termlog_sink::{Record, Severity, Template, Writer};

use crate::config::Config;
use crate::layout::{Layout, Prefixes};

/// Exit status used by [`Logger::fatalf`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// Leveled logging facade over a [`Writer`].
///
/// A logger owns its [`Config`] and the prefix templates precomputed from it.
/// Each emit method compares the configured threshold against the message's
/// severity and, when the message passes, hands exactly one [`Record`] to the
/// writer. Suppressed messages cost one comparison and are never formatted.
///
/// Changing the level produces a new logger ([`with_level`](Self::with_level))
/// and leaves the receiver untouched, so a shared base logger can be reused
/// at different verbosities from several call sites.
///
/// # Examples
///
/// ```
/// use termlog::{Config, Logger, Severity};
/// use termlog_sink::CaptureWriter;
///
/// let capture = CaptureWriter::new();
/// let logger = Logger::new(&capture, Config::new(Severity::Warn));
///
/// logger.infof(format_args!("x {}", 1));
/// assert!(capture.is_empty());
///
/// logger.warnf(format_args!("y {}", 2));
/// let entries = capture.entries();
/// assert_eq!(entries.len(), 1);
/// assert!(entries[0].tag_line().starts_with("[warn]"));
/// assert_eq!(entries[0].message, "y 2");
/// ```
#[derive(Clone, Debug)]
pub struct Logger<W> {
    writer: W,
    config: Config,
    layout: Layout,
    prefixes: Arc<Prefixes>,
}

impl<W> Logger<W> {
    /// Builds a logger using [`Layout::Padded`].
    #[must_use]
    pub fn new(writer: W, config: Config) -> Self {
        Self::with_layout(writer, config, Layout::Padded)
    }

    /// Builds a logger with an explicit [`Layout`].
    #[must_use]
    pub fn with_layout(writer: W, config: Config, layout: Layout) -> Self {
        Self {
            writer,
            config,
            layout,
            prefixes: Arc::new(Prefixes::new(layout, config.colorful())),
        }
    }

    /// Returns a copy of this logger filtering at `level`.
    ///
    /// The receiver keeps its own threshold.
    #[must_use]
    pub fn with_level(&self, level: Severity) -> Self
    where
        W: Clone,
    {
        Self {
            writer: self.writer.clone(),
            config: self.config.with_level(level),
            layout: self.layout,
            prefixes: Arc::clone(&self.prefixes),
        }
    }

    /// The configuration the logger was built from.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The current threshold.
    #[must_use]
    pub const fn level(&self) -> Severity {
        self.config.level()
    }

    /// The layout the templates were built with.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Borrows the backing writer.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Template used for `severity`, if the layout defines one.
    #[must_use]
    pub fn template(&self, severity: Severity) -> Option<&Template> {
        self.prefixes.get(severity)
    }

    /// Reports whether a message at `severity` would reach the writer.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        self.config.level().allows(severity) && self.template(severity).is_some()
    }
}

impl<W> Logger<W>
where
    W: Writer,
{
    /// Emits `message` at `severity` when the threshold allows it.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: fmt::Arguments<'_>) {
        if !self.config.level().allows(severity) {
            return;
        }
        if let Some(template) = self.prefixes.get(severity) {
            self.writer
                .write_record(&Record::new(severity, template, message));
        }
    }

    /// Emits a debug message.
    #[track_caller]
    pub fn debugf(&self, message: fmt::Arguments<'_>) {
        self.log(Severity::Debug, message);
    }

    /// Emits an info message.
    #[track_caller]
    pub fn infof(&self, message: fmt::Arguments<'_>) {
        self.log(Severity::Info, message);
    }

    /// Emits a warning.
    #[track_caller]
    pub fn warnf(&self, message: fmt::Arguments<'_>) {
        self.log(Severity::Warn, message);
    }

    /// Emits an error.
    #[track_caller]
    pub fn errorf(&self, message: fmt::Arguments<'_>) {
        self.log(Severity::Error, message);
    }

    /// Emits an error, then terminates the process with [`FATAL_EXIT_CODE`].
    ///
    /// The process exits even when the threshold suppressed the message. No
    /// destructors run; use [`errorf`](Self::errorf) plus your own control
    /// flow when recovery or cleanup is needed.
    #[track_caller]
    pub fn fatalf(&self, message: fmt::Arguments<'_>) -> ! {
        self.errorf(message);
        process::exit(FATAL_EXIT_CODE)
    }

    /// Warns when `elapsed` exceeds the configured slow threshold.
    ///
    /// The message is prefixed with `SLOW >= <threshold>`. Nothing happens
    /// when no threshold is configured.
    #[track_caller]
    pub fn slowf(&self, elapsed: Duration, message: fmt::Arguments<'_>) {
        match self.config.slow_threshold() {
            Some(threshold) if elapsed > threshold => {
                self.log(
                    Severity::Warn,
                    format_args!("SLOW >= {threshold:?} {message}"),
                );
            }
            _ => {}
        }
    }
}
