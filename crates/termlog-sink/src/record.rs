//! crates/termlog-sink/src/record.rs
//! A single log entry handed from a logger to a writer.

use std::fmt;
use std::panic::Location;

use crate::severity::Severity;
use crate::template::Template;

/// Borrowed view of one message that passed a logger's severity filter.
///
/// The record pairs the precomputed [`Template`] for the message's severity
/// with the caller's unformatted arguments. Nothing is formatted until a
/// writer renders it, so writers that drop records never pay for formatting.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    severity: Severity,
    template: &'a Template,
    message: fmt::Arguments<'a>,
    location: &'static Location<'static>,
}

impl<'a> Record<'a> {
    /// Creates a record attributed to the caller of this constructor.
    #[must_use]
    #[track_caller]
    pub fn new(severity: Severity, template: &'a Template, message: fmt::Arguments<'a>) -> Self {
        Self::with_location(severity, template, message, Location::caller())
    }

    /// Creates a record with an explicit source location.
    #[must_use]
    pub const fn with_location(
        severity: Severity,
        template: &'a Template,
        message: fmt::Arguments<'a>,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            severity,
            template,
            message,
            location,
        }
    }

    /// Severity the message was emitted at.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Prefix template selected for the severity.
    #[must_use]
    pub const fn template(&self) -> &'a Template {
        self.template
    }

    /// The caller's message arguments.
    #[must_use]
    pub const fn message(&self) -> fmt::Arguments<'a> {
        self.message
    }

    /// Source location of the logging call.
    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Formats only the caller's message.
    #[must_use]
    pub fn formatted_message(&self) -> String {
        fmt::format(self.message)
    }

    /// Writes the full entry: template around `stamp`, then the message.
    pub fn render<W>(&self, stamp: &str, out: &mut W) -> fmt::Result
    where
        W: fmt::Write + ?Sized,
    {
        self.template.render(stamp, out)?;
        out.write_fmt(self.message)
    }

    /// Renders the full entry into a new string.
    #[must_use]
    pub fn to_string_with_stamp(&self, stamp: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render(stamp, &mut out);
        out
    }
}
