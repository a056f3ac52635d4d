//! crates/termlog-sink/src/writer.rs
//! The output capability loggers forward records to.

use std::sync::Arc;

use crate::record::Record;

/// Sink that accepts a [`Record`] and produces no result.
///
/// Writers own every output concern: where the bytes go, what fills the
/// template's stamp placeholder and how failures are handled. Loggers only
/// decide *whether* a record reaches the writer, so any failure inside a
/// writer is invisible to logging call sites.
///
/// The trait is implemented for references, boxes and [`Arc`]s so a single
/// sink can back several loggers.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use termlog_sink::{Record, Writer};
///
/// #[derive(Default)]
/// struct Counter(Cell<usize>);
///
/// impl Writer for Counter {
///     fn write_record(&self, _record: &Record<'_>) {
///         self.0.set(self.0.get() + 1);
///     }
/// }
///
/// let counter = Counter::default();
/// let template = termlog_sink::Template::new("", "\n[info]  ");
/// counter.write_record(&Record::new(
///     termlog_sink::Severity::Info,
///     &template,
///     format_args!("ready"),
/// ));
/// assert_eq!(counter.0.get(), 1);
/// ```
pub trait Writer {
    /// Consumes one record.
    fn write_record(&self, record: &Record<'_>);
}

impl<W> Writer for &W
where
    W: Writer + ?Sized,
{
    fn write_record(&self, record: &Record<'_>) {
        (**self).write_record(record);
    }
}

impl<W> Writer for Box<W>
where
    W: Writer + ?Sized,
{
    fn write_record(&self, record: &Record<'_>) {
        (**self).write_record(record);
    }
}

impl<W> Writer for Arc<W>
where
    W: Writer + ?Sized,
{
    fn write_record(&self, record: &Record<'_>) {
        (**self).write_record(record);
    }
}

/// Writer that drops every record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Discard;

impl Writer for Discard {
    fn write_record(&self, _record: &Record<'_>) {}
}
