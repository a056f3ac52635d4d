//! crates/termlog-sink/src/tracing_bridge.rs
//! Bridge from termlog records to the tracing ecosystem.
//!
//! [`TracingWriter`] turns every record into a `tracing` event so a facade
//! logger can feed an application that already installed a subscriber. The
//! severity maps onto the matching `tracing` level and the event carries the
//! level tag and caller location as fields.
//!
//! # Usage
//!
//! ```rust,ignore
//! use termlog::{Config, Logger, Severity};
//! use termlog_sink::{TracingWriter, init_tracing};
//!
//! init_tracing(Severity::Info);
//! let logger = Logger::new(TracingWriter, Config::new(Severity::Info));
//! logger.infof(format_args!("forwarded to tracing"));
//! ```

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::record::Record;
use crate::severity::Severity;
use crate::writer::Writer;

/// Target attached to every forwarded event.
pub const TRACING_TARGET: &str = "termlog";

/// Map a severity onto a tracing level. `Silent` has no counterpart.
#[must_use]
pub const fn severity_to_level(severity: Severity) -> Option<Level> {
    match severity {
        Severity::Silent => None,
        Severity::Error => Some(Level::ERROR),
        Severity::Warn => Some(Level::WARN),
        Severity::Info => Some(Level::INFO),
        Severity::Debug => Some(Level::DEBUG),
    }
}

/// Map a tracing level onto the closest severity. `TRACE` folds into `Debug`.
#[must_use]
pub const fn level_to_severity(level: &Level) -> Severity {
    match *level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warn,
        Level::INFO => Severity::Info,
        Level::DEBUG | Level::TRACE => Severity::Debug,
    }
}

/// Writer that re-emits records as `tracing` events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TracingWriter;

impl Writer for TracingWriter {
    fn write_record(&self, record: &Record<'_>) {
        let tag = record.severity().tag();
        let location = record.location();
        let message = record.message();

        match record.severity() {
            Severity::Silent => {}
            Severity::Error => tracing::error!(
                target: TRACING_TARGET,
                tag,
                location = %location,
                "{message}"
            ),
            Severity::Warn => tracing::warn!(
                target: TRACING_TARGET,
                tag,
                location = %location,
                "{message}"
            ),
            Severity::Info => tracing::info!(
                target: TRACING_TARGET,
                tag,
                location = %location,
                "{message}"
            ),
            Severity::Debug => tracing::debug!(
                target: TRACING_TARGET,
                tag,
                location = %location,
                "{message}"
            ),
        }
    }
}

/// Install a compact `fmt` subscriber filtered at `threshold`.
///
/// `RUST_LOG` still overrides the threshold when set. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing(threshold: Severity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(threshold)));

    let _ = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .try_init();
}

/// `EnvFilter` directive equivalent to `threshold`; `Silent` turns output off.
fn filter_directive(threshold: Severity) -> String {
    match severity_to_level(threshold) {
        Some(level) => level.as_str().to_ascii_lowercase(),
        None => "off".to_owned(),
    }
}
