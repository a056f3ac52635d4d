#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/termlog-sink/src/lib.rs
//!
//! # Overview
//!
//! `termlog-sink` holds the output side of the termlog facade: the ordered
//! [`Severity`] levels, the prefix [`Template`] precomputed per level, the
//! [`Record`] a logger hands over for each emitted message and the
//! [`Writer`] capability that consumes records.
//!
//! # Design
//!
//! Loggers decide *whether* a message is emitted; writers decide *how*. A
//! writer receives the template and the caller's unformatted
//! [`fmt::Arguments`](std::fmt::Arguments) and fills the template's stamp
//! placeholder itself. The crate ships four writers:
//!
//! - [`StreamWriter`] renders entries into any [`std::io::Write`] target,
//!   stamping them with the local time and caller location.
//! - [`Discard`] drops everything.
//! - [`CaptureWriter`] keeps owned copies of every record for inspection.
//! - `TracingWriter` (feature `tracing`) re-emits records as `tracing` events.
//!
//! # Invariants
//!
//! - Writers never report errors back to the caller.
//! - One emitted message is exactly one [`Writer::write_record`] call.
//!
//! # Examples
//!
//! ```
//! use termlog_sink::{Record, Severity, StreamOptions, StreamWriter, Template, Writer};
//!
//! let stream = StreamWriter::with_options(Vec::new(), StreamOptions::bare());
//! let template = Template::new("", "\n[error] ");
//! stream.write_record(&Record::new(Severity::Error, &template, format_args!("boom")));
//!
//! let output = String::from_utf8(stream.into_inner()).unwrap();
//! assert_eq!(output, "\n[error] boom\n");
//! ```

mod capture;
mod record;
mod severity;
mod stream;
mod template;
#[cfg(feature = "tracing")]
mod tracing_bridge;
mod writer;

pub use capture::{CaptureWriter, CapturedRecord};
pub use record::Record;
pub use severity::{ParseSeverityError, Severity};
pub use stream::{STAMP_FORMAT, StreamOptions, StreamWriter};
pub use template::{STAMP_PLACEHOLDER, Template};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{
    TRACING_TARGET, TracingWriter, init_tracing, level_to_severity, severity_to_level,
};
pub use writer::{Discard, Writer};
