#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/termlog/src/lib.rs
//!
//! # Overview
//!
//! `termlog` is a leveled logging facade. Code emits debug, info, warning,
//! error and fatal messages through a [`Logger`] without knowing where the
//! output goes; the logger filters by [`Severity`], prepends a plain or
//! ANSI-colored prefix and forwards the result to a
//! [`Writer`](termlog_sink::Writer).
//!
//! # Design
//!
//! - [`Config`] holds the threshold, the color switch and an optional slow
//!   threshold. It is immutable once built.
//! - [`Layout`] selects which severities get a prefix and how tags are spaced.
//!   The prefixes are precomputed once per logger.
//! - [`Logger::with_level`] returns a copy at a new threshold, leaving the
//!   original untouched.
//! - [`Defaults`] is the composition root for the standard stderr logger and
//!   its discarding sibling. The free functions ([`infof`], [`warnf`], ...)
//!   and the matching macros delegate to the installed instance.
//!
//! # Output
//!
//! A plain info entry renders as `"<stamp>\n[info]  <message>"`. Colorized
//! templates wrap the stamp and the tag in fixed per-severity codes from
//! [`palette`], each followed by a reset.
//!
//! # Errors
//!
//! Emitting never fails; writer failures stay inside the writer. Only
//! configuration parsing reports errors ([`ConfigError`]).
//! [`Logger::fatalf`] terminates the process with [`FATAL_EXIT_CODE`].
//!
//! # Examples
//!
//! ```
//! use termlog::{Config, Logger, Severity, infof};
//! use termlog_sink::{StreamOptions, StreamWriter};
//!
//! let stream = StreamWriter::with_options(Vec::new(), StreamOptions::bare());
//! let logger = Logger::new(&stream, Config::new(Severity::Info));
//!
//! infof!(logger => "{} files copied", 3);
//! logger.debugf(format_args!("suppressed"));
//!
//! let output = String::from_utf8(stream.into_inner()).unwrap();
//! assert_eq!(output, "\n[info]  3 files copied\n");
//! ```

mod config;
mod defaults;
mod layout;
mod logger;
mod macros;
pub mod palette;

pub use config::{COLOR_VAR, Config, ConfigError, LEVEL_VAR, NO_COLOR_VAR, SLOW_VAR};
pub use defaults::{
    Defaults, DiscardLogger, StderrLogger, debugf, defaults, errorf, fatalf, infof, warnf,
};
pub use layout::{Layout, Prefixes};
pub use logger::{FATAL_EXIT_CODE, Logger};
pub use palette::{ColorChoice, ParseColorChoiceError};
pub use termlog_sink::{ParseSeverityError, Severity};
