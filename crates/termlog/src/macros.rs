//! crates/termlog/src/macros.rs
//! `format!`-style front ends for the emit methods.
//!
//! Every macro accepts either a bare format string, which targets the
//! installed default logger, or `logger => format string`, which targets an
//! explicit logger:
//!
//! ```
//! use termlog::{Config, Logger, Severity, warnf};
//! use termlog_sink::CaptureWriter;
//!
//! let capture = CaptureWriter::new();
//! let logger = Logger::new(&capture, Config::new(Severity::Info));
//! let free = 12;
//! warnf!(logger => "disk {}% free", free);
//! assert_eq!(capture.entries()[0].message, "disk 12% free");
//! ```

/// Emit a debug message.
///
/// # Example
/// ```ignore
/// debugf!("cache hit for {}", key);
/// debugf!(logger => "cache hit for {}", key);
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.debugf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debugf(::core::format_args!($($arg)+))
    };
}

/// Emit an info message.
///
/// # Example
/// ```ignore
/// infof!("listening on {}", addr);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr => $($arg:tt)+) => {
        $logger.infof(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::infof(::core::format_args!($($arg)+))
    };
}

/// Emit a warning.
///
/// # Example
/// ```ignore
/// warnf!("retrying {} in {:?}", host, delay);
/// ```
#[macro_export]
macro_rules! warnf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.warnf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warnf(::core::format_args!($($arg)+))
    };
}

/// Emit an error.
///
/// # Example
/// ```ignore
/// errorf!("cannot open {}: {}", path.display(), err);
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.errorf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::errorf(::core::format_args!($($arg)+))
    };
}

/// Emit an error and terminate the process.
///
/// # Example
/// ```ignore
/// fatalf!("configuration unreadable: {}", err);
/// ```
#[macro_export]
macro_rules! fatalf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.fatalf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::fatalf(::core::format_args!($($arg)+))
    };
}
