//! crates/termlog-sink/src/severity.rs
//! Ordered verbosity levels shared by loggers and writers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Ordered verbosity level governing whether a message is emitted.
///
/// Ranks grow with verbosity: a logger configured at [`Severity::Info`]
/// emits error, warning and info messages but drops debug messages.
/// [`Severity::Silent`] is only meaningful as a threshold; no message is ever
/// emitted at that severity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Severity {
    /// Suppresses every message.
    Silent = 1,
    /// Unrecoverable or user-visible failures.
    Error = 2,
    /// Recoverable problems worth surfacing.
    Warn = 3,
    /// Progress and state changes.
    #[default]
    Info = 4,
    /// Diagnostic detail.
    Debug = 5,
}

impl Severity {
    /// Every severity in ascending rank order.
    pub const ALL: [Self; 5] = [
        Self::Silent,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
    ];

    /// Returns the numeric rank of the severity.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Converts a numeric rank back into a severity.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::Silent),
            2 => Some(Self::Error),
            3 => Some(Self::Warn),
            4 => Some(Self::Info),
            5 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Reports whether a threshold of `self` lets a `message` severity through.
    ///
    /// A `Silent` message never passes, even against a `Debug` threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use termlog_sink::Severity;
    ///
    /// assert!(Severity::Warn.allows(Severity::Error));
    /// assert!(Severity::Warn.allows(Severity::Warn));
    /// assert!(!Severity::Warn.allows(Severity::Info));
    /// ```
    #[must_use]
    pub const fn allows(self, message: Self) -> bool {
        !matches!(message, Self::Silent) && self.rank() >= message.rank()
    }

    /// Returns the lowercase name used inside level tags.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Silent => "silent",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a string does not name a [`Severity`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown severity `{input}` (expected silent, error, warn, info, debug or 1-5)")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.to_ascii_lowercase().as_str() {
            "silent" | "none" | "off" => Some(Self::Silent),
            "error" | "err" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            other => other.parse::<u8>().ok().and_then(Self::from_rank),
        };

        parsed.ok_or_else(|| ParseSeverityError {
            input: trimmed.to_owned(),
        })
    }
}
