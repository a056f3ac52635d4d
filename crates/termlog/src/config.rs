//! crates/termlog/src/config.rs
//! Logger configuration and environment overrides.

use std::num::ParseIntError;
use std::time::Duration;

use termlog_sink::{ParseSeverityError, Severity};
use thiserror::Error;

use crate::palette::{ColorChoice, ParseColorChoiceError};

/// Variable naming the threshold, e.g. `TERMLOG_LEVEL=debug`.
pub const LEVEL_VAR: &str = "TERMLOG_LEVEL";
/// Variable selecting colorization: `always`, `never` or `auto`.
pub const COLOR_VAR: &str = "TERMLOG_COLOR";
/// Slow-operation threshold in milliseconds.
pub const SLOW_VAR: &str = "TERMLOG_SLOW_MS";
/// Any non-empty value disables color regardless of [`COLOR_VAR`].
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Settings a [`Logger`](crate::Logger) is built from.
///
/// A configuration is immutable once built: the `with_*` methods consume the
/// value and return an updated copy.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use termlog::{Config, Severity};
///
/// let config = Config::new(Severity::Warn)
///     .with_colorful(true)
///     .with_slow_threshold(Duration::from_millis(200));
///
/// assert_eq!(config.level(), Severity::Warn);
/// assert!(config.colorful());
/// assert_eq!(config.slow_threshold(), Some(Duration::from_millis(200)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    colorful: bool,
    level: Severity,
    slow_threshold: Option<Duration>,
}

impl Config {
    /// Plain output at `level` with no slow threshold.
    #[must_use]
    pub const fn new(level: Severity) -> Self {
        Self {
            colorful: false,
            level,
            slow_threshold: None,
        }
    }

    /// Returns a copy with colorization set.
    #[must_use]
    pub const fn with_colorful(mut self, colorful: bool) -> Self {
        self.colorful = colorful;
        self
    }

    /// Returns a copy with the threshold set.
    #[must_use]
    pub const fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Returns a copy with a slow-operation threshold.
    ///
    /// A zero duration clears the threshold.
    #[must_use]
    pub const fn with_slow_threshold(mut self, threshold: Duration) -> Self {
        self.slow_threshold = if threshold.is_zero() {
            None
        } else {
            Some(threshold)
        };
        self
    }

    /// Whether templates carry ANSI escape codes.
    #[must_use]
    pub const fn colorful(&self) -> bool {
        self.colorful
    }

    /// The severity threshold.
    #[must_use]
    pub const fn level(&self) -> Severity {
        self.level
    }

    /// Duration above which [`Logger::slowf`](crate::Logger::slowf) reports.
    #[must_use]
    pub const fn slow_threshold(&self) -> Option<Duration> {
        self.slow_threshold
    }

    /// Builds a configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from [`Config::default`] and `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().overlay(lookup, || ColorChoice::Auto.resolve())
    }

    /// Applies variables returned by `lookup` on top of `self`.
    ///
    /// Unset variables leave the corresponding setting untouched. An `auto`
    /// color choice is settled by `resolve_auto`, which production callers
    /// back with a terminal check on standard error. `always` and `never`
    /// never consult it.
    pub fn overlay<F, R>(mut self, lookup: F, resolve_auto: R) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
        R: FnOnce() -> bool,
    {
        if let Some(value) = lookup(LEVEL_VAR) {
            self.level = value.parse().map_err(|source| ConfigError::Level {
                var: LEVEL_VAR,
                source,
            })?;
        }

        let no_color = lookup(NO_COLOR_VAR).is_some_and(|value| !value.is_empty());
        if no_color {
            self.colorful = false;
        } else if let Some(value) = lookup(COLOR_VAR) {
            let choice: ColorChoice = value.parse().map_err(|source| ConfigError::Color {
                var: COLOR_VAR,
                source,
            })?;
            self.colorful = choice.resolve_with(resolve_auto);
        }

        if let Some(value) = lookup(SLOW_VAR) {
            let millis: u64 = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::SlowThreshold {
                    var: SLOW_VAR,
                    source,
                })?;
            self = self.with_slow_threshold(Duration::from_millis(millis));
        }

        Ok(self)
    }
}

/// Errors produced while reading configuration from the environment.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The threshold variable did not name a severity.
    #[error("invalid {var}: {source}")]
    Level {
        /// Variable that held the bad value.
        var: &'static str,
        /// Underlying parse failure.
        #[source]
        source: ParseSeverityError,
    },
    /// The color variable did not name a color choice.
    #[error("invalid {var}: {source}")]
    Color {
        /// Variable that held the bad value.
        var: &'static str,
        /// Underlying parse failure.
        #[source]
        source: ParseColorChoiceError,
    },
    /// The slow threshold was not a whole number of milliseconds.
    #[error("invalid {var}: {source}")]
    SlowThreshold {
        /// Variable that held the bad value.
        var: &'static str,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
}
