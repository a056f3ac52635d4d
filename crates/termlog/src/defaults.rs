//! crates/termlog/src/defaults.rs
//! Ready-to-use loggers and the free functions bound to them.

use std::fmt;
use std::io;
use std::sync::{Arc, OnceLock};

use termlog_sink::{Discard, Severity, StreamWriter};

use crate::config::Config;
use crate::logger::Logger;

/// Logger writing to standard error.
pub type StderrLogger = Logger<Arc<StreamWriter<io::Stderr>>>;

/// Logger that drops everything.
pub type DiscardLogger = Logger<Discard>;

static INSTALLED: OnceLock<Defaults> = OnceLock::new();

/// The pair of loggers an application starts from.
///
/// `standard` writes to standard error at [`Severity::Debug`] with color,
/// `discard` drops all output. Build one in the application's composition
/// root and pass `&Logger` references to the components that log. For code
/// that prefers the free functions, [`Defaults::install`] registers an
/// instance for the rest of the process.
///
/// # Examples
///
/// ```
/// use termlog::{Defaults, Severity};
///
/// let defaults = Defaults::new();
/// assert_eq!(defaults.standard().level(), Severity::Debug);
/// assert!(defaults.standard().config().colorful());
///
/// let quiet = defaults.standard().with_level(Severity::Error);
/// assert_eq!(quiet.level(), Severity::Error);
/// ```
#[derive(Clone, Debug)]
pub struct Defaults {
    standard: StderrLogger,
    discard: DiscardLogger,
}

impl Defaults {
    /// Builds the standard colorful debug logger and its discarding sibling.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::new(Severity::Debug).with_colorful(true))
    }

    /// Builds the standard logger from `config`.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            standard: Logger::new(Arc::new(StreamWriter::stderr()), config),
            discard: Logger::new(Discard, Config::new(Severity::Silent)),
        }
    }

    /// The logger writing to standard error.
    #[must_use]
    pub const fn standard(&self) -> &StderrLogger {
        &self.standard
    }

    /// The logger that drops everything.
    #[must_use]
    pub const fn discard(&self) -> &DiscardLogger {
        &self.discard
    }

    /// Registers `self` as the instance behind the free functions.
    ///
    /// Only the first registration wins; a later call hands its argument back
    /// in `Err`. When nothing was installed before the first free-function
    /// call, [`Defaults::new`] is installed implicitly.
    pub fn install(self) -> Result<&'static Self, Self> {
        INSTALLED.set(self)?;
        Ok(defaults())
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide instance, installing [`Defaults::new`] on first use.
pub fn defaults() -> &'static Defaults {
    INSTALLED.get_or_init(Defaults::new)
}

/// Emits a debug message through the installed standard logger.
#[track_caller]
pub fn debugf(message: fmt::Arguments<'_>) {
    defaults().standard().debugf(message);
}

/// Emits an info message through the installed standard logger.
#[track_caller]
pub fn infof(message: fmt::Arguments<'_>) {
    defaults().standard().infof(message);
}

/// Emits a warning through the installed standard logger.
#[track_caller]
pub fn warnf(message: fmt::Arguments<'_>) {
    defaults().standard().warnf(message);
}

/// Emits an error through the installed standard logger.
#[track_caller]
pub fn errorf(message: fmt::Arguments<'_>) {
    defaults().standard().errorf(message);
}

/// Emits an error through the installed standard logger, then exits.
#[track_caller]
pub fn fatalf(message: fmt::Arguments<'_>) -> ! {
    defaults().standard().fatalf(message)
}
