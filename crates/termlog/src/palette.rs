//! crates/termlog/src/palette.rs
//! ANSI color codes and terminal color selection.

use std::fmt;
use std::io;
use std::str::FromStr;

use is_terminal::IsTerminal;
use thiserror::Error;

/// Resets every attribute.
pub const RESET: &str = "\x1b[0m";
/// Red foreground.
pub const RED: &str = "\x1b[31m";
/// Green foreground.
pub const GREEN: &str = "\x1b[32m";
/// Yellow foreground.
pub const YELLOW: &str = "\x1b[33m";
/// Blue foreground.
pub const BLUE: &str = "\x1b[34m";
/// Magenta foreground.
pub const MAGENTA: &str = "\x1b[35m";
/// Cyan foreground.
pub const CYAN: &str = "\x1b[36m";
/// White foreground.
pub const WHITE: &str = "\x1b[37m";
/// Bold blue foreground.
pub const BLUE_BOLD: &str = "\x1b[34;1m";
/// Bold magenta foreground.
pub const MAGENTA_BOLD: &str = "\x1b[35;1m";
/// Bold red foreground.
pub const RED_BOLD: &str = "\x1b[31;1m";
/// Bold yellow foreground.
pub const YELLOW_BOLD: &str = "\x1b[33;1m";

/// Wraps `text` in `color` and a trailing [`RESET`].
#[must_use]
pub fn paint(color: &str, text: &str) -> String {
    format!("{color}{text}{RESET}")
}

/// When to colorize output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorChoice {
    /// Always emit escape codes.
    Always,
    /// Never emit escape codes.
    Never,
    /// Emit escape codes only when standard error is a terminal.
    #[default]
    Auto,
}

impl ColorChoice {
    /// Resolves the choice against standard error.
    #[must_use]
    pub fn resolve(self) -> bool {
        self.resolve_with(|| io::stderr().is_terminal())
    }

    /// Resolves the choice, consulting `is_terminal` only for [`ColorChoice::Auto`].
    #[must_use]
    pub fn resolve_with<F>(self, is_terminal: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal(),
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::Auto => "auto",
        })
    }
}

/// Error returned when a string does not name a [`ColorChoice`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown color choice `{input}` (expected always, never or auto)")]
pub struct ParseColorChoiceError {
    input: String,
}

impl FromStr for ColorChoice {
    type Err = ParseColorChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "always" | "on" | "true" | "yes" => Ok(Self::Always),
            "never" | "off" | "false" | "no" => Ok(Self::Never),
            "" | "auto" => Ok(Self::Auto),
            _ => Err(ParseColorChoiceError {
                input: trimmed.to_owned(),
            }),
        }
    }
}
