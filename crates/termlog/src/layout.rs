//! crates/termlog/src/layout.rs
//! Prefix layouts and the per-severity templates they produce.

use termlog_sink::{Severity, Template};

use crate::palette::{BLUE_BOLD, CYAN, GREEN, MAGENTA, RED, RESET, paint};

/// Width every padded tag is filled to, including the trailing space.
const PADDED_TAG_WIDTH: usize = 8;

/// Which severities get a template and how their tags are spaced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Layout {
    /// Debug, info, warn and error, with tags padded to a common width
    /// (`"[info]  "`, `"[error] "`).
    #[default]
    Padded,
    /// Info, warn and error only, each tag followed by one space
    /// (`"[info] "`). Debug messages are never emitted.
    Compact,
}

impl Layout {
    /// Reports whether the layout defines a template for `severity`.
    #[must_use]
    pub const fn supports(self, severity: Severity) -> bool {
        match severity {
            Severity::Silent => false,
            Severity::Debug => matches!(self, Self::Padded),
            Severity::Error | Severity::Warn | Severity::Info => true,
        }
    }

    /// Returns the uncolored tag for `severity`, or `None` when unsupported.
    #[must_use]
    pub fn tag(self, severity: Severity) -> Option<String> {
        if !self.supports(severity) {
            return None;
        }
        let bracketed = format!("[{}]", severity.tag());
        Some(match self {
            Self::Padded => format!("{bracketed:<width$}", width = PADDED_TAG_WIDTH),
            Self::Compact => format!("{bracketed} "),
        })
    }
}

/// Colors used for the stamp and tag segments of a colorized template.
const fn colors(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Debug => (CYAN, GREEN),
        Severity::Info => (GREEN, GREEN),
        Severity::Warn => (BLUE_BOLD, MAGENTA),
        Severity::Error | Severity::Silent => (MAGENTA, RED),
    }
}

fn template(layout: Layout, severity: Severity, colorful: bool) -> Option<Template> {
    let tag = layout.tag(severity)?;
    Some(if colorful {
        let (stamp_color, tag_color) = colors(severity);
        Template::new(stamp_color, format!("\n{RESET}{}", paint(tag_color, &tag)))
    } else {
        Template::new("", format!("\n{tag}"))
    })
}

/// Templates precomputed once per logger, one per supported severity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefixes {
    debug: Option<Template>,
    info: Option<Template>,
    warn: Option<Template>,
    error: Option<Template>,
}

impl Prefixes {
    /// Builds every template `layout` supports, colorized or plain.
    #[must_use]
    pub fn new(layout: Layout, colorful: bool) -> Self {
        Self {
            debug: template(layout, Severity::Debug, colorful),
            info: template(layout, Severity::Info, colorful),
            warn: template(layout, Severity::Warn, colorful),
            error: template(layout, Severity::Error, colorful),
        }
    }

    /// Template for `severity`, if the layout defines one.
    #[must_use]
    pub fn get(&self, severity: Severity) -> Option<&Template> {
        match severity {
            Severity::Silent => None,
            Severity::Error => self.error.as_ref(),
            Severity::Warn => self.warn.as_ref(),
            Severity::Info => self.info.as_ref(),
            Severity::Debug => self.debug.as_ref(),
        }
    }
}
