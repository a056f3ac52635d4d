//! crates/termlog-sink/src/template.rs
//! Precomputed prefix text surrounding a writer-supplied stamp.

use std::fmt;

/// Marker shown in place of the stamp when a template is displayed.
pub const STAMP_PLACEHOLDER: &str = "{stamp}";

/// Prefix template prepended to a caller's message.
///
/// A template is split around a single stamp placeholder. The `head` is the
/// text written before the stamp (typically an ANSI color code, or nothing in
/// plain mode) and the `tail` is everything after it: the line break, the
/// level tag and any reset codes. Writers decide what the stamp is; the
/// stream writer uses a wall-clock timestamp plus the caller location.
///
/// # Examples
///
/// ```
/// use termlog_sink::Template;
///
/// let template = Template::new("", "\n[warn]  ");
/// let mut out = String::new();
/// template.render("12:00", &mut out).unwrap();
/// assert_eq!(out, "12:00\n[warn]  ");
/// assert_eq!(template.to_string(), "{stamp}\n[warn]  ");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Template {
    head: String,
    tail: String,
}

impl Template {
    /// Creates a template from the text around the stamp placeholder.
    #[must_use]
    pub fn new(head: impl Into<String>, tail: impl Into<String>) -> Self {
        Self {
            head: head.into(),
            tail: tail.into(),
        }
    }

    /// Text written before the stamp.
    #[must_use]
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Text written after the stamp, ending with the level tag.
    #[must_use]
    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Returns the tail without its leading line break.
    ///
    /// For plain templates this is the bare tag, e.g. `"[info]  "`.
    #[must_use]
    pub fn tag_line(&self) -> &str {
        self.tail.strip_prefix('\n').unwrap_or(&self.tail)
    }

    /// Reports whether either half carries an ANSI escape sequence.
    #[must_use]
    pub fn is_colorized(&self) -> bool {
        self.head.contains('\x1b') || self.tail.contains('\x1b')
    }

    /// Writes `head`, `stamp` and `tail` in order.
    pub fn render<W>(&self, stamp: &str, out: &mut W) -> fmt::Result
    where
        W: fmt::Write + ?Sized,
    {
        out.write_str(&self.head)?;
        out.write_str(stamp)?;
        out.write_str(&self.tail)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(STAMP_PLACEHOLDER, f)
    }
}
