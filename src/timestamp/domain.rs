//! The formatted value returned to callers.

use std::fmt;

/// Byte length of `YYYY-MM-DD HH:MM:SS.mmm`.
pub const TIMESTAMP_LEN: usize = 23;

/// `strftime`-style pattern for the whole-second part.
pub(crate) const SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock time rendered as `YYYY-MM-DD HH:MM:SS.mmm`.
///
/// Values are only built by the formatter, which guarantees the fixed width.
/// There is no trailing newline or terminator.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FormattedTimestamp {
    text: String,
}

impl FormattedTimestamp {
    pub(crate) fn new(text: String) -> Self {
        debug_assert_eq!(text.len(), TIMESTAMP_LEN, "malformed timestamp {text:?}");
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Always [`TIMESTAMP_LEN`].
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for FormattedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for FormattedTimestamp {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
