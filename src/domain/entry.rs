//! Emoticon entry domain model.
//!
//! An [`EmoticonEntry`] is one search hit: the literal glyph sequence to copy
//! and the human label shown next to it. Entries are produced by the fetcher,
//! rendered by the list presenter and handed to the clipboard writer as-is.

use super::error::EmotermError;
use std::fmt;
use std::str::FromStr;

/// Separator between name and value in a rendered list line.
pub const DISPLAY_SEPARATOR: &str = ": ";

/// A single emoticon search result.
///
/// Both fields are non-empty for entries built by the parser; entries with
/// an empty side are discarded before they reach the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmoticonEntry {
    /// Human label, e.g. `"Blush"`.
    pub name: String,
    /// Text copied to the clipboard, e.g. `"(°o°)"`.
    pub value: String,
}

impl EmoticonEntry {
    /// Creates an entry from trimmed name and value text.
    ///
    /// Returns `None` if either side is empty after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use emoterm::EmoticonEntry;
    ///
    /// let entry = EmoticonEntry::new(" Blush ", "(°o°)").unwrap();
    /// assert_eq!(entry.name, "Blush");
    /// assert!(EmoticonEntry::new("", "(°o°)").is_none());
    /// ```
    #[must_use]
    pub fn new(name: &str, value: &str) -> Option<Self> {
        let name = name.trim();
        let value = value.trim();
        if name.is_empty() || value.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    /// Renders the `"<name>: <value>"` line shown in the list.
    #[must_use]
    pub fn display_line(&self) -> String {
        format!("{}{DISPLAY_SEPARATOR}{}", self.name, self.value)
    }
}

impl fmt::Display for EmoticonEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DISPLAY_SEPARATOR}{}", self.name, self.value)
    }
}

impl FromStr for EmoticonEntry {
    type Err = EmotermError;

    /// Parses a display line, splitting on the first `": "`.
    ///
    /// Everything after the first separator is the value, so values that
    /// themselves contain `": "` survive intact.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (name, value) = line
            .split_once(DISPLAY_SEPARATOR)
            .ok_or_else(|| EmotermError::Parse(format!("missing separator in {line:?}")))?;

        // Only the name is trimmed; the value is taken verbatim.
        let name = name.trim();
        if name.is_empty() || value.is_empty() {
            return Err(EmotermError::Parse(format!("empty field in {line:?}")));
        }

        Ok(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}
