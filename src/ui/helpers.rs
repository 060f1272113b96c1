//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning,
//! screen clearing and width-aware truncation. Everything writes into a
//! caller-supplied [`Write`] so frames can be rendered into a buffer.

use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

/// Positions the cursor at a specific row and column (1-indexed).
///
/// Uses the ANSI escape sequence `\u{1b}[{row};{col}H`.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn position_cursor<W: Write>(out: &mut W, row: usize, col: usize) -> io::Result<()> {
    write!(out, "\u{1b}[{row};{col}H")
}

/// Clears the whole screen and homes the cursor.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\u{1b}[2J\u{1b}[H")
}

/// Truncates `text` to at most `width` terminal columns.
///
/// Fullwidth glyphs such as `ツ` take two columns; a glyph that would
/// straddle the limit is dropped whole.
///
/// # Example
///
/// ```rust
/// use emoterm::ui::helpers::truncate;
///
/// assert_eq!(truncate("ʕ•ᴥ•ʔ bear", 5), "ʕ•ᴥ•ʔ");
/// assert_eq!(truncate("¯\\_(ツ)_/¯", 5), "¯\\_(");
/// assert_eq!(truncate("short", 80), "short");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (byte_idx, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &text[..byte_idx];
        }
    }
    text
}
