//! Header component renderer.
//!
//! Renders the list title, left-aligned with a two-column margin.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;
use std::io::{self, Write};

/// Left margin before the title.
const TITLE_MARGIN: usize = 2;

/// Renders the title at `row` and returns the next free row.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_header<W: Write>(
    out: &mut W,
    row: usize,
    header: &HeaderInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    position_cursor(out, row, TITLE_MARGIN + 1)?;
    write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.title_fg))?;
    if let Some(bg) = &theme.colors.title_bg {
        write!(out, "{}", Theme::bg(bg))?;
    }
    write!(
        out,
        "{}{}",
        truncate(&header.title, cols.saturating_sub(TITLE_MARGIN)),
        Theme::reset()
    )?;
    Ok(row + 1)
}
