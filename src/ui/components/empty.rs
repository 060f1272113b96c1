//! Empty state component renderer.
//!
//! Shown in place of the list when the search returned nothing.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use std::io::{self, Write};

const EMPTY_INDENT: usize = 4;

/// Renders the two-line empty state message starting at `row`.
///
/// The message uses `empty_state_fg`; the subtitle is dimmed.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_empty_state<W: Write>(
    out: &mut W,
    row: usize,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    let width = cols.saturating_sub(EMPTY_INDENT);

    position_cursor(out, row, EMPTY_INDENT + 1)?;
    write!(
        out,
        "{}{}{}",
        Theme::fg(&theme.colors.empty_state_fg),
        truncate(&empty.message, width),
        Theme::reset()
    )?;

    position_cursor(out, row + 1, EMPTY_INDENT + 1)?;
    write!(
        out,
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        truncate(&empty.subtitle, width),
        Theme::reset()
    )?;

    Ok(row + 2)
}
