//! Footer component renderer.
//!
//! Renders the dimmed keybinding help line below the list.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use std::io::{self, Write};

const FOOTER_INDENT: usize = 4;

/// Renders the help line at `row` and returns the next free row.
///
/// Text wider than the terminal is truncated to keep the layout intact on
/// narrow terminals.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_footer<W: Write>(
    out: &mut W,
    row: usize,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    position_cursor(out, row, FOOTER_INDENT + 1)?;
    write!(
        out,
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        truncate(&footer.keybindings, cols.saturating_sub(FOOTER_INDENT)),
        Theme::reset()
    )?;
    Ok(row + 1)
}
