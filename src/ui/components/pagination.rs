//! Pagination indicator renderer.
//!
//! Draws one dot per page: `•` for the current page, `○` for the others.
//! When the dots would not fit the terminal width, a `page/total` counter
//! is drawn instead.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;
use std::io::{self, Write};

const PAGINATION_INDENT: usize = 4;
const ACTIVE_DOT: &str = "•";
const INACTIVE_DOT: &str = "○";

/// Renders the page indicator at `row` and returns the next free row.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_pagination<W: Write>(
    out: &mut W,
    row: usize,
    pagination: &PaginationInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    position_cursor(out, row, PAGINATION_INDENT + 1)?;

    if pagination.total > cols.saturating_sub(PAGINATION_INDENT) {
        write!(
            out,
            "{}{}/{}{}",
            Theme::fg(&theme.colors.pagination_active),
            pagination.page + 1,
            pagination.total,
            Theme::reset()
        )?;
        return Ok(row + 1);
    }

    for page in 0..pagination.total {
        if page == pagination.page {
            write!(out, "{}{ACTIVE_DOT}", Theme::fg(&theme.colors.pagination_active))?;
        } else {
            write!(out, "{}{INACTIVE_DOT}", Theme::fg(&theme.colors.pagination_inactive))?;
        }
    }
    write!(out, "{}", Theme::reset())?;
    Ok(row + 1)
}
