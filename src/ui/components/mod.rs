//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns
//! the next free row, so layouts are a simple chain of calls.
//!
//! # Components
//!
//! - [`header`]: List title
//! - [`list`]: Rows of the current page
//! - [`pagination`]: Page dots or page counter
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Message shown when there are no results
//!
//! # Layout
//!
//! ```text
//! [blank]
//! [Title]
//! [blank]
//! [Rows, list_height reserved]
//! [blank]
//! [Page dots, when more than one page]
//! [blank]
//! [Help]
//! ```

mod empty;
mod footer;
mod header;
mod list;
mod pagination;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, UIViewModel};
use std::io::{self, Write};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::render_list;
use pagination::render_pagination;

/// First row used by the layout; row 1 stays blank.
const FIRST_ROW: usize = 2;

/// Renders the title, the current page of rows, page dots and help line.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_list_mode<W: Write>(out: &mut W, vm: &UIViewModel, theme: &Theme) -> io::Result<()> {
    let mut current_row = render_header(out, FIRST_ROW, &vm.header, theme, vm.cols)?;
    current_row = render_list(
        out,
        current_row + 1,
        &vm.display_items,
        vm.list_height,
        theme,
        vm.cols,
    )?;

    current_row += 1;
    if let Some(pagination) = &vm.pagination {
        current_row = render_pagination(out, current_row, pagination, theme, vm.cols)?;
    } else {
        current_row += 1;
    }

    render_footer(out, current_row + 1, &vm.footer, theme, vm.cols)?;
    Ok(())
}

/// Renders the title, the empty state message and help line.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_empty_mode<W: Write>(
    out: &mut W,
    vm: &UIViewModel,
    empty: &EmptyState,
    theme: &Theme,
) -> io::Result<()> {
    let current_row = render_header(out, FIRST_ROW, &vm.header, theme, vm.cols)?;
    let current_row = render_empty_state(out, current_row + 1, empty, theme, vm.cols)?;
    render_footer(out, current_row + 1, &vm.footer, theme, vm.cols)?;
    Ok(())
}
