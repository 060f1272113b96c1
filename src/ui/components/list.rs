//! List component renderer.
//!
//! Renders the rows of the current page. The highlighted row is prefixed
//! with `"> "` at a two-column indent and drawn in the selection colour;
//! every other row sits at a four-column indent in the normal text colour,
//! so the row text lines up either way.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;
use std::io::{self, Write};

/// Indent of a plain row.
const ITEM_INDENT: usize = 4;

/// Indent of the highlighted row, before its `"> "` marker.
const SELECTED_INDENT: usize = 2;

/// Marker drawn in front of the highlighted row.
const SELECTED_MARKER: &str = "> ";

/// Renders `items` starting at `row`, reserving `height` rows in total.
///
/// Returns the first row after the reserved block.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_list<W: Write>(
    out: &mut W,
    row: usize,
    items: &[DisplayItem],
    height: usize,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    let mut current_row = row;
    for item in items {
        current_row = render_item(out, current_row, item, theme, cols)?;
    }
    Ok(row + height.max(items.len()))
}

fn render_item<W: Write>(
    out: &mut W,
    row: usize,
    item: &DisplayItem,
    theme: &Theme,
    cols: usize,
) -> io::Result<usize> {
    let width = cols.saturating_sub(ITEM_INDENT);

    if item.is_selected {
        position_cursor(out, row, SELECTED_INDENT + 1)?;
        write!(
            out,
            "{}{}{SELECTED_MARKER}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.selection_fg),
            truncate(&item.text, width)
        )?;
    } else {
        position_cursor(out, row, ITEM_INDENT + 1)?;
        write!(
            out,
            "{}{}",
            Theme::fg(&theme.colors.text_normal),
            truncate(&item.text, width)
        )?;
    }

    write!(out, "{}", Theme::reset())?;
    Ok(row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str, is_selected: bool) -> DisplayItem {
        DisplayItem {
            text: text.to_string(),
            is_selected,
        }
    }

    #[test]
    fn highlighted_row_gets_marker_and_selection_colour() {
        let theme = Theme::default();
        let mut out = Vec::new();

        render_list(
            &mut out,
            4,
            &[item("1. Blush: (°o°)", false), item("2. Bear: ʕ•ᴥ•ʔ", true)],
            14,
            &theme,
            80,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}[4;5H"));
        assert!(text.contains("\u{1b}[5;3H"));
        assert!(text.contains(&format!(
            "{}> 2. Bear: ʕ•ᴥ•ʔ",
            Theme::fg(&theme.colors.selection_fg)
        )));
        assert!(!text.contains("> 1. Blush"));
    }

    #[test]
    fn reserves_full_height_on_short_pages() {
        let mut out = Vec::new();
        let next = render_list(&mut out, 4, &[item("1. a: b", true)], 14, &Theme::default(), 80).unwrap();
        assert_eq!(next, 18);
    }

    #[test]
    fn rows_are_truncated_to_terminal_width() {
        let mut out = Vec::new();
        render_list(&mut out, 1, &[item("1. Long name: (^_^)", false)], 1, &Theme::default(), 10).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. Lon"));
        assert!(!text.contains("1. Long"));
    }
}
