//! Presenter state and view model computation.
//!
//! [`AppState`] is the single source of truth for the interactive session:
//! the immutable search results, the highlighted index, the terminal size and
//! the session mode. The event handler mutates it; the renderer reads it via
//! [`AppState::compute_viewmodel`].
//!
//! # Pagination
//!
//! Entries are split into fixed-size pages. The visible page is always the
//! one containing the highlighted entry, so moving the cursor past a page
//! boundary flips the page.
//!
//! On terminals too short for a whole page, only a window of the page is
//! drawn, scrolled so the highlighted entry stays on screen.
//!
//! # Example
//!
//! ```rust
//! use emoterm::app::AppState;
//! use emoterm::EmoticonEntry;
//!
//! let entries = vec![EmoticonEntry::new("Happy", "(^_^)").unwrap()];
//! let mut state = AppState::new(entries, 14);
//! state.move_selection_down();
//! assert_eq!(state.selected_index, 0);
//! ```

use super::modes::Mode;
use crate::domain::EmoticonEntry;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, PaginationInfo, UIViewModel,
};
use std::ops::Range;

/// Title shown above the result list.
pub const LIST_TITLE: &str = "Here are the emoticons I found :3";

/// Keybinding hints shown below the list.
const HELP_TEXT: &str = "↑/k up • ↓/j down • ←/h prev page • →/l next page • enter copy • q quit";

/// Terminal width assumed until the first resize event arrives.
const DEFAULT_COLS: usize = 20;

/// Terminal height assumed until the first resize event arrives.
const DEFAULT_ROWS: usize = 24;

/// Rows taken by everything but the list: title, spacing, page indicator and help.
const CHROME_ROWS: usize = 7;

/// Interactive session state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search results in page order. Never mutated after construction.
    entries: Vec<EmoticonEntry>,

    /// Zero-based index of the highlighted entry.
    ///
    /// Always `< entries.len()`, or `0` when there are no entries.
    pub selected_index: usize,

    /// Rows per page.
    page_size: usize,

    /// Current session mode.
    pub mode: Mode,

    /// Entry chosen on confirm. `None` while browsing or after a cancel.
    selection: Option<EmoticonEntry>,

    /// Terminal width in columns.
    pub cols: usize,

    /// Terminal height in rows. Limits how much of a page is drawn at once.
    pub rows: usize,
}

impl AppState {
    /// Creates a browsing session over `entries` with `page_size` rows per page.
    ///
    /// A `page_size` of zero is treated as one.
    #[must_use]
    pub fn new(entries: Vec<EmoticonEntry>, page_size: usize) -> Self {
        Self {
            entries,
            selected_index: 0,
            page_size: page_size.max(1),
            mode: Mode::Browsing,
            selection: None,
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
        }
    }

    /// All entries, in display order.
    #[must_use]
    pub fn entries(&self) -> &[EmoticonEntry] {
        &self.entries
    }

    /// Number of selectable rows across all pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the search produced no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns `true` once the session has ended.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.mode.is_done()
    }

    /// The highlighted entry, if any.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&EmoticonEntry> {
        self.entries.get(self.selected_index)
    }

    /// The confirmed entry. Only meaningful once [`Self::is_done`] is `true`.
    #[must_use]
    pub const fn selection(&self) -> Option<&EmoticonEntry> {
        self.selection.as_ref()
    }

    /// Consumes the state, returning the confirmed entry.
    #[must_use]
    pub fn into_selection(self) -> Option<EmoticonEntry> {
        self.selection
    }

    /// Moves the cursor down one row, stopping at the last entry.
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.entries.len() {
            self.selected_index += 1;
        }
    }

    /// Moves the cursor up one row, stopping at the first entry.
    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Jumps to the first entry.
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jumps to the last entry.
    pub fn select_last(&mut self) {
        self.selected_index = self.entries.len().saturating_sub(1);
    }

    /// Flips to the next page, keeping the row offset within the page.
    ///
    /// Lands on the last entry if the next page is shorter than the offset.
    /// No-op on the last page.
    pub fn next_page(&mut self) {
        let page = self.current_page();
        if page + 1 >= self.page_count() {
            return;
        }
        let offset = self.selected_index % self.page_size;
        let target = (page + 1) * self.page_size + offset;
        self.selected_index = target.min(self.entries.len() - 1);
    }

    /// Flips to the previous page, keeping the row offset within the page.
    ///
    /// No-op on the first page.
    pub fn prev_page(&mut self) {
        let page = self.current_page();
        if page == 0 {
            return;
        }
        let offset = self.selected_index % self.page_size;
        self.selected_index = (page - 1) * self.page_size + offset;
    }

    /// Zero-based page containing the highlighted entry.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.selected_index / self.page_size
    }

    /// Total number of pages; at least one, even when empty.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.entries.len().div_ceil(self.page_size).max(1)
    }

    /// Index range of the entries on the current page.
    #[must_use]
    pub fn page_bounds(&self) -> Range<usize> {
        let start = self.current_page() * self.page_size;
        let end = (start + self.page_size).min(self.entries.len());
        start.min(end)..end
    }

    /// Number of list rows drawn at once: the page size, reduced to what
    /// fits on the terminal. Always at least one.
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.page_size
            .min(self.rows.saturating_sub(CHROME_ROWS))
            .max(1)
    }

    /// Index range of the entries drawn on screen.
    ///
    /// Equals [`Self::page_bounds`] unless the terminal is too short, in
    /// which case the window ends at the highlighted entry once it would
    /// otherwise fall off the bottom.
    #[must_use]
    pub fn visible_bounds(&self) -> Range<usize> {
        let page = self.page_bounds();
        let height = self.visible_rows();
        let offset = self.selected_index.saturating_sub(page.start);
        let start = (page.start + offset.saturating_sub(height - 1)).min(page.end);
        start..(start + height).min(page.end)
    }

    /// Records the terminal dimensions.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Ends the session with the highlighted entry as the selection.
    ///
    /// An empty list ends the session without a selection.
    pub fn confirm(&mut self) {
        self.selection = self.selected_entry().cloned();
        self.mode = Mode::Done;
    }

    /// Ends the session without a selection.
    pub fn cancel(&mut self) {
        self.selection = None;
        self.mode = Mode::Done;
    }

    /// Computes the renderable view of the current page.
    ///
    /// Row numbers are 1-based across the whole list, so the first row of
    /// page two is numbered `page_size + 1`.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let header = HeaderInfo {
            title: LIST_TITLE.to_string(),
        };
        let footer = FooterInfo {
            keybindings: HELP_TEXT.to_string(),
        };

        if self.entries.is_empty() {
            return UIViewModel {
                header,
                display_items: vec![],
                list_height: self.page_size,
                pagination: None,
                footer,
                empty_state: Some(EmptyState {
                    message: "No emoticons found".to_string(),
                    subtitle: "Try another search • press q to quit".to_string(),
                }),
                cols: self.cols,
            };
        }

        let bounds = self.visible_bounds();
        let display_items = self.entries[bounds.clone()]
            .iter()
            .zip(bounds)
            .map(|(entry, index)| DisplayItem {
                text: format!("{}. {}", index + 1, entry.display_line()),
                is_selected: index == self.selected_index,
            })
            .collect();

        let pagination = (self.page_count() > 1).then(|| PaginationInfo {
            page: self.current_page(),
            total: self.page_count(),
        });

        UIViewModel {
            header,
            display_items,
            list_height: self.visible_rows(),
            pagination,
            footer,
            empty_state: None,
            cols: self.cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<EmoticonEntry> {
        (0..n)
            .map(|i| EmoticonEntry::new(&format!("name{i}"), &format!("(v{i})")).unwrap())
            .collect()
    }

    #[test]
    fn cursor_is_clamped_at_both_ends() {
        let mut state = AppState::new(entries(3), 14);

        state.move_selection_up();
        assert_eq!(state.selected_index, 0);

        for _ in 0..10 {
            state.move_selection_down();
        }
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn navigation_on_empty_list_keeps_index_zero() {
        let mut state = AppState::new(vec![], 14);
        state.move_selection_down();
        state.next_page();
        state.select_last();
        state.prev_page();
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_entry().is_none());
        assert_eq!(state.page_count(), 1);
    }

    #[test]
    fn moving_past_page_boundary_flips_page() {
        let mut state = AppState::new(entries(20), 14);
        for _ in 0..14 {
            state.move_selection_down();
        }
        assert_eq!(state.selected_index, 14);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_bounds(), 14..20);
    }

    #[test]
    fn page_jumps_keep_offset_and_clamp_to_last_entry() {
        let mut state = AppState::new(entries(20), 14);
        state.selected_index = 10;

        state.next_page();
        assert_eq!(state.selected_index, 19);

        state.next_page();
        assert_eq!(state.selected_index, 19);

        state.prev_page();
        assert_eq!(state.selected_index, 5);

        state.prev_page();
        assert_eq!(state.selected_index, 5);
    }

    #[test]
    fn home_and_end_jump_to_extremes() {
        let mut state = AppState::new(entries(30), 14);
        state.select_last();
        assert_eq!(state.selected_index, 29);
        assert_eq!(state.current_page(), 2);
        state.select_first();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn confirm_selects_highlighted_entry() {
        let list = entries(5);
        let mut state = AppState::new(list.clone(), 14);
        state.selected_index = 3;

        state.confirm();

        assert!(state.is_done());
        assert_eq!(state.into_selection(), Some(list[3].clone()));
    }

    #[test]
    fn confirm_on_empty_list_ends_without_selection() {
        let mut state = AppState::new(vec![], 14);
        state.confirm();
        assert!(state.is_done());
        assert!(state.selection().is_none());
    }

    #[test]
    fn cancel_ends_without_selection() {
        let mut state = AppState::new(entries(5), 14);
        state.selected_index = 2;
        state.cancel();
        assert!(state.is_done());
        assert!(state.selection().is_none());
    }

    #[test]
    fn viewmodel_shows_only_current_page_with_global_numbers() {
        let mut state = AppState::new(entries(20), 14);
        state.selected_index = 15;

        let vm = state.compute_viewmodel();

        assert_eq!(vm.display_items.len(), 6);
        assert_eq!(vm.display_items[0].text, "15. name14: (v14)");
        assert!(vm.display_items[1].is_selected);
        assert_eq!(vm.display_items.iter().filter(|i| i.is_selected).count(), 1);
        assert_eq!(vm.pagination, Some(PaginationInfo { page: 1, total: 2 }));
    }

    #[test]
    fn viewmodel_exposes_every_entry_across_pages() {
        let mut state = AppState::new(entries(31), 14);
        let mut seen = 0;
        loop {
            seen += state.compute_viewmodel().display_items.len();
            let before = state.current_page();
            state.next_page();
            if state.current_page() == before {
                break;
            }
            assert!(state.selected_index < state.len());
        }
        assert_eq!(seen, 31);
    }

    #[test]
    fn single_page_has_no_pagination() {
        let state = AppState::new(entries(14), 14);
        let vm = state.compute_viewmodel();
        assert_eq!(vm.display_items.len(), 14);
        assert!(vm.pagination.is_none());
    }

    #[test]
    fn short_terminal_scrolls_window_to_keep_selection_visible() {
        let mut state = AppState::new(entries(20), 14);
        state.resize(80, 10);
        assert_eq!(state.visible_rows(), 3);

        let vm = state.compute_viewmodel();
        assert_eq!(vm.list_height, 3);
        assert_eq!(vm.display_items.len(), 3);
        assert!(vm.display_items[0].is_selected);

        state.selected_index = 5;
        let vm = state.compute_viewmodel();
        let texts: Vec<_> = vm.display_items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["4. name3: (v3)", "5. name4: (v4)", "6. name5: (v5)"]);
        assert!(vm.display_items[2].is_selected);
        assert_eq!(vm.pagination, Some(PaginationInfo { page: 0, total: 2 }));
    }

    #[test]
    fn tiny_terminal_still_shows_the_selected_row() {
        let mut state = AppState::new(entries(20), 14);
        state.resize(20, 2);
        state.selected_index = 16;

        let vm = state.compute_viewmodel();
        assert_eq!(vm.display_items.len(), 1);
        assert_eq!(vm.display_items[0].text, "17. name16: (v16)");
        assert!(vm.display_items[0].is_selected);
    }

    #[test]
    fn tall_terminal_shows_whole_page() {
        let mut state = AppState::new(entries(20), 14);
        state.resize(80, 60);
        state.selected_index = 13;
        assert_eq!(state.visible_bounds(), 0..14);
        assert_eq!(state.compute_viewmodel().list_height, 14);
    }

    #[test]
    fn empty_list_renders_empty_state() {
        let vm = AppState::new(vec![], 14).compute_viewmodel();
        assert!(vm.display_items.is_empty());
        assert!(vm.empty_state.is_some());
        assert_eq!(vm.header.title, LIST_TITLE);
    }
}
