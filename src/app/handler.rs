//! Event handling and state transition logic.
//!
//! The terminal layer translates raw key and resize events into [`Event`]s;
//! [`handle_event`] applies them to the [`AppState`] and reports whether the
//! screen needs to be redrawn.
//!
//! # Event Types
//!
//! - **Navigation**: `Up`, `Down`, `PrevPage`, `NextPage`, `Home`, `End`
//! - **Layout**: `Resize`
//! - **Session end**: `Confirm`, `Interrupt`, `Quit`
//!
//! # Example
//!
//! ```rust
//! use emoterm::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new(vec![], 14);
//! let redraw = handle_event(&mut state, &Event::Interrupt);
//! assert!(!redraw);
//! assert!(state.is_done());
//! ```

use crate::app::AppState;

/// Input events understood by the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor up one row.
    Up,
    /// Moves the cursor down one row.
    Down,
    /// Flips to the previous page.
    PrevPage,
    /// Flips to the next page.
    NextPage,
    /// Jumps to the first entry.
    Home,
    /// Jumps to the last entry.
    End,
    /// The terminal was resized.
    Resize {
        /// New width in columns.
        cols: usize,
        /// New height in rows.
        rows: usize,
    },
    /// Copies the highlighted entry and ends the session.
    Confirm,
    /// Ctrl-C: ends the session without a selection.
    Interrupt,
    /// `q`/Esc: ends the session without a selection.
    Quit,
}

/// Applies an event to the session state.
///
/// Returns `true` if the screen should be redrawn. Events arriving after the
/// session has ended are ignored.
pub fn handle_event(state: &mut AppState, event: &Event) -> bool {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.is_done() {
        tracing::debug!("session already done, ignoring event");
        return false;
    }

    let before = state.selected_index;

    match *event {
        Event::Up => state.move_selection_up(),
        Event::Down => state.move_selection_down(),
        Event::PrevPage => state.prev_page(),
        Event::NextPage => state.next_page(),
        Event::Home => state.select_first(),
        Event::End => state.select_last(),
        Event::Resize { cols, rows } => {
            tracing::trace!(cols, rows, "terminal resized");
            state.resize(cols, rows);
            return true;
        }
        Event::Confirm => {
            state.confirm();
            tracing::debug!(
                index = state.selected_index,
                selected = ?state.selection().map(|e| e.name.as_str()),
                "session confirmed"
            );
            return false;
        }
        Event::Interrupt | Event::Quit => {
            tracing::debug!(event = ?event, "session cancelled");
            state.cancel();
            return false;
        }
    }

    state.selected_index != before
}
