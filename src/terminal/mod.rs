//! Terminal ownership and the presenter input loop.
//!
//! This is the only module that talks to crossterm. While [`present`] runs,
//! the terminal is in raw mode on the alternate screen and nothing else in
//! the process writes to it; the guard restores the terminal on every exit
//! path, including errors.

mod keys;

pub use keys::map_event;

use crate::app::{handle_event, AppState};
use crate::domain::{EmoticonEntry, Result};
use crate::ui::{render, Theme};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event as TermEvent};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use std::io::{self, stdout, Write};

/// Puts the terminal into raw mode on the alternate screen for its lifetime.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(stdout(), EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        tracing::debug!("terminal entered raw mode");
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        tracing::debug!("terminal restored");
    }
}

/// Runs the interactive list over `entries` and returns the chosen entry.
///
/// Returns `Ok(None)` when the user cancels (Ctrl-C, `q`, Esc) or confirms
/// on an empty list.
///
/// # Errors
///
/// Returns [`EmotermError::Terminal`](crate::EmotermError::Terminal) if the
/// terminal cannot be configured, read or written.
pub fn present(
    entries: Vec<EmoticonEntry>,
    theme: &Theme,
    page_size: usize,
) -> Result<Option<EmoticonEntry>> {
    let _span = tracing::debug_span!("present", entries = entries.len(), page_size).entered();

    let mut state = AppState::new(entries, page_size);

    let guard = TerminalGuard::enter()?;
    let (cols, rows) = terminal::size()?;
    state.resize(usize::from(cols), usize::from(rows));

    let mut out = stdout();
    let result = drive(&mut state, theme, &mut out, std::iter::repeat_with(event::read));
    drop(guard);
    result?;

    Ok(state.into_selection())
}

/// Renders the first frame, then feeds `events` into the state machine
/// until the session is done, redrawing whenever the handler asks for it.
///
/// An input stream that ends before the session is done cancels it.
///
/// # Errors
///
/// Propagates read errors from `events` and write errors from `out`.
pub fn drive<W, I>(state: &mut AppState, theme: &Theme, out: &mut W, events: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = io::Result<TermEvent>>,
{
    render(out, state, theme)?;

    for event in events {
        let Some(event) = map_event(&event?) else {
            continue;
        };

        if handle_event(state, &event) {
            render(out, state, theme)?;
        }

        if state.is_done() {
            return Ok(());
        }
    }

    tracing::debug!("input stream ended, cancelling session");
    state.cancel();
    Ok(())
}
