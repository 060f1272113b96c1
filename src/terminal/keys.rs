//! Translation of crossterm input into presenter events.
//!
//! # Keybindings
//!
//! - `↑`/`k`: Move up
//! - `↓`/`j`: Move down
//! - `←`/`h`/`PgUp`: Previous page
//! - `→`/`l`/`PgDn`: Next page
//! - `Home`/`g`: First entry
//! - `End`/`G`: Last entry
//! - `Enter`: Copy highlighted entry
//! - `Ctrl+c`: Cancel
//! - `q`/`Esc`: Cancel

use crate::app::Event;
use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a terminal event to a presenter event.
///
/// Returns `None` for input the presenter does not react to, including key
/// releases, mouse and focus events.
#[must_use]
pub fn map_event(event: &TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) => map_key(key),
        TermEvent::Resize(cols, rows) => Some(Event::Resize {
            cols: usize::from(*cols),
            rows: usize::from(*rows),
        }),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Event> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(Event::Interrupt),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Event::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Event::Down),
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => Some(Event::PrevPage),
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => Some(Event::NextPage),
        KeyCode::Home | KeyCode::Char('g') => Some(Event::Home),
        KeyCode::End | KeyCode::Char('G') => Some(Event::End),
        KeyCode::Enter => Some(Event::Confirm),
        KeyCode::Esc | KeyCode::Char('q') => Some(Event::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> TermEvent {
        TermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn ctrl_c_interrupts() {
        let event = TermEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&event), Some(Event::Interrupt));
    }

    #[test]
    fn plain_c_is_ignored() {
        assert_eq!(map_event(&key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn navigation_keys_map_to_movement() {
        assert_eq!(map_event(&key(KeyCode::Up)), Some(Event::Up));
        assert_eq!(map_event(&key(KeyCode::Char('j'))), Some(Event::Down));
        assert_eq!(map_event(&key(KeyCode::PageDown)), Some(Event::NextPage));
        assert_eq!(map_event(&key(KeyCode::Char('h'))), Some(Event::PrevPage));
        assert_eq!(map_event(&key(KeyCode::Char('G'))), Some(Event::End));
        assert_eq!(map_event(&key(KeyCode::Home)), Some(Event::Home));
    }

    #[test]
    fn enter_confirms_and_q_quits() {
        assert_eq!(map_event(&key(KeyCode::Enter)), Some(Event::Confirm));
        assert_eq!(map_event(&key(KeyCode::Char('q'))), Some(Event::Quit));
        assert_eq!(map_event(&key(KeyCode::Esc)), Some(Event::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let release = TermEvent::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(&release), None);
    }

    #[test]
    fn resize_carries_dimensions() {
        assert_eq!(
            map_event(&TermEvent::Resize(100, 30)),
            Some(Event::Resize { cols: 100, rows: 30 })
        );
    }
}
