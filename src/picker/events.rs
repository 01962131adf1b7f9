//! Event handling for the picker
//!
//! Maps crossterm keyboard and mouse events to state updates. Keypresses
//! switch the interaction mode to keyboard-driven; any mouse activity
//! switches it to pointer-driven, and hover moves the highlight only in
//! that mode.

use super::state::{InteractionMode, Phase, PickerState};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Result of handling one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Keep running the loop
    Continue,
    /// Confirm the current highlight
    Confirm,
    /// Close the picker without acting
    Abort,
    /// Query changed, needs re-matching
    QueryChanged,
    /// No action taken
    Ignored,
}

/// Poll for one event and apply it to the state
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut PickerState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

/// Drain pending input without acting on it
///
/// Used while the copied flash is up: the picker is about to close and
/// only the flash timer may end the session.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn drain(timeout: Duration) -> std::io::Result<()> {
    if event::poll(timeout)? {
        let _ = event::read()?;
    }
    Ok(())
}

fn handle_key(state: &mut PickerState, key: KeyEvent) -> EventResult {
    state.mode = InteractionMode::Keyboard;

    // While loading only abort is available
    if state.phase == Phase::Loading {
        return match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,
            _ => EventResult::Ignored,
        };
    }

    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,
        (KeyCode::Enter, _) => EventResult::Confirm,

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.move_backward();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.move_forward();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_backward();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_forward();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => {
            if state.query.is_empty() {
                EventResult::Ignored
            } else {
                state.query_backspace();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Delete, _) => {
            if state.query_cursor >= state.query.len() {
                EventResult::Ignored
            } else {
                state.query_delete();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::QueryChanged
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            state.query_delete_word();
            EventResult::QueryChanged
        }

        _ => EventResult::Ignored,
    }
}

fn handle_mouse(state: &mut PickerState, mouse: MouseEvent) -> EventResult {
    state.mode = InteractionMode::Pointer;

    if state.phase == Phase::Loading {
        return EventResult::Ignored;
    }

    match mouse.kind {
        MouseEventKind::Moved => {
            state.hover_row(mouse.row);
            EventResult::Continue
        }
        MouseEventKind::Down(MouseButton::Left) => {
            state.hover_row(mouse.row);
            EventResult::Confirm
        }
        MouseEventKind::ScrollUp => {
            state.move_backward();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.move_forward();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::{BookmarkEntry, EntryKind};
    use crate::picker::state::Selection;

    fn make_state() -> PickerState {
        let entries: Vec<BookmarkEntry> = (0..10)
            .map(|i| BookmarkEntry {
                id: format!("{i}"),
                title: format!("Entry {i}"),
                address: format!("https://example.com/{i}"),
                kind: EntryKind::Web,
            })
            .collect();
        let mut state = PickerState::new();
        state.set_entries(entries);
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_navigation() {
        let mut state = make_state();

        assert_eq!(handle_key(&mut state, key(KeyCode::Down)), EventResult::Continue);
        assert_eq!(state.selection, Selection::At(1));

        assert_eq!(handle_key(&mut state, key(KeyCode::Up)), EventResult::Continue);
        assert_eq!(state.selection, Selection::At(0));
    }

    #[test]
    fn test_typing_changes_query() {
        let mut state = make_state();

        assert_eq!(handle_key(&mut state, key(KeyCode::Char('r'))), EventResult::QueryChanged);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('u'))), EventResult::QueryChanged);
        assert_eq!(state.query, "ru");

        assert_eq!(handle_key(&mut state, key(KeyCode::Backspace)), EventResult::QueryChanged);
        assert_eq!(state.query, "r");
    }

    #[test]
    fn test_abort_keys() {
        let mut state = make_state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Abort);
        assert_eq!(
            handle_key(
                &mut state,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            EventResult::Abort
        );
    }

    #[test]
    fn test_confirm_key() {
        let mut state = make_state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::Confirm);
    }

    #[test]
    fn test_loading_phase_ignores_input() {
        let mut state = PickerState::new();
        assert_eq!(state.phase, Phase::Loading);

        assert_eq!(handle_key(&mut state, key(KeyCode::Char('a'))), EventResult::Ignored);
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::Ignored);
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Abort);
    }

    #[test]
    fn test_mouse_switches_mode_and_hovers() {
        let mut state = make_state();
        state.list_top = 2;
        state.visible_height = 8;

        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handle_mouse(&mut state, moved), EventResult::Continue);
        assert_eq!(state.mode, InteractionMode::Pointer);
        assert_eq!(state.selection, Selection::At(3));

        // A keypress switches back to keyboard mode
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.mode, InteractionMode::Keyboard);
    }

    #[test]
    fn test_mouse_click_confirms() {
        let mut state = make_state();
        state.list_top = 2;
        state.visible_height = 8;

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handle_mouse(&mut state, click), EventResult::Confirm);
        assert_eq!(state.selection, Selection::At(2));
    }
}
