//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
/// Keys that only apply to some routes (e.g. `t` for trigger-review) still
/// map here; the update loop decides whether the current route acts on
/// them.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::CursorHome),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::CursorEnd),
        KeyCode::Enter => Some(AppMsg::OpenSelected),
        KeyCode::Esc | KeyCode::Backspace => Some(AppMsg::GoBack),
        KeyCode::Char('h') => Some(AppMsg::GoHome),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('t') => Some(AppMsg::TriggerReviewRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::map_key_to_message;
    use crate::tui::messages::AppMsg;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'))]
    #[case::refresh(KeyCode::Char('r'))]
    #[case::trigger(KeyCode::Char('t'))]
    #[case::open(KeyCode::Enter)]
    #[case::back(KeyCode::Esc)]
    fn known_keys_map_to_messages(#[case] code: KeyCode) {
        assert!(map_key_to_message(&key(code)).is_some());
    }

    #[test]
    fn trigger_key_maps_to_trigger_request() {
        let msg = map_key_to_message(&key(KeyCode::Char('t')));
        assert!(matches!(msg, Some(AppMsg::TriggerReviewRequested)));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert!(map_key_to_message(&key(KeyCode::Char('z'))).is_none());
    }
}
