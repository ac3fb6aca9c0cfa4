//! Keyboard decoding for the terminal user interface.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tui::enums::Key;

/// Translate a crossterm key event into a [`Key`].
///
/// Returns `None` for releases and for keys the dashboard has no use for.
pub fn decode_key(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Key::Quit),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Char('q') => Some(Key::Quit),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_decode_navigation_keys() {
        assert_eq!(decode_key(key(KeyCode::Down)), Some(Key::Down));
        assert_eq!(decode_key(key(KeyCode::Enter)), Some(Key::Enter));
        assert_eq!(decode_key(key(KeyCode::Char('j'))), Some(Key::Char('j')));
        assert_eq!(decode_key(key(KeyCode::Char('q'))), Some(Key::Quit));
        assert_eq!(decode_key(key(KeyCode::F(1))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(decode_key(event), Some(Key::Quit));
        let event = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(decode_key(event), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut event = key(KeyCode::Char('j'));
        event.kind = KeyEventKind::Release;
        assert_eq!(decode_key(event), None);
    }
}
