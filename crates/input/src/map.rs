//! Key mapping from terminal events to typing keys.

use crate::types::KeyInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a typing key.
///
/// Ctrl+C maps to Escape: in raw mode the terminal no longer turns it into
/// SIGINT, so it has to leave the lesson the same way Escape does.
pub fn map_key_event(key: KeyEvent) -> KeyInput {
    if is_interrupt(key) {
        return KeyInput::Escape;
    }

    match key.code {
        KeyCode::Enter => KeyInput::Enter,
        KeyCode::Esc => KeyInput::Escape,
        KeyCode::Char(' ') => KeyInput::Space,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            KeyInput::from_char(c)
        }
        _ => KeyInput::Other,
    }
}

/// Check if key is the Ctrl+C interrupt chord.
pub fn is_interrupt(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Enter)), KeyInput::Enter);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Esc)), KeyInput::Escape);
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char(' '))),
            KeyInput::Space
        );
    }

    #[test]
    fn test_printable_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('a'))),
            KeyInput::Char('a')
        );
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            KeyInput::Char('A')
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('ї'))),
            KeyInput::Char('ї')
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char(';'))),
            KeyInput::Char(';')
        );
    }

    #[test]
    fn test_named_keys_are_other() {
        for code in [
            KeyCode::Backspace,
            KeyCode::Left,
            KeyCode::Tab,
            KeyCode::F(1),
            KeyCode::Delete,
        ] {
            assert_eq!(map_key_event(KeyEvent::from(code)), KeyInput::Other);
        }
    }

    #[test]
    fn test_modified_chars_are_other() {
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            KeyInput::Other
        );
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            KeyInput::Other
        );
    }

    #[test]
    fn test_interrupt_keys() {
        assert!(is_interrupt(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_interrupt(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyInput::Escape
        );
    }
}
