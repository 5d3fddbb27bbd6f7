//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use folio_app::message::Message;
use folio_app::InputKey;
use folio_core::prelude::*;
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None, // Unsupported keys ignored
    }
}

/// Poll for terminal events with timeout.
///
/// A timeout yields `Message::Tick` so transitions keep animating even while
/// no input arrives.
pub fn poll(tick_rate_ms: u64) -> Result<Option<Message>> {
    if event::poll(Duration::from_millis(tick_rate_ms))? {
        let event = event::read()?;

        match event {
            Event::Key(key) => {
                if key.kind == event::KeyEventKind::Press {
                    if let Some(input_key) = key_event_to_input(key) {
                        Ok(Some(Message::Key(input_key)))
                    } else {
                        Ok(None)
                    }
                } else {
                    Ok(None)
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Ok(Some(Message::Click {
                    column: mouse.column,
                    row: mouse.row,
                })),
                _ => Ok(None),
            },
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout for animations
        Ok(Some(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            Some(InputKey::Up)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
            Some(InputKey::Down)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            Some(InputKey::Left)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            Some(InputKey::Right)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(InputKey::Enter)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputKey::Esc)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            Some(InputKey::Tab)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(InputKey::Backspace)
        );
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_uppercase_letters() {
        let key = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('R')));
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }
}
