//! Abstract input key event, independent of terminal library.
//!
//! Converted from crossterm's `KeyEvent` at the TUI boundary so this crate
//! never depends on terminal-specific types.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}
