//! Enumerations for TUI state management.

use crate::tui::nav::NavState;

/// Screen currently shown.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum View {
    #[default]
    Dashboard,
    Epic,
    Feature,
    Help,
}

/// Decoded, terminal-independent key press.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Backspace,
    /// `q` or Ctrl+C.
    Quit,
    Char(char),
}

/// Outcome of feeding one key to the navigation state machine.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Step {
    Continue(NavState),
    Stop,
}
