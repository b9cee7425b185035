//! Keyboard input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert a character into the focused operand field
    InsertChar(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Clear the focused field
    Clear,
    /// Move focus to the other operand field
    SwitchField,
    /// Submit the calculation
    Submit,
    /// Re-fetch the history
    Refresh,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        // Handle Ctrl+key combinations
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('r') => KeyAction::Refresh,
                KeyCode::Char('u') => KeyAction::Clear,
                _ => KeyAction::None,
            };
        }

        // Handle regular keys
        match code {
            KeyCode::Char(c) => KeyAction::InsertChar(c),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                KeyAction::SwitchField
            }
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Esc => KeyAction::Clear,
            KeyCode::F(5) => KeyAction::Refresh,
            _ => KeyAction::None,
        }
    }

    /// Returns true if the character is valid for an operand field
    #[must_use]
    pub fn is_valid_char(c: char) -> bool {
        c.is_ascii_digit() || c == '.' || c == '-' || c == '+' || c == 'e' || c == 'E'
    }
}
