//! Key mapping from terminal events to input actions.
//!
//! Actions are screen-agnostic; the app decides what `Up` or `Confirm` means
//! on the screen that is showing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Logical input produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Previous entry / tilt away
    Up,
    /// Next entry / tilt toward
    Down,
    /// Start the selected category / play again
    Confirm,
    /// Mark the current card correct
    Correct,
    /// Skip the current card
    Skip,
    /// Deal a fresh deck after game over
    PlayAgain,
    /// Leave the current screen
    Back,
}

/// Map keyboard input to input actions.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputAction::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputAction::Down)
        }

        KeyCode::Enter => Some(InputAction::Confirm),
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(InputAction::Correct),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char(' ') => Some(InputAction::Skip),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::PlayAgain),

        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('B') => {
            Some(InputAction::Back)
        }

        _ => None,
    }
}

/// Check if key should quit the app.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
