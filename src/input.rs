//! Input handling for the game screen.
//!
//! Keystrokes either edit the pending answer or drive the session through
//! [`crate::game_logic`]; nothing here touches game rules directly.

use crate::beaters::BeaterTable;
use crate::constants::INPUT_MAX_CHARS;
use crate::game_logic;
use crate::notifications;
use crate::session::GameSession;
use crate::ui::toast::ToastState;
use crossterm::event::{KeyCode, KeyEvent};

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Exit the application.
    Quit,
}

/// Dispatch a key event for the game screen.
///
/// While the game is over the text field is disabled: only retry and quit
/// keys are recognized.
pub fn handle_game_key(
    key: KeyEvent,
    session: &mut GameSession,
    table: &BeaterTable,
    toasts: &mut ToastState,
) -> InputResult {
    if session.game_over {
        return match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => {
                session.reset();
                toasts.push(notifications::new_game_notification(session));
                InputResult::Continue
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputResult::Quit,
            _ => InputResult::Continue,
        };
    }

    match key.code {
        KeyCode::Char(c) => {
            if session.pending_input.chars().count() < INPUT_MAX_CHARS {
                session.pending_input.push(c);
            }
            InputResult::Continue
        }
        KeyCode::Backspace => {
            session.pending_input.pop();
            InputResult::Continue
        }
        KeyCode::Enter => {
            // Submission is disabled while the field is blank
            if session.pending_input.trim().is_empty() {
                session.pending_input.clear();
                return InputResult::Continue;
            }
            let raw = session.pending_input.clone();
            let result = game_logic::submit_answer(session, table, &raw);
            if let Some(note) = notifications::notification_for(&result) {
                toasts.push(note);
            }
            InputResult::Continue
        }
        KeyCode::Esc => InputResult::Quit,
        _ => InputResult::Continue,
    }
}
