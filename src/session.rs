//! Per-run session state for the guessing game.
//!
//! One `GameSession` exists per process. It is mutated only through
//! [`crate::game_logic`] and its own `reset`; the UI reads it but never
//! writes it.

use crate::constants::STARTING_OBJECT;
use std::collections::HashSet;

/// All mutable game state for a single play session.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// The object the player must beat. Always a key in the beater table
    /// while the game is live; frozen once `game_over` is set.
    pub current_object: String,
    /// Points scored this run.
    pub score: u32,
    /// Best score seen this process. Survives `reset`.
    pub high_score: u32,
    /// Accepted answers this run; each may only be used once.
    pub used_answers: HashSet<String>,
    /// Set when the run ends, cleared only by `reset`.
    pub game_over: bool,
    /// Raw text the player is typing. Cleared on every submission.
    pub pending_input: String,
}

impl GameSession {
    /// Create a fresh session at the starting object.
    pub fn new() -> Self {
        Self {
            current_object: STARTING_OBJECT.to_string(),
            score: 0,
            high_score: 0,
            used_answers: HashSet::new(),
            game_over: false,
            pending_input: String::new(),
        }
    }

    /// Start a new run. Everything resets except `high_score`, which is the
    /// cross-run record.
    pub fn reset(&mut self) {
        self.current_object = STARTING_OBJECT.to_string();
        self.score = 0;
        self.used_answers.clear();
        self.game_over = false;
        self.pending_input.clear();
    }

    /// End the run, folding the final score into the high score first.
    pub fn mark_game_over(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.game_over = true;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_initial_values() {
        let session = GameSession::new();
        assert_eq!(session.current_object, "rock");
        assert_eq!(session.score, 0);
        assert_eq!(session.high_score, 0);
        assert!(session.used_answers.is_empty());
        assert!(!session.game_over);
        assert!(session.pending_input.is_empty());
    }

    #[test]
    fn test_reset_restores_start_state() {
        let mut session = GameSession::new();
        session.current_object = "scissors".to_string();
        session.score = 4;
        session.used_answers.insert("paper".to_string());
        session.game_over = true;
        session.pending_input = "met".to_string();

        session.reset();

        assert_eq!(session.current_object, "rock");
        assert_eq!(session.score, 0);
        assert!(session.used_answers.is_empty());
        assert!(!session.game_over);
        assert!(session.pending_input.is_empty());
    }

    #[test]
    fn test_reset_keeps_high_score() {
        let mut session = GameSession::new();
        session.score = 7;
        session.mark_game_over();
        assert_eq!(session.high_score, 7);

        session.reset();
        assert_eq!(session.high_score, 7);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_mark_game_over_folds_score() {
        let mut session = GameSession::new();
        session.score = 3;
        session.mark_game_over();
        assert!(session.game_over);
        assert_eq!(session.high_score, 3);

        // A worse run does not lower the record
        session.reset();
        session.score = 1;
        session.mark_game_over();
        assert_eq!(session.high_score, 3);
    }
}
