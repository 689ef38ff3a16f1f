//! Core progression rules: answer checking and run-ending transitions.
//!
//! The one state machine in the game. `submit_answer` is the single write
//! path for a live session; it is synchronous, infallible, and reports its
//! outcome as a [`SubmissionResult`] so the UI layer can render feedback
//! without the logic knowing anything about terminals.

use crate::beaters::BeaterTable;
use crate::session::GameSession;

/// Outcome of a single answer submission. Exactly one is returned per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Empty/whitespace-only input, or the game is already over. No-op.
    Rejected,
    /// The answer was already accepted earlier this run. Not run-ending.
    AlreadyUsed { answer: String },
    /// The answer beats the current object and the chain continues; the
    /// answer is the new current object.
    Correct { answer: String, beaten: String },
    /// The answer beats the current object but nothing in the table beats
    /// it, so the chain ends. Counts as a win; the point is still scored.
    Won { answer: String, final_score: u32 },
    /// The answer does not beat the current object. Run over.
    Lost {
        answer: String,
        object: String,
        final_score: u32,
    },
}

/// Check the player's answer against the current object and advance the
/// session.
///
/// The raw text is trimmed and lowercased before any comparison. Score only
/// ever increases within a run, and `game_over` is monotonic until
/// [`GameSession::reset`].
pub fn submit_answer(
    session: &mut GameSession,
    table: &BeaterTable,
    raw_text: &str,
) -> SubmissionResult {
    // Cleared on every path, including rejections.
    session.pending_input.clear();

    if session.game_over {
        return SubmissionResult::Rejected;
    }

    let answer = raw_text.trim().to_lowercase();
    if answer.is_empty() {
        return SubmissionResult::Rejected;
    }

    if session.used_answers.contains(&answer) {
        return SubmissionResult::AlreadyUsed { answer };
    }

    let object = session.current_object.clone();
    if !table.beats(&object, &answer) {
        session.mark_game_over();
        return SubmissionResult::Lost {
            answer,
            object,
            final_score: session.score,
        };
    }

    // Winning move: score it and see whether the chain can continue.
    session.used_answers.insert(answer.clone());
    session.score += 1;
    if session.score > session.high_score {
        session.high_score = session.score;
    }

    if table.contains(&answer) {
        session.current_object = answer.clone();
        SubmissionResult::Correct {
            answer,
            beaten: object,
        }
    } else {
        session.mark_game_over();
        SubmissionResult::Won {
            answer,
            final_score: session.score,
        }
    }
}
