//! User-facing notifications derived from submission results.
//!
//! The game logic reports outcomes as [`SubmissionResult`] values; this
//! module turns them into `{title, description, severity}` tuples for the
//! toast banner. Keeping the mapping here means the logic never formats
//! user-visible text and the UI never inspects game rules.

use crate::game_logic::SubmissionResult;
use crate::session::GameSession;

/// How a notification should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A single fire-and-forget message for the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    fn new(title: &str, description: String, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            description,
            severity,
        }
    }
}

/// Build the notification for a submission outcome. `Rejected` produces
/// nothing; empty input is silently ignored.
pub fn notification_for(result: &SubmissionResult) -> Option<Notification> {
    match result {
        SubmissionResult::Rejected => None,
        SubmissionResult::AlreadyUsed { answer } => Some(Notification::new(
            "Already Used!",
            format!("You've already used \"{}\" before. Try something else!", answer),
            Severity::Warning,
        )),
        SubmissionResult::Correct { answer, beaten } => Some(Notification::new(
            "Correct!",
            format!("{} beats {}!", answer, beaten),
            Severity::Success,
        )),
        SubmissionResult::Won {
            answer,
            final_score,
        } => Some(Notification::new(
            "You Win!",
            format!(
                "Nothing beats {}! Final score: {}",
                answer, final_score
            ),
            Severity::Info,
        )),
        SubmissionResult::Lost {
            answer,
            object,
            final_score,
        } => Some(Notification::new(
            "Game Over!",
            format!(
                "{} doesn't beat {}. Final score: {}",
                answer, object, final_score
            ),
            Severity::Error,
        )),
    }
}

/// Notification shown when a new run starts.
pub fn new_game_notification(session: &GameSession) -> Notification {
    Notification::new(
        "New Game Started!",
        format!("What beats a {}?", session.current_object),
        Severity::Info,
    )
}
