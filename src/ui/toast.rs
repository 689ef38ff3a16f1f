//! Transient notification banner.
//!
//! One toast at a time; a new one replaces the current one and the banner
//! disappears after a fixed duration.

use crate::constants::TOAST_DURATION_MS;
use crate::notifications::{Notification, Severity};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Holds the currently displayed notification, if any.
pub struct ToastState {
    active: Option<(Notification, Instant)>,
}

impl ToastState {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Show a notification, replacing whatever is currently on screen.
    pub fn push(&mut self, note: Notification) {
        self.active = Some((note, Instant::now()));
    }

    /// The notification to display, or `None` once it has expired.
    pub fn current(&self) -> Option<&Notification> {
        let (note, shown_at) = self.active.as_ref()?;
        if shown_at.elapsed() < Duration::from_millis(TOAST_DURATION_MS) {
            Some(note)
        } else {
            None
        }
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    }
}

/// Render the toast banner into `area` (expects a height of 3).
pub fn render_toast(frame: &mut Frame, area: Rect, note: &Notification) {
    let color = severity_color(note.severity);

    let block = Block::default()
        .title(format!(" {} ", note.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Paragraph::new(Line::from(note.description.clone()))
        .style(Style::default().fg(Color::White));
    frame.render_widget(text, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> Notification {
        Notification {
            title: "Correct!".to_string(),
            description: "paper beats rock!".to_string(),
            severity: Severity::Success,
        }
    }

    #[test]
    fn test_fresh_toast_is_visible() {
        let mut toasts = ToastState::new();
        assert!(toasts.current().is_none());

        toasts.push(note());
        assert_eq!(toasts.current().unwrap().title, "Correct!");
    }

    #[test]
    fn test_push_replaces_active_toast() {
        let mut toasts = ToastState::new();
        toasts.push(note());

        let mut second = note();
        second.title = "Game Over!".to_string();
        toasts.push(second);

        assert_eq!(toasts.current().unwrap().title, "Game Over!");
    }
}
