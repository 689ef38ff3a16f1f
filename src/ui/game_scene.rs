//! Game screen rendering: the current object card, scores, and the answer
//! input field.

use crate::beaters::BeaterTable;
use crate::session::GameSession;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Shown when an object somehow has no display metadata.
const FALLBACK_EMOJI: &str = "?";

/// Render the game scene.
pub fn render_game(frame: &mut Frame, area: Rect, session: &GameSession, table: &BeaterTable) {
    // Center a fixed-width column so the card doesn't stretch on wide
    // terminals
    let column = centered_column(area, 44);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Title
            Constraint::Length(10), // Object card
            Constraint::Length(3),  // Input field
            Constraint::Length(1),  // Controls
            Constraint::Min(0),     // Filler
        ])
        .split(column);

    render_title(frame, chunks[0], session);
    render_object_card(frame, chunks[1], session, table);
    render_input_field(frame, chunks[2], session);
    render_controls(frame, chunks[3], session);

    if session.game_over {
        render_game_over_overlay(frame, chunks[1], session);
    }
}

fn render_title(frame: &mut Frame, area: Rect, session: &GameSession) {
    let title = Paragraph::new(format!("What Beats {}?", title_case(&session.current_object)))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_object_card(frame: &mut Frame, area: Rect, session: &GameSession, table: &BeaterTable) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let emoji = table
        .get(&session.current_object)
        .map(|entry| entry.emoji.as_str())
        .unwrap_or(FALLBACK_EMOJI);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            emoji,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            title_case(&session.current_object),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.score),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("High Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.high_score),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let card = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(card, inner);
}

fn render_input_field(frame: &mut Frame, area: Rect, session: &GameSession) {
    let (text, style) = if session.game_over {
        (String::new(), Style::default().fg(Color::DarkGray))
    } else if session.pending_input.is_empty() {
        (
            format!("What beats {}?", session.current_object),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            format!("{}_", session.pending_input),
            Style::default().fg(Color::White),
        )
    };

    let border_color = if session.game_over {
        Color::DarkGray
    } else {
        Color::White
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(input, area);
}

fn render_controls(frame: &mut Frame, area: Rect, session: &GameSession) {
    let hint = if session.game_over {
        "[R] Retry    [Q] Quit"
    } else {
        "[Enter] Submit    [Esc] Quit"
    };

    let controls = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(controls, area);
}

/// Render the run-complete overlay on top of the object card.
fn render_game_over_overlay(frame: &mut Frame, area: Rect, session: &GameSession) {
    let width = 26.min(area.width);
    let height = 6.min(area.height);
    let overlay = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines = vec![
        Line::from(Span::styled(
            "Run Complete",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Final Score: {}", session.score)),
        Line::from(format!("High Score: {}", session.high_score)),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Center a column of at most `width` cells inside `area`.
fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y,
        width,
        area.height,
    )
}

/// Uppercase the first character, for display only.
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("rock"), "Rock");
        assert_eq!(title_case("r"), "R");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_centered_column_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let column = centered_column(area, 44);
        assert_eq!(column.width, 20);
        assert_eq!(column.x, 0);

        let column = centered_column(area, 10);
        assert_eq!(column.width, 10);
        assert_eq!(column.x, 5);
    }
}
