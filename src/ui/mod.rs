pub mod game_scene;
pub mod toast;

use crate::beaters::BeaterTable;
use crate::session::GameSession;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use toast::ToastState;

/// Main UI drawing function: optional toast banner at the top, the game
/// scene below.
pub fn draw_ui(frame: &mut Frame, session: &GameSession, table: &BeaterTable, toasts: &ToastState) {
    let size = frame.size();

    if let Some(note) = toasts.current() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(size);

        toast::render_toast(frame, chunks[0], note);
        game_scene::render_game(frame, chunks[1], session, table);
    } else {
        game_scene::render_game(frame, size, session, table);
    }
}
