mod beaters;
mod build_info;
mod constants;
mod game_logic;
mod input;
mod notifications;
mod session;
mod ui;

use beaters::BeaterTable;
use constants::INPUT_POLL_MS;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::InputResult;
use ratatui::{backend::CrosstermBackend, Terminal};
use session::GameSession;
use std::io;
use std::time::Duration;
use ui::toast::ToastState;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "whatbeats {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("What Beats Rock? - Terminal Word-Association Game\n");
                println!("Usage: whatbeats [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'whatbeats --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Game state
    let table = BeaterTable::standard();
    let mut game_session = GameSession::new();
    let mut toasts = ToastState::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|frame| {
            ui::draw_ui(frame, &game_session, &table, &toasts);
        })?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match input::handle_game_key(key_event, &mut game_session, &table, &mut toasts) {
                    InputResult::Continue => {}
                    InputResult::Quit => break,
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
