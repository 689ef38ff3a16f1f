//! What Beats Rock? - Terminal Word-Association Game Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod beaters;
pub mod build_info;
pub mod constants;
pub mod game_logic;
pub mod notifications;
pub mod session;

pub use beaters::BeaterTable;
pub use game_logic::{submit_answer, SubmissionResult};
pub use session::GameSession;
