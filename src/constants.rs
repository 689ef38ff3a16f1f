// Game constants
pub const STARTING_OBJECT: &str = "rock";

// Input constants
pub const INPUT_MAX_CHARS: usize = 32;

// UI timing constants
pub const TOAST_DURATION_MS: u64 = 2500;
pub const INPUT_POLL_MS: u64 = 50;
