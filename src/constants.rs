pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Gravity interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1000;

pub const POINTS_PER_LINE: u32 = 100;

// Quiz settings
pub const DEFAULT_QUIZ_PATH: &str = "quiz.json";
pub const DEFAULT_POOL_SIZE: usize = 10_000;
pub const BONUS_THRESHOLD: i32 = 4; // Net correct answers that earn an I piece
pub const MAX_OPTIONS: usize = 10;  // Selectable with keys 1-9 and 0
