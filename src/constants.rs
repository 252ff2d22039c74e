//! Game-wide constants. Field geometry and physics use fixed pixel units;
//! the UI scales them to whatever terminal rect is available.

// Play field (pixel units, scaled by the UI)
pub const FIELD_WIDTH: i32 = 800;
pub const FIELD_HEIGHT: i32 = 600;

// Bird
pub const BIRD_WIDTH: i32 = 50;
pub const BIRD_HEIGHT: i32 = 50;
pub const BIRD_START_X: i32 = 100;
pub const BIRD_START_Y: i32 = FIELD_HEIGHT / 2;

// Physics (per simulation step)
pub const GRAVITY: i32 = 2;
pub const JUMP_STRENGTH: i32 = 10;
pub const TERMINAL_VELOCITY: i32 = 15;

// Obstacles
pub const OBSTACLE_WIDTH: i32 = 80;
pub const OBSTACLE_GAP: i32 = 200;
pub const OBSTACLE_SPAWN_DISTANCE: i32 = 300;
pub const OBSTACLE_COUNT: u32 = 4;
pub const SPAWN_DELAY_MS: u64 = 2000;

// Gap top edge is drawn uniformly from [GAP_MIN_Y, GAP_MAX_Y).
pub const GAP_MIN_Y: i32 = 100;
pub const GAP_MAX_Y: i32 = FIELD_HEIGHT - 200;

// Levels
pub const TOTAL_LEVELS: u32 = 3;
pub const SCORE_TO_NEXT_LEVEL: u32 = 10;

// Timing: 60 simulation steps per second
pub const STEPS_PER_SECOND: u64 = 60;
pub const STEP_MS: u64 = 1000 / STEPS_PER_SECOND;

// Input poll timeout for the main loop
pub const INPUT_POLL_MS: u64 = 5;
