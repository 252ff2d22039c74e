//! Simulation core: bird physics, obstacles, levels, and the session
//! state machine. Nothing in here touches the terminal.

pub mod bird;
pub mod level;
pub mod obstacle;
pub mod session;

// These re-exports are library API (used by integration tests); inside the
// binary target, which re-declares this module tree privately, they count
// as unused imports.
#[allow(unused_imports)]
pub use bird::Bird;
#[allow(unused_imports)]
pub use level::{LevelProgression, LevelSpec};
#[allow(unused_imports)]
pub use obstacle::{Obstacle, Rect};
#[allow(unused_imports)]
pub use session::{GameMode, GameSession};
