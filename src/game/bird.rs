//! The bird: a kinematic body driven by gravity and discrete jump impulses.

use crate::assets::VisualRef;
use crate::constants::*;
use crate::game::obstacle::Rect;

/// The player-controlled body. Position and velocity are integer pixel
/// units, integrated once per simulation step.
#[derive(Debug, Clone)]
pub struct Bird {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Vertical velocity in pixels/step. Positive is downward.
    pub velocity: i32,
    /// Level-dependent skin, resolved to glyphs/colors by the UI.
    pub visual: VisualRef,
}

impl Bird {
    /// Create a bird at the fixed start position for the given level's skin.
    pub fn new(level: u32) -> Self {
        Self {
            x: BIRD_START_X,
            y: BIRD_START_Y,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
            velocity: 0,
            visual: VisualRef::Bird { level },
        }
    }

    /// Apply a jump impulse. Any downward motion is discarded first, so a
    /// jump always leaves the bird rising at exactly `JUMP_STRENGTH`.
    pub fn jump(&mut self) {
        self.velocity = -JUMP_STRENGTH;
    }

    /// Integrate one step of gravity: accelerate downward up to terminal
    /// velocity, then translate.
    pub fn fall(&mut self) {
        self.velocity = (self.velocity + GRAVITY).min(TERMINAL_VELOCITY);
        self.y += self.velocity;
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bird_at_start_position() {
        let bird = Bird::new(1);
        assert_eq!(bird.x, BIRD_START_X);
        assert_eq!(bird.y, BIRD_START_Y);
        assert_eq!(bird.velocity, 0);
        assert_eq!(bird.visual, VisualRef::Bird { level: 1 });
    }

    #[test]
    fn test_jump_overrides_any_prior_velocity() {
        for prior in [-20, 0, 15] {
            let mut bird = Bird::new(1);
            bird.velocity = prior;
            bird.jump();
            assert_eq!(bird.velocity, -JUMP_STRENGTH, "prior velocity {}", prior);
        }
    }

    #[test]
    fn test_fall_accelerates_then_caps_at_terminal() {
        let mut bird = Bird::new(1);
        let mut last_y = bird.y;
        for _ in 0..100 {
            bird.fall();
            assert!(bird.velocity <= TERMINAL_VELOCITY);
            assert!(bird.y > last_y);
            last_y = bird.y;
        }
        assert_eq!(bird.velocity, TERMINAL_VELOCITY);

        // Once terminal, position advances by a constant amount per step
        let before = bird.y;
        bird.fall();
        assert_eq!(bird.y, before + TERMINAL_VELOCITY);
    }

    #[test]
    fn test_jump_then_gravity_pulls_back() {
        let mut bird = Bird::new(1);
        bird.jump();
        bird.fall();
        assert_eq!(bird.velocity, -JUMP_STRENGTH + GRAVITY);
        assert_eq!(bird.y, BIRD_START_Y - JUMP_STRENGTH + GRAVITY);
    }
}
