//! Scrolling gap obstacles. Obstacles are always created in top/bottom
//! pairs framing a randomized gap, then translated leftward each step and
//! recycled once they leave the field.

use rand::Rng;

use crate::assets::VisualRef;
use crate::constants::*;

/// Axis-aligned rectangle in field pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Strict overlap test: rectangles that merely share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// One obstacle rectangle (half of a top/bottom pair).
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub visual: VisualRef,
}

impl Obstacle {
    /// Scroll leftward by the level's speed.
    pub fn advance(&mut self, speed: i32) {
        self.x -= speed;
    }

    /// True once the right edge has crossed the field's left boundary.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0
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

/// Create one top/bottom pair at horizontal position `x`, with the gap's
/// top edge drawn uniformly from `[GAP_MIN_Y, GAP_MAX_Y)`. The pair covers
/// the full field height minus the fixed gap.
pub fn spawn_pair<R: Rng>(rng: &mut R, x: i32, level: u32) -> (Obstacle, Obstacle) {
    let gap_y = rng.gen_range(GAP_MIN_Y..GAP_MAX_Y);
    let visual = VisualRef::Obstacle { level };

    let top = Obstacle {
        x,
        y: 0,
        width: OBSTACLE_WIDTH,
        height: gap_y,
        visual,
    };
    let bottom = Obstacle {
        x,
        y: gap_y + OBSTACLE_GAP,
        width: OBSTACLE_WIDTH,
        height: FIELD_HEIGHT - (gap_y + OBSTACLE_GAP),
        visual,
    };
    (top, bottom)
}

/// Seed the initial obstacle field: `OBSTACLE_COUNT` pairs at increasing
/// offsets to the right of the field so they scroll in staggered rather
/// than stacked.
pub fn seed_initial<R: Rng>(rng: &mut R, obstacles: &mut Vec<Obstacle>, level: u32) {
    for i in 0..OBSTACLE_COUNT {
        let x = FIELD_WIDTH + i as i32 * OBSTACLE_SPAWN_DISTANCE;
        let (top, bottom) = spawn_pair(rng, x, level);
        obstacles.push(top);
        obstacles.push(bottom);
    }
}
