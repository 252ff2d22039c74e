//! Level progression: which level is active, which are unlocked, and the
//! per-level parameter table.

use crate::constants::{SCORE_TO_NEXT_LEVEL, TOTAL_LEVELS};

/// Static per-level parameters. Lookups outside the table fall back to the
/// level-1 row rather than failing.
#[derive(Debug, Clone, Copy)]
pub struct LevelSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Obstacle scroll speed in pixels/step.
    pub speed: i32,
    pub difficulty_multiplier: f64,
}

const LEVEL_TABLE: [LevelSpec; TOTAL_LEVELS as usize] = [
    LevelSpec {
        name: "Forest Valley",
        description: "A peaceful forest with gentle obstacles",
        speed: 3,
        difficulty_multiplier: 1.0,
    },
    LevelSpec {
        name: "Mountain Pass",
        description: "Rocky mountains with challenging terrain",
        speed: 4,
        difficulty_multiplier: 1.3,
    },
    LevelSpec {
        name: "Sky Temple",
        description: "Ancient temple floating in the clouds",
        speed: 5,
        difficulty_multiplier: 1.6,
    },
];

/// Tracks the current level and the unlocked set. Level 1 is always
/// unlocked; nothing is persisted across runs.
#[derive(Debug, Clone)]
pub struct LevelProgression {
    current: u32,
    unlocked: [bool; TOTAL_LEVELS as usize],
}

impl Default for LevelProgression {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelProgression {
    pub fn new() -> Self {
        let mut unlocked = [false; TOTAL_LEVELS as usize];
        unlocked[0] = true;
        Self {
            current: 1,
            unlocked,
        }
    }

    pub fn current_level(&self) -> u32 {
        self.current
    }

    pub fn max_level(&self) -> u32 {
        TOTAL_LEVELS
    }

    pub fn is_max_level(&self) -> bool {
        self.current == TOTAL_LEVELS
    }

    pub fn can_advance(&self) -> bool {
        self.current < TOTAL_LEVELS
    }

    /// Advance to the next level and unlock it. No-op at the max level.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.current += 1;
        self.unlock(self.current);
        true
    }

    /// Jump to a specific level, allowed only if it has been unlocked.
    pub fn set_current_level(&mut self, level: u32) -> bool {
        if self.is_unlocked(level) {
            self.current = level;
            true
        } else {
            false
        }
    }

    pub fn unlock(&mut self, level: u32) {
        if (1..=TOTAL_LEVELS).contains(&level) {
            self.unlocked[(level - 1) as usize] = true;
        }
    }

    pub fn is_unlocked(&self, level: u32) -> bool {
        (1..=TOTAL_LEVELS).contains(&level) && self.unlocked[(level - 1) as usize]
    }

    /// Cheat/test helper: open every level.
    pub fn unlock_all(&mut self) {
        self.unlocked = [true; TOTAL_LEVELS as usize];
    }

    /// Back to level 1 with everything above it locked again.
    pub fn reset_progress(&mut self) {
        *self = Self::new();
    }

    /// Parameter row for the given level, falling back to level 1 for
    /// out-of-table indices.
    pub fn spec(level: u32) -> &'static LevelSpec {
        LEVEL_TABLE
            .get((level.wrapping_sub(1)) as usize)
            .unwrap_or(&LEVEL_TABLE[0])
    }

    pub fn current_spec(&self) -> &'static LevelSpec {
        Self::spec(self.current)
    }

    /// Score needed to leave the given level behind.
    pub fn threshold(level: u32) -> u32 {
        SCORE_TO_NEXT_LEVEL * level
    }

    /// Completion of the current level as a percentage of the per-level
    /// score quota.
    pub fn completion_percentage(&self, score: u32) -> f64 {
        let within = score % SCORE_TO_NEXT_LEVEL;
        (within as f64 * 100.0 / SCORE_TO_NEXT_LEVEL as f64).min(100.0)
    }

    /// Short preview line for the menu ("Next: Mountain Pass" / "Final Level!").
    pub fn next_level_preview(&self) -> String {
        if self.can_advance() {
            format!("Next: {}", Self::spec(self.current + 1).name)
        } else {
            "Final Level!".to_string()
        }
    }

    pub fn unlocked_levels(&self) -> Vec<u32> {
        (1..=TOTAL_LEVELS).filter(|&l| self.is_unlocked(l)).collect()
    }

    pub fn progress_summary(&self) -> String {
        format!(
            "Progress: {}/{} levels unlocked",
            self.unlocked_levels().len(),
            TOTAL_LEVELS
        )
    }
}
