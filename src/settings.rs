//! Optional settings file (`skyward.json` in the working directory).
//!
//! Everything here is read-only configuration applied at startup; nothing
//! is written back. A missing or malformed file silently falls back to
//! defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::session::GameSession;

pub const SETTINGS_FILE: &str = "skyward.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Unlock every level at startup (cheat/test mode).
    pub unlock_all_levels: bool,
    /// Start on this level. Applied only if the level is unlocked.
    pub starting_level: u32,
    /// Show the state/score debug line at the bottom of the play scene.
    pub show_debug_hud: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unlock_all_levels: false,
            starting_level: 1,
            show_debug_hud: false,
        }
    }
}

impl Settings {
    /// Load from the given path, falling back to defaults on any error.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("ignoring malformed {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Apply progression-related options to a fresh session. The starting
    /// level only takes effect if it is unlocked, so a bare
    /// `starting_level: 3` without `unlock_all_levels` is ignored.
    pub fn apply<R: rand::Rng>(&self, session: &mut GameSession, rng: &mut R) {
        if self.unlock_all_levels {
            session.progression_mut().unlock_all();
        }
        if self.starting_level != 1
            && session.progression_mut().set_current_level(self.starting_level)
        {
            session.reset_game(rng);
        }
    }
}
