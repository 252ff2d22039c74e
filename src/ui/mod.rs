//! Scene rendering. Each scene is a free `render_*` function that reads
//! the session and draws into a frame; nothing here mutates game state.

pub mod game_over_scene;
pub mod menu_scene;
pub mod play_scene;

use ratatui::Frame;

use crate::game::session::{GameMode, GameSession};
use crate::settings::Settings;

/// Draw the screen for the session's current mode.
pub fn draw(frame: &mut Frame, session: &GameSession, settings: &Settings) {
    let area = frame.size();
    match session.mode() {
        GameMode::MainMenu => menu_scene::render_menu(frame, area, session),
        GameMode::Playing | GameMode::LevelTransition => {
            play_scene::render_play(frame, area, session, settings);
            if session.mode() == GameMode::LevelTransition {
                play_scene::render_transition_overlay(frame, area, session);
            }
        }
        GameMode::GameOver => {
            // The frozen field stays visible under the overlay
            play_scene::render_play(frame, area, session, settings);
            game_over_scene::render_game_over(frame, area, session);
        }
    }
}
