//! Key handling: raw crossterm events become UI-agnostic [`Command`]s the
//! session consumes. The mapping depends on the current mode, mirroring
//! the per-state key bindings of the menus.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::game::session::GameMode;

/// Input commands consumed by the gameplay session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartGame,
    JumpPressed,
    JumpReleased,
    ReturnToMenu,
    Restart,
    GoToMenu,
}

/// App-level action that never reaches the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
}

/// Result of translating one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translated {
    Game(Command),
    App(AppAction),
    None,
}

/// Translate a key event for the given mode.
///
/// Terminals that report key releases (kitty keyboard protocol) give us
/// real press/release pairs for the edge-triggered jump; for the rest the
/// caller synthesizes a release after each press.
pub fn translate(key: KeyEvent, mode: GameMode) -> Translated {
    if key.kind == KeyEventKind::Release {
        return match (mode, key.code) {
            (GameMode::Playing, KeyCode::Char(' ')) => Translated::Game(Command::JumpReleased),
            _ => Translated::None,
        };
    }
    if key.kind != KeyEventKind::Press {
        return Translated::None;
    }

    match (mode, key.code) {
        (GameMode::MainMenu, KeyCode::Char(' ') | KeyCode::Enter) => {
            Translated::Game(Command::StartGame)
        }
        (GameMode::MainMenu, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) => {
            Translated::App(AppAction::Quit)
        }
        (GameMode::Playing, KeyCode::Char(' ')) => Translated::Game(Command::JumpPressed),
        (GameMode::Playing, KeyCode::Esc) => Translated::Game(Command::ReturnToMenu),
        (GameMode::GameOver, KeyCode::Char('r') | KeyCode::Char('R')) => {
            Translated::Game(Command::Restart)
        }
        (GameMode::GameOver, KeyCode::Char('m') | KeyCode::Char('M')) => {
            Translated::Game(Command::GoToMenu)
        }
        _ => Translated::None,
    }
}
