//! Skyward - a multi-level Flappy Bird for the terminal.
//!
//! Exposes the simulation core and its collaborators for integration
//! tests; the binary in `main.rs` wires them to a ratatui terminal.

// Allow dead code in library - some accessors are only used by the binary
#![allow(dead_code)]

pub mod assets;
pub mod build_info;
pub mod constants;
pub mod game;
pub mod input;
pub mod settings;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;

pub use game::{GameMode, GameSession};
