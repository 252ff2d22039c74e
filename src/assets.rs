//! Visual themes for the terminal renderer.
//!
//! The simulation only carries symbolic [`VisualRef`]s; this module maps
//! them to glyph/color skins. Unknown references log a warning and get a
//! solid placeholder so gameplay is never affected by a missing skin.

use ratatui::style::Color;

/// Symbolic reference to a visual asset. Levels select different skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualRef {
    Bird { level: u32 },
    Obstacle { level: u32 },
    Background { level: u32 },
}

/// A resolved skin: the glyph to repeat and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skin {
    pub glyph: char,
    pub color: Color,
}

/// Fallback skin used when no theme entry exists for a reference.
pub const PLACEHOLDER: Skin = Skin {
    glyph: '█',
    color: Color::Red,
};

/// Resolve a visual reference against the built-in theme table.
pub fn resolve(visual: VisualRef) -> Skin {
    match lookup(visual) {
        Some(skin) => skin,
        None => {
            log::warn!("no theme entry for {:?}, using placeholder", visual);
            PLACEHOLDER
        }
    }
}

fn lookup(visual: VisualRef) -> Option<Skin> {
    let skin = match visual {
        VisualRef::Bird { level: 1 } => Skin {
            glyph: '◆',
            color: Color::Yellow,
        },
        VisualRef::Bird { level: 2 } => Skin {
            glyph: '◆',
            color: Color::LightRed,
        },
        VisualRef::Bird { level: 3 } => Skin {
            glyph: '◆',
            color: Color::LightMagenta,
        },
        VisualRef::Obstacle { level: 1 } => Skin {
            glyph: '█',
            color: Color::Green,
        },
        VisualRef::Obstacle { level: 2 } => Skin {
            glyph: '█',
            color: Color::Gray,
        },
        VisualRef::Obstacle { level: 3 } => Skin {
            glyph: '█',
            color: Color::LightBlue,
        },
        VisualRef::Background { level: 1 } => Skin {
            glyph: ' ',
            color: Color::Cyan,
        },
        VisualRef::Background { level: 2 } => Skin {
            glyph: ' ',
            color: Color::DarkGray,
        },
        VisualRef::Background { level: 3 } => Skin {
            glyph: ' ',
            color: Color::Blue,
        },
        _ => return None,
    };
    Some(skin)
}
