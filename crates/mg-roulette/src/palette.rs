//! Terminal color palettes for the roulette ring

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// Named palette mapping ring distance to terminal colors. Distance 0 is
/// the focus, 1 its neighbors, 2 the dimmed fringe; anything farther
/// renders unstyled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Classic,
    Neon,
    Sunset,
    Mono,
}

impl Palette {
    /// Color of the focused position
    pub fn focus(&self) -> Color {
        match self {
            Palette::Classic => Color::Yellow,
            Palette::Neon => Color::Magenta,
            Palette::Sunset => Color::Red,
            Palette::Mono => Color::White,
        }
    }

    /// Color at ring distance 1
    pub fn near(&self) -> Color {
        match self {
            Palette::Classic => Color::Cyan,
            Palette::Neon => Color::Green,
            Palette::Sunset => Color::Yellow,
            Palette::Mono => Color::Grey,
        }
    }

    /// Color at ring distance 2
    pub fn far(&self) -> Color {
        match self {
            Palette::Classic => Color::DarkGrey,
            Palette::Neon => Color::DarkBlue,
            Palette::Sunset => Color::DarkMagenta,
            Palette::Mono => Color::DarkGrey,
        }
    }
}
