//! Stone colors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two players. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum StoneColor {
    /// First player.
    #[default]
    Black,
    /// Second player.
    White,
}

impl StoneColor {
    /// Both colors in move order.
    pub const ALL: [StoneColor; 2] = [StoneColor::Black, StoneColor::White];

    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            StoneColor::Black => StoneColor::White,
            StoneColor::White => StoneColor::Black,
        }
    }

    /// Parse a color token. Accepts English names (case-insensitive) and the
    /// Chinese tokens emitted by the speech front-end.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        match input {
            "黑子" | "黑棋" | "黑" => return Some(StoneColor::Black),
            "白子" | "白棋" | "白" => return Some(StoneColor::White),
            _ => {}
        }
        match input.to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Some(StoneColor::Black),
            "white" | "w" | "o" => Some(StoneColor::White),
            _ => None,
        }
    }

    /// Single-character symbol used by the text board.
    pub fn symbol(self) -> char {
        match self {
            StoneColor::Black => 'X',
            StoneColor::White => 'O',
        }
    }
}

impl fmt::Display for StoneColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoneColor::Black => write!(f, "Black"),
            StoneColor::White => write!(f, "White"),
        }
    }
}
