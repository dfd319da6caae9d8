//! Colors and perspective-relative sides

use serde::{Deserialize, Serialize};

/// Absolute color. Red moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    pub const NUM: usize = 2;

    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// FEN side-to-move token
    pub const fn fen_token(self) -> char {
        match self {
            Color::Red => 'w',
            Color::Black => 'b',
        }
    }

    /// Parse a FEN side-to-move token ("w"/"r" for Red, "b" for Black)
    pub fn from_fen_token(token: &str) -> Option<Color> {
        match token {
            "w" | "W" | "r" | "R" => Some(Color::Red),
            "b" | "B" => Some(Color::Black),
            _ => None,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

/// Side relative to the player to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    /// The side to move
    Ours = 0,
    /// The opponent
    Theirs = 1,
}

impl Side {
    pub const NUM: usize = 2;

    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Ours => Side::Theirs,
            Side::Theirs => Side::Ours,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}
