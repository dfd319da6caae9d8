//! Square (0-89)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Square on the 10x9 board
///
/// Layout: row-major from the mover's back rank.
/// a0 = 0, b0 = 1, ..., i0 = 8, a1 = 9, ..., i9 = 89.
/// Row 0 is the back rank of the side the position is expressed for,
/// column 0 is file `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// Number of squares
    pub const NUM: usize = 90;
    pub const ROWS: u8 = 10;
    pub const COLS: u8 = 9;

    /// a0
    pub const A0: Square = Square(0);
    /// e0, the Red general's home square
    pub const E0: Square = Square(4);
    /// e9, the Black general's home square
    pub const E9: Square = Square(85);
    /// i9
    pub const I9: Square = Square(89);

    /// Square from row (0-9) and column (0-8)
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < Self::ROWS && col < Self::COLS);
        Square(row * Self::COLS + col)
    }

    /// Bounds-checked construction from signed coordinates
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Square> {
        if Self::is_valid(row, col) {
            Some(Square(row as u8 * Self::COLS + col as u8))
        } else {
            None
        }
    }

    /// Whether the coordinates lie on the board
    #[inline]
    pub const fn is_valid(row: i8, col: i8) -> bool {
        row >= 0 && col >= 0 && row < Self::ROWS as i8 && col < Self::COLS as i8
    }

    /// Row, 0 = mover's back rank
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::COLS
    }

    /// Column, 0 = file a
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Self::COLS
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// From u8 (range checked)
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Square> {
        if (n as usize) < Self::NUM {
            Some(Square(n))
        } else {
            None
        }
    }

    /// Point reflection through the board centre (row → 9-row, col → 8-col)
    #[inline]
    pub const fn mirror(self) -> Square {
        Square(89 - self.0)
    }

    /// Square reached by stepping (drow, dcol), if still on the board
    #[inline]
    pub const fn offset(self, drow: i8, dcol: i8) -> Option<Square> {
        Self::try_new(self.row() as i8 + drow, self.col() as i8 + dcol)
    }

    /// Whether the square is inside either palace (3x3, files d-f)
    #[inline]
    pub const fn in_palace(self) -> bool {
        let row = self.row();
        let col = self.col();
        col >= 3 && col <= 5 && (row <= 2 || row >= 7)
    }

    /// Whether the square is on the mover's half of the board (before the river)
    #[inline]
    pub const fn on_our_half(self) -> bool {
        self.row() <= 4
    }

    /// Square from its name ("e4"). Lowercase file letter a-i, row digit 0-9.
    pub fn from_name(name: &str) -> Option<Square> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].wrapping_sub(b'a');
        let row = bytes[1].wrapping_sub(b'0');
        if row < Self::ROWS && col < Self::COLS {
            Some(Square::new(row, col))
        } else {
            None
        }
    }

    /// All squares in ascending order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }
}

/// Display as the square name ("e4")
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        let row = (b'0' + self.row()) as char;
        write!(f, "{file}{row}")
    }
}

impl std::str::FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_name(s).ok_or_else(|| ParseError::InvalidSquare(s.to_string()))
    }
}

impl TryFrom<u8> for Square {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Square::from_u8(value).ok_or_else(|| ParseError::InvalidSquare(value.to_string()))
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq.0
    }
}
