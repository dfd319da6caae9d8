//! Piece kinds

use serde::{Deserialize, Serialize};

/// Piece kinds (7 types)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceType {
    General = 0,  // K
    Advisor = 1,  // A
    Elephant = 2, // B
    Horse = 3,    // N
    Chariot = 4,  // R
    Cannon = 5,   // C
    Soldier = 6,  // P
}

impl PieceType {
    pub const NUM: usize = 7;

    pub const ALL: [PieceType; 7] = [
        PieceType::General,
        PieceType::Advisor,
        PieceType::Elephant,
        PieceType::Horse,
        PieceType::Chariot,
        PieceType::Cannon,
        PieceType::Soldier,
    ];

    /// Kinds tracked in per-kind bitboards (the general is tracked by square)
    pub const NON_GENERAL: [PieceType; 6] = [
        PieceType::Advisor,
        PieceType::Elephant,
        PieceType::Horse,
        PieceType::Chariot,
        PieceType::Cannon,
        PieceType::Soldier,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<PieceType> {
        match index {
            0 => Some(PieceType::General),
            1 => Some(PieceType::Advisor),
            2 => Some(PieceType::Elephant),
            3 => Some(PieceType::Horse),
            4 => Some(PieceType::Chariot),
            5 => Some(PieceType::Cannon),
            6 => Some(PieceType::Soldier),
            _ => None,
        }
    }

    /// FEN letter (uppercase)
    pub const fn to_char(self) -> char {
        match self {
            PieceType::General => 'K',
            PieceType::Advisor => 'A',
            PieceType::Elephant => 'B',
            PieceType::Horse => 'N',
            PieceType::Chariot => 'R',
            PieceType::Cannon => 'C',
            PieceType::Soldier => 'P',
        }
    }

    /// Parse a FEN letter, either case. `E` and `H` are accepted as aliases
    /// for elephant and horse.
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_uppercase() {
            'K' => Some(PieceType::General),
            'A' => Some(PieceType::Advisor),
            'B' | 'E' => Some(PieceType::Elephant),
            'N' | 'H' => Some(PieceType::Horse),
            'R' => Some(PieceType::Chariot),
            'C' => Some(PieceType::Cannon),
            'P' => Some(PieceType::Soldier),
            _ => None,
        }
    }
}
