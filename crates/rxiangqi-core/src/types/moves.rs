//! Move representation

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{PieceType, Square};
use crate::movegen::action_index;
use crate::ParseError;

/// Move list without heap allocation for ordinary positions
/// (a Xiangqi position rarely has more than 120 pseudo-legal moves)
pub type MoveList = SmallVec<[Move; 128]>;

/// Promotion tag
///
/// Standard Xiangqi never promotes; the tag keeps the packed index layout
/// `promotion * 8100 + from * 90 + to` total over every kind a variant could
/// promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Promotion {
    #[default]
    None = 0,
    Advisor = 1,
    Elephant = 2,
    Horse = 3,
    Chariot = 4,
    Cannon = 5,
    Soldier = 6,
}

impl Promotion {
    pub const NUM: usize = 7;

    #[inline]
    pub const fn from_u8(n: u8) -> Option<Promotion> {
        match n {
            0 => Some(Promotion::None),
            1 => Some(Promotion::Advisor),
            2 => Some(Promotion::Elephant),
            3 => Some(Promotion::Horse),
            4 => Some(Promotion::Chariot),
            5 => Some(Promotion::Cannon),
            6 => Some(Promotion::Soldier),
            _ => None,
        }
    }

    /// Kind the piece becomes, if any
    pub const fn piece_type(self) -> Option<PieceType> {
        match self {
            Promotion::None => None,
            Promotion::Advisor => Some(PieceType::Advisor),
            Promotion::Elephant => Some(PieceType::Elephant),
            Promotion::Horse => Some(PieceType::Horse),
            Promotion::Chariot => Some(PieceType::Chariot),
            Promotion::Cannon => Some(PieceType::Cannon),
            Promotion::Soldier => Some(PieceType::Soldier),
        }
    }

    /// Promotion tag for a kind (the general cannot be promoted to)
    pub const fn from_piece_type(pt: PieceType) -> Option<Promotion> {
        match pt {
            PieceType::General => None,
            PieceType::Advisor => Some(Promotion::Advisor),
            PieceType::Elephant => Some(Promotion::Elephant),
            PieceType::Horse => Some(Promotion::Horse),
            PieceType::Chariot => Some(Promotion::Chariot),
            PieceType::Cannon => Some(Promotion::Cannon),
            PieceType::Soldier => Some(Promotion::Soldier),
        }
    }

    /// Suffix letter in move text
    pub fn to_char(self) -> Option<char> {
        self.piece_type().map(|pt| pt.to_char().to_ascii_lowercase())
    }

    pub fn from_char(c: char) -> Option<Promotion> {
        PieceType::from_char(c).and_then(Promotion::from_piece_type)
    }
}

/// Move representation
///
/// Encoded move data (32-bit):
/// - bits 0-6: destination square (0-89)
/// - bits 7-13: source square (0-89)
/// - bits 14-16: promotion tag
/// - bit 17: capture marker (set by the generator)
///
/// Equality, ordering and hashing only look at bits 0-16.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Move {
    data: u32,
}

const TO_MASK: u32 = 0x7F;
const FROM_SHIFT: u32 = 7;
const PROMOTION_SHIFT: u32 = 14;
const CAPTURE_FLAG: u32 = 1 << 17;
const KEY_MASK: u32 = CAPTURE_FLAG - 1;

impl Move {
    /// Null move (a0a0, never generated)
    pub const NULL: Move = Move { data: 0 };

    /// Size of the packed index space: 7 promotion tags x 90 x 90
    pub const PACKED_RANGE: usize = Promotion::NUM * Square::NUM * Square::NUM;

    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Self::with_promotion(from, to, Promotion::None)
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: Promotion) -> Move {
        Move {
            data: to.raw() as u32
                | (from.raw() as u32) << FROM_SHIFT
                | (promotion as u32) << PROMOTION_SHIFT,
        }
    }

    /// Move marked as capturing
    #[inline]
    pub const fn capture(from: Square, to: Square) -> Move {
        Move {
            data: Self::new(from, to).data | CAPTURE_FLAG,
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        match Square::from_u8(((self.data >> FROM_SHIFT) & TO_MASK) as u8) {
            Some(sq) => sq,
            None => Square::A0,
        }
    }

    #[inline]
    pub const fn to(self) -> Square {
        match Square::from_u8((self.data & TO_MASK) as u8) {
            Some(sq) => sq,
            None => Square::A0,
        }
    }

    #[inline]
    pub const fn promotion(self) -> Promotion {
        match Promotion::from_u8(((self.data >> PROMOTION_SHIFT) & 0x7) as u8) {
            Some(p) => p,
            None => Promotion::None,
        }
    }

    /// Whether the generator marked this move as a capture
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.data & CAPTURE_FLAG != 0
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.data & KEY_MASK == 0
    }

    /// (from, to, promotion) without auxiliary flags
    #[inline]
    const fn key(self) -> u32 {
        self.data & KEY_MASK
    }

    /// Same move seen from the other side of the board
    #[inline]
    pub const fn mirror(self) -> Move {
        Move {
            data: (self.data & !(TO_MASK | TO_MASK << FROM_SHIFT))
                | self.to().mirror().raw() as u32
                | (self.from().mirror().raw() as u32) << FROM_SHIFT,
        }
    }

    /// `promotion * 90 * 90 + from * 90 + to`, a bijection onto
    /// `[0, PACKED_RANGE)`
    #[inline]
    pub const fn packed_index(self) -> u16 {
        (self.promotion() as usize * Square::NUM * Square::NUM
            + self.from().index() * Square::NUM
            + self.to().index()) as u16
    }

    /// Inverse of `packed_index`
    pub fn from_packed_index(index: u16) -> Option<Move> {
        let index = index as usize;
        if index >= Self::PACKED_RANGE {
            return None;
        }
        let per_promotion = Square::NUM * Square::NUM;
        let promotion = Promotion::from_u8((index / per_promotion) as u8)?;
        let rest = index % per_promotion;
        let from = Square::from_u8((rest / Square::NUM) as u8)?;
        let to = Square::from_u8((rest % Square::NUM) as u8)?;
        Some(Move::with_promotion(from, to, promotion))
    }

    /// Dense policy index in `[0, NUM_ACTIONS)`
    ///
    /// Only geometrically realizable moves have an index; asking for any
    /// other move is a caller bug.
    #[inline]
    pub fn network_index(self) -> u16 {
        action_index::action_of(self)
    }

    /// Inverse of `network_index`
    #[inline]
    pub fn from_network_index(index: u16) -> Option<Move> {
        action_index::move_of(index)
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::NULL
    }
}

impl PartialEq for Move {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Move {
    /// Orders by packed index
    fn cmp(&self, other: &Self) -> Ordering {
        self.packed_index().cmp(&other.packed_index())
    }
}

/// Text form, squares as stored ("h2e2")
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(c) = self.promotion().to_char() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_capture() {
            write!(f, "Move({self}x)")
        } else {
            write!(f, "Move({self})")
        }
    }
}

impl std::str::FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::notation::parse_move(s, false)
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> String {
        mv.to_string()
    }
}

impl TryFrom<String> for Move {
    type Error = ParseError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}
