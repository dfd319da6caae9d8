//! Error types
//!
//! Setup strings and move text are the only fallible inputs of the engine.
//! `PositionError` reports a broken storage invariant found by
//! `Position::validate`.

use crate::types::{PieceType, Side, Square};

/// Rejected position, move or square text
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed position (FEN) string
    #[error("Invalid position string '{text}': {reason}")]
    InvalidPosition { text: String, reason: String },

    /// Malformed move text
    #[error("Invalid move: {0}")]
    InvalidMove(String),

    /// Malformed square name
    #[error("Invalid square notation: {0}")]
    InvalidSquare(String),
}

impl ParseError {
    /// The text that was rejected
    pub fn text(&self) -> &str {
        match self {
            ParseError::InvalidPosition { text, .. } => text,
            ParseError::InvalidMove(text) | ParseError::InvalidSquare(text) => text,
        }
    }
}

/// Storage invariant violated by a position
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    #[error("sides overlap")]
    SidesOverlap,

    #[error("{0:?} set outside occupancy")]
    KindOutsideOccupancy(PieceType),

    #[error("{0:?} set overlaps another kind")]
    KindOverlap(PieceType),

    #[error("{side:?} general on {square} not in occupancy")]
    GeneralNotOccupied { side: Side, square: Square },

    #[error("{side:?} general on {square} also in a kind set")]
    GeneralInKindSet { side: Side, square: Square },

    #[error("occupied square without a kind")]
    UntypedSquare,
}
