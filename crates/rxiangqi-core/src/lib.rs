//! # rxiangqi-core
//!
//! Xiangqi rules engine used by the search and self-play layers.
//!
//! ## Modules
//!
//! - `types`: basic types (Square, PieceType, Color, Side, Move)
//! - `bitboard`: 90-square bitboards and precomputed reachability tables
//! - `position`: board state, FEN setup, mirroring, hashing, check detection
//! - `movegen`: pseudo-legal generation, legality filtering, perft,
//!   neural-network action indexing
//! - `notation`: square and move text
//! - `init`: one-shot table initialization
//!
//! Positions are always expressed from the point of view of the side to move
//! ("ours"). After a move is applied the position is mirrored so that the
//! opponent becomes "ours"; the `mirrored` flag remembers whether Black is
//! the side to move.
//!
//! ```
//! use rxiangqi_core::Position;
//!
//! let pos = Position::startpos();
//! assert_eq!(pos.generate_legal_moves().len(), 44);
//! ```

pub mod bitboard;
mod error;
pub mod init;
pub mod movegen;
pub mod notation;
pub mod position;
pub mod types;

pub use bitboard::Bitboard;
pub use error::{ParseError, PositionError};
pub use movegen::{perft, NUM_ACTIONS};
pub use position::{FenCounters, GameResult, MoveExecution, Position, START_FEN};
pub use types::{Color, Move, MoveList, PieceType, Promotion, Side, Square};
