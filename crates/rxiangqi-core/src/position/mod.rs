//! Position module
//!
//! A Xiangqi position is always stored from the point of view of the side to
//! move: "mine" is the mover, row 0 is the mover's back rank. Handing the
//! turn over mirrors the whole position instead of threading a color through
//! the rules code; `mirrored` records that Black is to move.
//!
//! - `Position`: occupancy per side, one set per non-general kind, general
//!   squares, perspective flag
//! - FEN parsing and output (`fen`)
//! - attack queries and the flying-general rule (`attack`)
//! - legality filtering and move execution (`legality`)
//! - position hashing (`hash`)
//! - terminal-condition queries (`material`)
//!
//! The occupancy sets, kind sets and general squares are only updated
//! through `put_piece` / `remove_piece` / `apply_move` / `mirror`, which keep
//! them consistent with each other.

mod attack;
mod fen;
mod hash;
mod legality;
mod material;
mod pos;

pub use fen::{FenCounters, START_FEN};
pub use hash::hash_cat;
pub use legality::MoveExecution;
pub use material::GameResult;
pub use pos::Position;
