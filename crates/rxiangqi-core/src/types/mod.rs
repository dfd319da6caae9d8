//! Basic types
//!
//! # Dependencies
//!
//! ```text
//! Color, Side
//!   ↓
//! Square
//!   ↓
//! PieceType → Promotion
//!   ↓
//! Move
//! ```

mod color;
mod moves;
mod piece_type;
mod square;

pub use color::{Color, Side};
pub use moves::{Move, MoveList, Promotion};
pub use piece_type::PieceType;
pub use square::Square;
