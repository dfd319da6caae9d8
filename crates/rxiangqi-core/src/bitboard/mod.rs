//! Bitboard module
//!
//! The 90 squares are stored in the low bits of a `u128`.
//!
//! - `Bitboard`: set algebra, iteration, point reflection
//! - precomputed reachability tables for the short-range kinds (general,
//!   advisor, elephant, horse, soldier) and the blocking-square helpers
//!   (`horse_leg`, `elephant_eye`)
//! - orthogonal ray directions for chariot and cannon

mod core;
mod tables;

pub use self::core::{Bitboard, BitboardIter};
pub use self::tables::*;
