//! Perft (move-path enumeration)

use crate::position::Position;
use crate::types::Move;

/// Number of legal move sequences of length `depth`
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = pos.generate_legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves.iter().map(|&mv| perft(&pos.execute(mv).position, depth - 1)).sum()
}

/// Perft split by root move, in generation order
pub fn perft_divide(pos: &Position, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    pos.generate_legal_moves()
        .iter()
        .map(|&mv| (mv, perft(&pos.execute(mv).position, depth - 1)))
        .collect()
}
