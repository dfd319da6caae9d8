//! Terminal-condition queries

use serde::{Deserialize, Serialize};

use super::Position;
use crate::types::{Color, PieceType};

/// Outcome of a position as far as the rules can tell without search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Undecided,
    RedWon,
    BlackWon,
    Draw,
}

impl GameResult {
    /// Win for `color`
    pub const fn win_for(color: Color) -> GameResult {
        match color {
            Color::Red => GameResult::RedWon,
            Color::Black => GameResult::BlackWon,
        }
    }
}

impl Position {
    /// Whether either side still has material that could deliver mate.
    ///
    /// Any chariot, horse or soldier is enough. Without them a cannon only
    /// counts when some other non-general piece exists to serve as a screen.
    /// Advisors and elephants alone can never attack the enemy general.
    pub fn has_sufficient_material(&self) -> bool {
        let attackers = self.pieces(PieceType::Chariot)
            | self.pieces(PieceType::Horse)
            | self.pieces(PieceType::Soldier);
        if !attackers.is_empty() {
            return true;
        }

        if self.pieces(PieceType::Cannon).is_empty() {
            return false;
        }
        let non_generals = self.occupied() - self.pieces(PieceType::General);
        non_generals.count() >= 2
    }

    /// Result decidable from this position alone.
    ///
    /// A side without a legal move loses (checkmate and stalemate alike).
    pub fn game_result(&self) -> GameResult {
        if self.generate_legal_moves().is_empty() {
            return GameResult::win_for(self.side_to_move().opponent());
        }
        if !self.has_sufficient_material() {
            return GameResult::Draw;
        }
        GameResult::Undecided
    }
}
