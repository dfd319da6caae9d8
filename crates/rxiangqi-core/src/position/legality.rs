//! Legality filtering and move execution

use super::Position;
use crate::movegen::generate_pseudolegal;
use crate::types::{Move, MoveList, Square};

/// A legal move together with the position it leads to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveExecution {
    pub mv: Move,
    /// Resulting position, already mirrored to the next mover's view
    pub position: Position,
    /// The move captured a piece (no earlier position can repeat)
    pub irreversible: bool,
}

/// Whether moving a piece from or to `sq` could change which lines reach the
/// general: same row, same file, or a diagonal neighbour (horse legs)
#[inline]
fn near_general(general: Square, sq: Square) -> bool {
    let dr = (sq.row() as i8 - general.row() as i8).abs();
    let dc = (sq.col() as i8 - general.col() as i8).abs();
    dr == 0 || dc == 0 || (dr == 1 && dc == 1)
}

impl Position {
    /// Whether a pseudo-legal move keeps the mover's general safe
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_legal_move_with(mv, self.is_in_check())
    }

    /// `is_legal_move` with the check status already known
    pub fn is_legal_move_with(&self, mv: Move, in_check: bool) -> bool {
        let Some(general) = self.my_general() else {
            return false;
        };

        if mv.from() == general {
            return self.general_move_is_safe(mv);
        }

        if !in_check && !near_general(general, mv.from()) && !near_general(general, mv.to()) {
            return true;
        }

        let mut scratch = *self;
        scratch.apply_move(mv);
        !scratch.is_under_attack(general)
    }

    /// Pseudo-legal moves; general moves into attack are already dropped
    pub fn generate_pseudolegal_moves(&self) -> MoveList {
        let mut list = MoveList::new();
        generate_pseudolegal(self, &mut list);
        list
    }

    /// Legal moves in generation order
    pub fn generate_legal_moves(&self) -> MoveList {
        let mut list = self.generate_pseudolegal_moves();
        let Some(general) = self.my_general() else {
            return list;
        };
        let in_check = self.is_in_check();
        // general moves were checked at generation
        list.retain(|mv| mv.from() == general || self.is_legal_move_with(*mv, in_check));
        list
    }

    /// Legal moves with their resulting positions
    pub fn generate_legal_moves_and_positions(&self) -> Vec<MoveExecution> {
        self.generate_legal_moves().into_iter().map(|mv| self.execute(mv)).collect()
    }

    /// Copy, apply, mirror
    pub fn execute(&self, mv: Move) -> MoveExecution {
        let mut position = *self;
        let irreversible = position.apply_move(mv);
        position.mirror();
        MoveExecution {
            mv,
            position,
            irreversible,
        }
    }
}
