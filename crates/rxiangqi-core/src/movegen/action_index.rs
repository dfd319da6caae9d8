//! Policy action index
//!
//! The network head has one output per (from, to) pair that some piece could
//! realize on an empty board. The layout is produced by a single
//! maximal-mobility piece walked over every origin square in ascending order:
//! chariot rays (north, east, south, west, nearest square first), then horse
//! jumps, advisor diagonals and elephant diagonals in ascending destination
//! order. Pairs already numbered are skipped. Both palaces and both halves
//! are included so the layout does not depend on the side to move.

use once_cell::sync::Lazy;

use crate::bitboard::{advisor_attacks, elephant_attacks, horse_attacks, Direction};
use crate::types::{Move, Square};

/// Number of policy outputs (1530 ray + 508 horse + 16 advisor + 32 elephant)
pub const NUM_ACTIONS: usize = 2086;

const UNMAPPED: u16 = u16::MAX;

pub(crate) struct ActionTable {
    /// packed index → action, `UNMAPPED` for unrealizable moves
    packed_to_action: Vec<u16>,
    /// action → move
    action_to_move: Vec<Move>,
}

impl ActionTable {
    fn generate() -> Self {
        let mut table = ActionTable {
            packed_to_action: vec![UNMAPPED; Move::PACKED_RANGE],
            action_to_move: Vec::with_capacity(NUM_ACTIONS),
        };

        for from in Square::all() {
            for dir in Direction::ORTHOGONALS {
                for to in dir.ray(from) {
                    table.push(Move::new(from, to));
                }
            }
            for to in horse_attacks(from) {
                table.push(Move::new(from, to));
            }
            for to in advisor_attacks(from) {
                table.push(Move::new(from, to));
            }
            for to in elephant_attacks(from) {
                table.push(Move::new(from, to));
            }
        }

        debug_assert_eq!(table.action_to_move.len(), NUM_ACTIONS);
        table
    }

    fn push(&mut self, mv: Move) {
        let slot = &mut self.packed_to_action[mv.packed_index() as usize];
        if *slot != UNMAPPED {
            return;
        }
        *slot = self.action_to_move.len() as u16;
        self.action_to_move.push(mv);
    }
}

/// Process-wide action table, built on first use
pub(crate) static ACTION_TABLE: Lazy<ActionTable> = Lazy::new(ActionTable::generate);

/// Action of a realizable move (`u16::MAX` for anything else)
#[inline]
pub(crate) fn action_of(mv: Move) -> u16 {
    let action = ACTION_TABLE.packed_to_action[mv.packed_index() as usize];
    debug_assert!(action != UNMAPPED, "move {mv} has no policy index");
    action
}

/// Move of an action, `None` past the end
#[inline]
pub(crate) fn move_of(action: u16) -> Option<Move> {
    ACTION_TABLE.action_to_move.get(action as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_name(name).unwrap()
    }

    #[test]
    fn test_table_size() {
        assert_eq!(ACTION_TABLE.action_to_move.len(), NUM_ACTIONS);
        let mapped = ACTION_TABLE.packed_to_action.iter().filter(|&&a| a != UNMAPPED).count();
        assert_eq!(mapped, NUM_ACTIONS);
    }

    #[test]
    fn test_layout_starts_with_a0_north_ray() {
        assert_eq!(move_of(0), Some(Move::new(sq("a0"), sq("a1"))));
        assert_eq!(move_of(8), Some(Move::new(sq("a0"), sq("a9"))));
        assert_eq!(move_of(9), Some(Move::new(sq("a0"), sq("b0"))));
        // a0: 17 ray moves, then horse b2 < c1 by square index
        assert_eq!(move_of(17), Some(Move::new(sq("a0"), sq("c1"))));
        assert_eq!(move_of(18), Some(Move::new(sq("a0"), sq("b2"))));
    }

    #[test]
    fn test_inverse() {
        for action in 0..NUM_ACTIONS as u16 {
            let mv = move_of(action).unwrap();
            assert_eq!(action_of(mv), action);
        }
        assert_eq!(move_of(NUM_ACTIONS as u16), None);
    }
}
