//! Attack queries
//!
//! Attacks are found by looking outward from the target square with the
//! attacker's geometry reversed: a horse attacks the target when the target
//! is a horse jump away and the leg next to the horse is empty, and so on.

use super::Position;
use crate::bitboard::{
    advisor_attacks, elephant_attacks, elephant_eye, general_attacks, horse_attacks, horse_leg,
    soldier_attackers, Direction,
};
use crate::types::{Move, PieceType, Side, Square};

impl Position {
    /// Whether an opposing piece could capture on `sq` if it were their move.
    ///
    /// Includes the flying-general rule: their general attacks along an open
    /// file.
    pub fn is_under_attack(&self, sq: Square) -> bool {
        let occupied = self.occupied();

        if let Some(general) = self.their_general() {
            if general_attacks(sq).test(general) {
                return true;
            }
        }

        let horses = self.pieces_of(Side::Theirs, PieceType::Horse);
        for from in horse_attacks(sq) & horses {
            if !occupied.test(horse_leg(from, sq)) {
                return true;
            }
        }

        let elephants = self.pieces_of(Side::Theirs, PieceType::Elephant);
        for from in elephant_attacks(sq) & elephants {
            if !occupied.test(elephant_eye(from, sq)) {
                return true;
            }
        }

        if advisor_attacks(sq).intersects(self.pieces_of(Side::Theirs, PieceType::Advisor)) {
            return true;
        }

        let soldiers = self.pieces_of(Side::Theirs, PieceType::Soldier);
        if soldier_attackers(Side::Theirs, sq).intersects(soldiers) {
            return true;
        }

        let chariots = self.pieces_of(Side::Theirs, PieceType::Chariot);
        let cannons = self.pieces_of(Side::Theirs, PieceType::Cannon);
        for dir in Direction::ORTHOGONALS {
            let vertical = matches!(dir, Direction::North | Direction::South);
            let mut screened = false;
            for s in dir.ray(sq) {
                if !occupied.test(s) {
                    continue;
                }
                if screened {
                    if cannons.test(s) {
                        return true;
                    }
                    break;
                }
                if chariots.test(s) || (vertical && self.their_general() == Some(s)) {
                    return true;
                }
                screened = true;
            }
        }

        false
    }

    /// Whether the mover's general is attacked. False without a general.
    pub fn is_in_check(&self) -> bool {
        self.my_general().is_some_and(|sq| self.is_under_attack(sq))
    }

    /// Whether the two generals stand on one file with nothing between
    pub(crate) fn generals_face(&self, a: Square, b: Square) -> bool {
        if a.col() != b.col() {
            return false;
        }
        let (low, high) = if a.row() < b.row() { (a.row(), b.row()) } else { (b.row(), a.row()) };
        let occupied = self.occupied();
        (low + 1..high).all(|row| !occupied.test(Square::new(row, a.col())))
    }

    /// Whether the general, after making `mv`, stands on an unattacked square
    pub(crate) fn general_move_is_safe(&self, mv: Move) -> bool {
        let mut scratch = *self;
        scratch.apply_move(mv);
        !scratch.is_under_attack(mv.to())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_name(name).unwrap()
    }

    fn pos(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    #[test]
    fn test_startpos_not_in_check() {
        let p = Position::startpos();
        assert!(!p.is_in_check());
        assert!(!p.is_under_attack(Square::E0));
        // b7 cannon hits the b0 horse over the b2 cannon
        assert!(p.is_under_attack(sq("b0")));
    }

    #[test]
    fn test_chariot_attack_and_block() {
        let p = pos("3k5/9/9/9/9/9/9/9/9/4K3r w");
        assert!(p.is_in_check());
        let p = pos("3k5/9/9/9/9/9/9/9/9/4KN2r w");
        assert!(!p.is_in_check());
    }

    #[test]
    fn test_cannon_needs_one_screen() {
        assert!(!pos("3k5/9/9/4c4/9/9/9/9/9/4K4 w").is_in_check());
        assert!(pos("3k5/9/9/4c4/9/4p4/9/9/9/4K4 w").is_in_check());
        assert!(!pos("3k5/9/9/4c4/9/4p4/4P4/9/9/4K4 w").is_in_check());
    }

    #[test]
    fn test_horse_leg_seen_from_attacker() {
        // horse f2 attacks e0, leg f1
        assert!(pos("3k5/9/9/9/9/9/9/5n3/9/4K4 w").is_in_check());
        assert!(!pos("3k5/9/9/9/9/9/9/5n3/5A3/4K4 w").is_in_check());
        // a piece on e1 (the leg as seen from the general) does not block
        assert!(pos("3k5/9/9/9/9/9/9/5n3/4P4/4K4 w").is_in_check());
    }

    #[test]
    fn test_soldier_attacks() {
        // soldier beside the general (across the river from its side)
        assert!(pos("3k5/9/9/9/9/9/9/9/9/3pK4 w").is_in_check());
        // soldier above the general
        assert!(pos("3k5/9/9/9/9/9/9/9/4p4/4K4 w").is_in_check());
        let p = pos("3k5/9/9/9/9/9/9/9/9/4Kp3 w");
        assert!(p.is_in_check());
        // soldiers never attack backwards
        let p = pos("3k5/9/9/9/9/9/9/9/4K4/4p4 w");
        assert!(!p.is_in_check());
    }

    #[test]
    fn test_flying_general() {
        let p = pos("4k4/9/9/9/9/9/9/9/9/4K4 w");
        assert!(p.is_in_check());
        assert!(p.generals_face(sq("e0"), sq("e9")));
        let p = pos("4k4/9/9/9/4p4/9/9/9/9/4K4 w");
        assert!(!p.is_in_check());
        assert!(!p.generals_face(sq("e0"), sq("e9")));
        // a general on the same rank does not fly
        let p = pos("9/9/9/9/9/9/9/9/9/3K1k3 w");
        assert!(!p.is_under_attack(sq("d0")));
    }

    #[test]
    fn test_no_general_not_in_check() {
        let p = pos("4k4/9/9/9/9/9/9/9/9/4r4 w");
        assert!(!p.is_in_check());
    }
}
