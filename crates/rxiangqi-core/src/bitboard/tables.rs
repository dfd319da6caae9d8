//! 近接駒の利きテーブル
//!
//! 各テーブルは移動元の升で引き、空盤での移動先を保持する。
//! 馬脚・象眼による遮りは生成時に `horse_leg` と `elephant_eye` で判定する。

use once_cell::sync::Lazy;

use super::Bitboard;
use crate::types::{Side, Square};

/// Ray and step directions, in row/column deltas from the mover's view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    /// Chariot and cannon rays, in action-enumeration order
    pub const ORTHOGONALS: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    pub const DIAGONALS: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// (drow, dcol)
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::East => (0, 1),
            Direction::South => (-1, 0),
            Direction::West => (0, -1),
            Direction::NorthEast => (1, 1),
            Direction::SouthEast => (-1, 1),
            Direction::SouthWest => (-1, -1),
            Direction::NorthWest => (1, -1),
        }
    }

    /// Squares stepped through from `from` (exclusive) to the board edge
    #[inline]
    pub fn ray(self, from: Square) -> impl Iterator<Item = Square> {
        let (dr, dc) = self.delta();
        std::iter::successors(from.offset(dr, dc), move |sq| sq.offset(dr, dc))
    }
}

const HORSE_DELTAS: [(i8, i8); 8] =
    [(2, 1), (1, 2), (-1, 2), (-2, 1), (-2, -1), (-1, -2), (1, -2), (2, -1)];

/// 事前計算した利きテーブル
pub struct AttackTables {
    general: [Bitboard; Square::NUM],
    advisor: [Bitboard; Square::NUM],
    elephant: [Bitboard; Square::NUM],
    horse: [Bitboard; Square::NUM],
    /// [side][from] → その側の兵（卒）の移動先
    soldier: [[Bitboard; Square::NUM]; Side::NUM],
    /// [side][target] → その側の兵（卒）が target に届く升
    soldier_attackers: [[Bitboard; Square::NUM]; Side::NUM],
}

impl AttackTables {
    fn generate() -> Self {
        let mut tables = AttackTables {
            general: [Bitboard::EMPTY; Square::NUM],
            advisor: [Bitboard::EMPTY; Square::NUM],
            elephant: [Bitboard::EMPTY; Square::NUM],
            horse: [Bitboard::EMPTY; Square::NUM],
            soldier: [[Bitboard::EMPTY; Square::NUM]; Side::NUM],
            soldier_attackers: [[Bitboard::EMPTY; Square::NUM]; Side::NUM],
        };

        for sq in Square::all() {
            let i = sq.index();

            if sq.in_palace() {
                tables.general[i] = Direction::ORTHOGONALS
                    .iter()
                    .filter_map(|d| {
                        let (dr, dc) = d.delta();
                        sq.offset(dr, dc)
                    })
                    .filter(|to| to.in_palace())
                    .collect();
            }

            if is_advisor_point(sq) {
                tables.advisor[i] = Direction::DIAGONALS
                    .iter()
                    .filter_map(|d| {
                        let (dr, dc) = d.delta();
                        sq.offset(dr, dc)
                    })
                    .filter(|&to| is_advisor_point(to))
                    .collect();
            }

            if is_elephant_point(sq) {
                tables.elephant[i] = Direction::DIAGONALS
                    .iter()
                    .filter_map(|d| {
                        let (dr, dc) = d.delta();
                        sq.offset(2 * dr, 2 * dc)
                    })
                    .filter(|&to| is_elephant_point(to) && to.on_our_half() == sq.on_our_half())
                    .collect();
            }

            tables.horse[i] = HORSE_DELTAS
                .iter()
                .filter_map(|&(dr, dc)| sq.offset(dr, dc))
                .collect();

            tables.soldier[Side::Ours.index()][i] = soldier_steps(sq, Side::Ours);
            tables.soldier[Side::Theirs.index()][i] = soldier_steps(sq, Side::Theirs);
        }

        for side in [Side::Ours, Side::Theirs] {
            for from in Square::all() {
                for to in tables.soldier[side.index()][from.index()] {
                    tables.soldier_attackers[side.index()][to.index()].set(from);
                }
            }
        }

        tables
    }
}

/// プロセス全体で共有するテーブル（初回アクセス時に構築）
pub static ATTACK_TABLES: Lazy<AttackTables> = Lazy::new(AttackTables::generate);

/// One orthogonal step inside the palace
#[inline]
pub fn general_attacks(sq: Square) -> Bitboard {
    ATTACK_TABLES.general[sq.index()]
}

/// One diagonal step between palace corners and centre
#[inline]
pub fn advisor_attacks(sq: Square) -> Bitboard {
    ATTACK_TABLES.advisor[sq.index()]
}

/// 斜め2升。河は越えない。象眼は見ない。
#[inline]
pub fn elephant_attacks(sq: Square) -> Bitboard {
    ATTACK_TABLES.elephant[sq.index()]
}

/// 日の字の8方向。馬脚は見ない。
#[inline]
pub fn horse_attacks(sq: Square) -> Bitboard {
    ATTACK_TABLES.horse[sq.index()]
}

#[inline]
pub fn soldier_attacks(side: Side, sq: Square) -> Bitboard {
    ATTACK_TABLES.soldier[side.index()][sq.index()]
}

/// Squares holding a `side` soldier that could step onto `target`
#[inline]
pub fn soldier_attackers(side: Side, target: Square) -> Bitboard {
    ATTACK_TABLES.soldier_attackers[side.index()][target.index()]
}

/// `from` から `to` へ跳ぶときに空いている必要がある升（馬脚）
///
/// 長辺方向に `from` から1升進んだ位置。
#[inline]
pub fn horse_leg(from: Square, to: Square) -> Square {
    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;
    let leg = if dr.abs() == 2 {
        from.offset(dr / 2, 0)
    } else {
        from.offset(0, dc / 2)
    };
    leg.unwrap_or(from)
}

/// 象（相）の移動の中点（象眼）
#[inline]
pub fn elephant_eye(from: Square, to: Square) -> Square {
    Square::from_u8(((from.index() + to.index()) / 2) as u8).unwrap_or(from)
}

/// Palace corners and centre
fn is_advisor_point(sq: Square) -> bool {
    if !sq.in_palace() {
        return false;
    }
    let centre_row: i8 = if sq.on_our_half() { 1 } else { 8 };
    (sq.row() as i8 - centre_row).abs() == (sq.col() as i8 - 4).abs()
}

/// The seven elephant points of each half
fn is_elephant_point(sq: Square) -> bool {
    let sq = if sq.on_our_half() { sq } else { sq.mirror() };
    let (row, col) = (sq.row(), sq.col());
    row % 2 == 0 && col % 2 == 0 && (row / 2 + col / 2) % 2 == 1
}

/// Forward one step; sideways too once across the river
fn soldier_steps(sq: Square, side: Side) -> Bitboard {
    let (forward, crossed) = match side {
        Side::Ours => (1, !sq.on_our_half()),
        Side::Theirs => (-1, sq.on_our_half()),
    };
    let mut bb = Bitboard::EMPTY;
    if let Some(to) = sq.offset(forward, 0) {
        bb.set(to);
    }
    if crossed {
        for dc in [-1, 1] {
            if let Some(to) = sq.offset(0, dc) {
                bb.set(to);
            }
        }
    }
    bb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_name(name).unwrap()
    }

    fn total(table: impl Fn(Square) -> Bitboard) -> u32 {
        Square::all().map(|s| table(s).count()).sum()
    }

    #[test]
    fn test_general_confined_to_palace() {
        assert_eq!(general_attacks(sq("e1")).count(), 4);
        assert_eq!(general_attacks(sq("d0")), [sq("e0"), sq("d1")].into_iter().collect());
        assert_eq!(general_attacks(sq("e8")).count(), 4);
        assert!(general_attacks(sq("e4")).is_empty());
        // 2 x (4 corners x 2 + 4 edges x 3 + centre x 4)
        assert_eq!(total(general_attacks), 48);
    }

    #[test]
    fn test_advisor_points() {
        assert_eq!(advisor_attacks(sq("e1")).count(), 4);
        assert_eq!(advisor_attacks(sq("d0")), Bitboard::from_square(sq("e1")));
        assert_eq!(advisor_attacks(sq("f9")), Bitboard::from_square(sq("e8")));
        assert!(advisor_attacks(sq("e0")).is_empty());
        assert_eq!(total(advisor_attacks), 16);
    }

    #[test]
    fn test_elephant_points_stay_on_their_half() {
        assert_eq!(
            elephant_attacks(sq("e2")),
            [sq("c0"), sq("g0"), sq("c4"), sq("g4")].into_iter().collect()
        );
        // c4 cannot cross to e6/a6
        assert_eq!(elephant_attacks(sq("c4")), [sq("a2"), sq("e2")].into_iter().collect());
        assert_eq!(elephant_attacks(sq("c5")), [sq("a7"), sq("e7")].into_iter().collect());
        assert!(elephant_attacks(sq("e4")).is_empty());
        assert_eq!(total(elephant_attacks), 32);
    }

    #[test]
    fn test_horse_table() {
        assert_eq!(horse_attacks(sq("e4")).count(), 8);
        assert_eq!(horse_attacks(sq("a0")), [sq("b2"), sq("c1")].into_iter().collect());
        assert_eq!(total(horse_attacks), 508);
    }

    #[test]
    fn test_horse_leg() {
        assert_eq!(horse_leg(sq("b0"), sq("c2")), sq("b1"));
        assert_eq!(horse_leg(sq("b0"), sq("d1")), sq("c0"));
        assert_eq!(horse_leg(sq("e4"), sq("d2")), sq("e3"));
        assert_eq!(horse_leg(sq("e4"), sq("c5")), sq("d4"));
    }

    #[test]
    fn test_elephant_eye() {
        assert_eq!(elephant_eye(sq("c0"), sq("e2")), sq("d1"));
        assert_eq!(elephant_eye(sq("g4"), sq("i2")), sq("h3"));
    }

    #[test]
    fn test_soldier_tables() {
        assert_eq!(soldier_attacks(Side::Ours, sq("e3")), Bitboard::from_square(sq("e4")));
        assert_eq!(
            soldier_attacks(Side::Ours, sq("e5")),
            [sq("e6"), sq("d5"), sq("f5")].into_iter().collect()
        );
        assert_eq!(soldier_attacks(Side::Ours, sq("a9")), Bitboard::from_square(sq("b9")));
        assert_eq!(soldier_attacks(Side::Theirs, sq("e6")), Bitboard::from_square(sq("e5")));
        assert_eq!(soldier_attacks(Side::Theirs, sq("e4")).count(), 3);

        // their soldier on e2 (crossed), e1 below it, d1/f1 beside
        assert_eq!(
            soldier_attackers(Side::Theirs, sq("e1")),
            [sq("e2"), sq("d1"), sq("f1")].into_iter().collect()
        );
        // their soldier on e6 has not crossed, so only straight ahead reaches e5
        assert_eq!(
            soldier_attackers(Side::Theirs, sq("e5")),
            Bitboard::from_square(sq("e6"))
        );
    }

    #[test]
    fn test_rays() {
        let north: Vec<_> = Direction::North.ray(sq("e6")).collect();
        assert_eq!(north, vec![sq("e7"), sq("e8"), sq("e9")]);
        assert_eq!(Direction::West.ray(sq("a3")).count(), 0);
        let reach: u32 = Square::all()
            .map(|s| Direction::ORTHOGONALS.iter().map(|d| d.ray(s).count() as u32).sum::<u32>())
            .sum();
        assert_eq!(reach, 90 * 17);
    }
}
