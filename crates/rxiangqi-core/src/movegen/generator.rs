//! 疑似合法手の生成器
//!
//! 手番側の駒を升目の昇順に走査して生成する。帥（将）の移動だけはここで
//! 利きを確認し、それ以外の合法性判定は legality 側に任せる。

use crate::bitboard::{
    advisor_attacks, elephant_attacks, elephant_eye, general_attacks, horse_attacks, horse_leg,
    soldier_attacks, Bitboard, Direction,
};
use crate::position::Position;
use crate::types::{Move, MoveList, PieceType, Side, Square};

/// `to` に相手の駒があれば駒取り、なければ通常の手
#[inline]
fn add_move(pos: &Position, list: &mut MoveList, from: Square, to: Square) {
    if pos.theirs().test(to) {
        list.push(Move::capture(from, to));
    } else {
        list.push(Move::new(from, to));
    }
}

// ============================================================================
// 駒種ごとの生成
// ============================================================================

/// 九宮内で利きのない升への移動と、対面した相手の帥（将）を取る手
fn generate_general_moves(pos: &Position, from: Square, list: &mut MoveList) {
    for to in general_attacks(from) - pos.mine() {
        let mv = if pos.theirs().test(to) {
            Move::capture(from, to)
        } else {
            Move::new(from, to)
        };
        if pos.general_move_is_safe(mv) {
            list.push(mv);
        }
    }

    if let Some(their_general) = pos.their_general() {
        if pos.generals_face(from, their_general) {
            let mv = Move::capture(from, their_general);
            if pos.general_move_is_safe(mv) {
                list.push(mv);
            }
        }
    }
}

fn generate_advisor_moves(pos: &Position, from: Square, list: &mut MoveList) {
    for to in advisor_attacks(from) - pos.mine() {
        add_move(pos, list, from, to);
    }
}

fn generate_elephant_moves(pos: &Position, from: Square, list: &mut MoveList) {
    let occupied = pos.occupied();
    for to in elephant_attacks(from) - pos.mine() {
        if !occupied.test(elephant_eye(from, to)) {
            add_move(pos, list, from, to);
        }
    }
}

fn generate_horse_moves(pos: &Position, from: Square, list: &mut MoveList) {
    let occupied = pos.occupied();
    for to in horse_attacks(from) - pos.mine() {
        if !occupied.test(horse_leg(from, to)) {
            add_move(pos, list, from, to);
        }
    }
}

fn generate_chariot_moves(pos: &Position, from: Square, list: &mut MoveList) {
    for dir in Direction::ORTHOGONALS {
        for to in dir.ray(from) {
            if pos.mine().test(to) {
                break;
            }
            add_move(pos, list, from, to);
            if pos.theirs().test(to) {
                break;
            }
        }
    }
}

fn generate_cannon_moves(pos: &Position, from: Square, list: &mut MoveList) {
    let occupied = pos.occupied();
    for dir in Direction::ORTHOGONALS {
        let mut screened = false;
        for to in dir.ray(from) {
            if !occupied.test(to) {
                if !screened {
                    list.push(Move::new(from, to));
                }
                continue;
            }
            if !screened {
                screened = true;
                continue;
            }
            if pos.theirs().test(to) {
                list.push(Move::capture(from, to));
            }
            break;
        }
    }
}

fn generate_soldier_moves(pos: &Position, from: Square, list: &mut MoveList) {
    for to in soldier_attacks(Side::Ours, from) - pos.mine() {
        add_move(pos, list, from, to);
    }
}

/// 手番側の疑似合法手をすべて追加する
///
/// 手番側の帥（将）が盤上にないときは何も生成しない。
pub(crate) fn generate_pseudolegal(pos: &Position, list: &mut MoveList) {
    if pos.my_general().is_none() {
        return;
    }

    let mine: Bitboard = pos.mine();
    for from in mine {
        let Some(pt) = pos.kind_at(from) else {
            continue;
        };
        match pt {
            PieceType::General => generate_general_moves(pos, from, list),
            PieceType::Advisor => generate_advisor_moves(pos, from, list),
            PieceType::Elephant => generate_elephant_moves(pos, from, list),
            PieceType::Horse => generate_horse_moves(pos, from, list),
            PieceType::Chariot => generate_chariot_moves(pos, from, list),
            PieceType::Cannon => generate_cannon_moves(pos, from, list),
            PieceType::Soldier => generate_soldier_moves(pos, from, list),
        }
    }

    log::trace!("generated {} pseudo-legal moves", list.len());
}
