//! Per-kind movement rules

use rxiangqi_core::notation::{move_to_string, parse_move};
use rxiangqi_core::{Move, PieceType, Position, Side, Square};

fn sq(name: &str) -> Square {
    Square::from_name(name).unwrap()
}

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

/// Legal destinations of the piece on `from`, as absolute square names, sorted
fn destinations(pos: &Position, from: &str) -> Vec<String> {
    let from = rxiangqi_core::notation::parse_square(from, pos.is_mirrored()).unwrap();
    let mut names: Vec<String> = pos
        .generate_legal_moves()
        .iter()
        .filter(|m| m.from() == from)
        .map(|m| move_to_string(*m, pos.is_mirrored())[2..4].to_string())
        .collect();
    names.sort();
    names
}

fn moves_from(pos: &Position, from: &str) -> Vec<Move> {
    pos.generate_legal_moves().into_iter().filter(|m| m.from() == sq(from)).collect()
}

// ============================================================================
// Cannon
// ============================================================================

#[test]
fn test_cannon_without_screen_cannot_capture() {
    let p = pos("3k5/9/r8/9/9/C8/9/9/9/4K4 w - - 0 1");
    let moves = moves_from(&p, "a4");
    assert_eq!(moves.len(), 14);
    assert!(moves.iter().all(|m| !m.is_capture()));
    // the chariot itself is not a destination
    assert!(!moves.contains(&parse_move("a4a7", false).unwrap()));
    // nor anything beyond it
    assert!(!moves.contains(&parse_move("a4a8", false).unwrap()));
}

#[test]
fn test_cannon_captures_over_one_screen() {
    let p = pos("3k5/9/r8/p8/9/C8/9/9/9/4K4 w - - 0 1");
    let moves = moves_from(&p, "a4");
    let captures: Vec<_> = moves.iter().filter(|m| m.is_capture()).collect();
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].to(), sq("a7"));
    // the screen is never a destination
    assert!(!moves.iter().any(|m| m.to() == sq("a6")));
    assert_eq!(moves.len(), 14);
}

#[test]
fn test_cannon_stops_after_second_piece() {
    // two screens: no capture of the chariot on a7
    let p = pos("3k5/9/r8/P8/P8/C8/9/9/9/4K4 w - - 0 1");
    let moves = moves_from(&p, "a4");
    assert!(moves.iter().all(|m| !m.is_capture()));
    assert_eq!(moves.len(), 12);

    // own piece behind the screen is not captured either
    let p = pos("3k5/9/R8/p8/9/C8/9/9/9/4K4 w - - 0 1");
    assert!(moves_from(&p, "a4").iter().all(|m| !m.is_capture()));
}

// ============================================================================
// Chariot
// ============================================================================

#[test]
fn test_chariot_slides_until_blocked() {
    let p = pos("3k5/9/9/9/9/9/9/9/9/R2P1K3 w");
    // north a1..a9 (9), east b0 c0 (2)
    assert_eq!(moves_from(&p, "a0").len(), 11);
    let p = pos("r2k5/9/9/9/9/9/9/9/9/R4K3 w");
    let capture = moves_from(&p, "a0").into_iter().find(|m| m.is_capture()).unwrap();
    assert_eq!(capture.to(), sq("a9"));
}

// ============================================================================
// Horse
// ============================================================================

#[test]
fn test_horse_all_jumps_on_open_board() {
    let p = pos("5k3/9/9/9/9/4N4/9/9/9/3K5 w");
    assert_eq!(
        destinations(&p, "e4"),
        vec!["c3", "c5", "d2", "d6", "f2", "f6", "g3", "g5"]
    );
}

#[test]
fn test_horse_every_leg_blocks_two_jumps() {
    let base = pos("5k3/9/9/9/9/4N4/9/9/9/3K5 w");
    let cases = [
        ("e5", ["d6", "f6"]),
        ("f4", ["g3", "g5"]),
        ("e3", ["d2", "f2"]),
        ("d4", ["c3", "c5"]),
    ];
    for (leg, blocked) in cases {
        for side in [Side::Ours, Side::Theirs] {
            let mut p = base;
            p.put_piece(sq(leg), PieceType::Advisor, side);
            let dests = destinations(&p, "e4");
            assert_eq!(dests.len(), 6, "leg {leg} ({side:?})");
            for b in blocked {
                assert!(!dests.contains(&b.to_string()), "jump to {b} with {leg} blocked");
            }
        }
    }
}

// ============================================================================
// Elephant
// ============================================================================

#[test]
fn test_elephant_eye_and_river() {
    let p = pos("5k3/9/9/9/9/9/9/9/9/2B1K4 w");
    assert_eq!(destinations(&p, "c0"), vec!["a2", "e2"]);

    // eye d1 blocked
    let p = pos("5k3/9/9/9/9/9/9/9/3P5/2B1K4 w");
    assert_eq!(destinations(&p, "c0"), vec!["a2"]);

    // elephant on the river bank cannot cross
    let p = pos("5k3/9/9/9/9/2B6/9/9/9/4K4 w");
    assert_eq!(destinations(&p, "c4"), vec!["a2", "e2"]);

    // black elephant stays on its own half too
    let p = pos("5k3/9/9/9/2b6/9/9/9/9/4K4 b");
    assert_eq!(destinations(&p, "c5"), vec!["a7", "e7"]);
}

#[test]
fn test_elephant_every_eye_blocks_one_jump() {
    let base = pos("5k3/9/9/9/9/9/9/4B4/9/3K5 w");
    assert_eq!(destinations(&base, "e2"), vec!["c0", "c4", "g0", "g4"]);

    let cases = [("d1", "c0"), ("f1", "g0"), ("d3", "c4"), ("f3", "g4")];
    for (eye, blocked) in cases {
        for side in [Side::Ours, Side::Theirs] {
            let mut p = base;
            p.put_piece(sq(eye), PieceType::Advisor, side);
            let expected: Vec<&str> = ["c0", "c4", "g0", "g4"].into_iter().filter(|d| *d != blocked).collect();
            assert_eq!(destinations(&p, "e2"), expected, "eye {eye} ({side:?})");
        }
    }
}

// ============================================================================
// Advisor and general
// ============================================================================

#[test]
fn test_advisor_stays_in_palace() {
    let p = pos("5k3/9/9/9/9/9/9/9/4A4/3K5 w");
    assert_eq!(destinations(&p, "e1"), vec!["d2", "f0", "f2"]);
    let p = pos("5k3/9/9/9/9/9/9/9/9/3AK4 w");
    assert_eq!(destinations(&p, "d0"), vec!["e1"]);
}

#[test]
fn test_general_confined_and_cannot_face() {
    // d0 would face the black general on the open d file
    let p = pos("3k5/9/9/9/9/9/9/9/9/4K4 w");
    assert_eq!(destinations(&p, "e0"), vec!["e1", "f0"]);

    // corner of the palace: c0 is outside
    let p = pos("5k3/9/9/9/9/9/9/9/9/3K5 w");
    assert_eq!(destinations(&p, "d0"), vec!["d1", "e0"]);
}

// ============================================================================
// Soldier
// ============================================================================

#[test]
fn test_soldier_before_and_after_river() {
    let p = pos("5k3/9/9/9/9/9/4P4/9/9/3K5 w");
    assert_eq!(destinations(&p, "e3"), vec!["e4"]);

    let p = pos("5k3/9/9/9/4P4/9/9/9/9/3K5 w");
    assert_eq!(destinations(&p, "e5"), vec!["d5", "e6", "f5"]);

    // last rank: sideways only
    let p = pos("P4k3/9/9/9/9/9/9/9/9/3K5 w");
    assert_eq!(destinations(&p, "a9"), vec!["b9"]);
}

#[test]
fn test_black_soldier_moves_down() {
    let p = pos("5k3/9/9/9/9/9/4p4/9/9/3K5 b");
    assert_eq!(destinations(&p, "e3"), vec!["d3", "e2", "f3"]);

    let p = pos("5k3/9/9/4p4/9/9/9/9/9/3K5 b");
    assert_eq!(destinations(&p, "e6"), vec!["e5"]);
}
