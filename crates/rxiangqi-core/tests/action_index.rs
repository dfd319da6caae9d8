//! Policy action index

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rxiangqi_core::{Move, Position, Square, NUM_ACTIONS};

#[test]
fn test_action_space_is_dense_and_invertible() {
    let mut seen = HashSet::new();
    for action in 0..NUM_ACTIONS as u16 {
        let mv = Move::from_network_index(action).expect("action in range");
        assert_eq!(mv.network_index(), action);
        assert!(seen.insert(mv), "{mv} listed twice");
    }
    assert_eq!(seen.len(), 2086);
    assert_eq!(Move::from_network_index(NUM_ACTIONS as u16), None);
}

#[test]
fn test_action_space_is_mirror_closed() {
    // the layout covers both palaces and both halves
    for action in 0..NUM_ACTIONS as u16 {
        let mv = Move::from_network_index(action).unwrap();
        let mirrored = mv.mirror().network_index();
        assert!((mirrored as usize) < NUM_ACTIONS);
    }
}

#[test]
fn test_legal_moves_have_distinct_indices_in_playouts() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5eed);
    for _ in 0..8 {
        let mut pos = Position::startpos();
        for _ in 0..120 {
            let moves = pos.generate_legal_moves();
            if moves.is_empty() {
                break;
            }
            let mut indices = HashSet::new();
            for mv in &moves {
                let index = mv.network_index();
                assert!((index as usize) < NUM_ACTIONS);
                assert!(indices.insert(index));
                assert_eq!(Move::from_network_index(index), Some(*mv));
            }
            let mv = moves[rng.random_range(0..moves.len())];
            pos = pos.execute(mv).position;
        }
    }
}

#[test]
fn test_first_actions() {
    let a0 = Square::A0;
    assert_eq!(Move::new(a0, Square::new(1, 0)).network_index(), 0);
    assert_eq!(Move::new(a0, Square::new(0, 1)).network_index(), 9);
    // last origin square, last ray step: i9 west to a9
    let i9_west = Move::new(Square::I9, Square::new(9, 0));
    assert!((i9_west.network_index() as usize) < NUM_ACTIONS);
}
