//! Position hash
//!
//! A HashCat-style fold over the raw storage. Not incremental: the position
//! is small enough to rehash from scratch whenever the search needs a key.

use super::Position;
use crate::types::PieceType;

/// Stand-in for an absent general
const NO_GENERAL: u64 = 0xFF;

#[inline]
const fn mix(value: u64) -> u64 {
    0xfad0d7f2fbb059f1u64
        .wrapping_mul(value.wrapping_add(0xbaad41cdcb839961))
        .wrapping_add(
            0x7acec0050bf82f43u64.wrapping_mul((value >> 31).wrapping_add(0xd571b3a92b1b2755)),
        )
}

/// Combine `value` into the running hash `hash`
#[inline]
pub const fn hash_cat(hash: u64, value: u64) -> u64 {
    hash ^ 0x299799adf0d95def_u64
        .wrapping_add(mix(value))
        .wrapping_add(hash << 6)
        .wrapping_add(hash >> 2)
}

impl Position {
    /// 64-bit key over both sides, every kind set, general squares and the
    /// perspective flag
    pub fn hash(&self) -> u64 {
        let mut h = 0;
        let sets = [self.mine(), self.theirs()]
            .into_iter()
            .chain(PieceType::NON_GENERAL.into_iter().map(|pt| self.pieces(pt)));
        for bb in sets {
            h = hash_cat(h, bb.low());
            h = hash_cat(h, bb.high());
        }
        for general in [self.my_general(), self.their_general()] {
            h = hash_cat(h, general.map_or(NO_GENERAL, |sq| sq.index() as u64));
        }
        hash_cat(h, self.is_mirrored() as u64)
    }
}
