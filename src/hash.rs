//! Hashes lattice corners through the permutation table.
//! This does not use a seeded rng; the same corner always selects the same gradient.

use bevy_math::{UVec2, UVec3, UVec4};

use crate::tables::PERM;

/// Represents a wrapped lattice corner that can be hashed by nested [`PERM`] lookups.
///
/// Each component must be at most 256: a coordinate masked to `0..=255` plus a step of 0 or 1.
pub trait PermutationHash {
    /// Collapses this corner into a single byte, walking [`PERM`] once per axis from the last axis to the first.
    fn permutation_hash(self) -> u8;
}

#[inline(always)]
fn perm(index: u32) -> u32 {
    PERM[index as usize] as u32
}

impl PermutationHash for UVec2 {
    #[inline(always)]
    fn permutation_hash(self) -> u8 {
        PERM[(self.x + perm(self.y)) as usize]
    }
}

impl PermutationHash for UVec3 {
    #[inline(always)]
    fn permutation_hash(self) -> u8 {
        PERM[(self.x + perm(self.y + perm(self.z))) as usize]
    }
}

impl PermutationHash for UVec4 {
    #[inline(always)]
    fn permutation_hash(self) -> u8 {
        PERM[(self.x + perm(self.y + perm(self.z + perm(self.w)))) as usize]
    }
}
