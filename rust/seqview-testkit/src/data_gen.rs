//! Seeded generation of test sequences and parameters.

use std::ops::Range;

/// Creates a deterministic generator for `seed`.
pub fn rng(seed: u64) -> fastrand::Rng {
    fastrand::Rng::with_seed(seed)
}

/// Generates `len` values drawn uniformly from `0..max`.
pub fn random_values(rng: &mut fastrand::Rng, len: usize, max: u32) -> Vec<u32> {
    assert_ne!(max, 0);
    (0..len).map(|_| rng.u32(0..max)).collect()
}

/// Generates a sequence of random length in `0..=max_len`.
pub fn random_sequence(rng: &mut fastrand::Rng, max_len: usize, max: u32) -> Vec<u32> {
    let len = rng.usize(0..=max_len);
    random_values(rng, len, max)
}

/// Picks a random, possibly empty, sub-range of `0..len`.
pub fn random_bounds(rng: &mut fastrand::Rng, len: usize) -> Range<usize> {
    let start = rng.usize(0..=len);
    let end = rng.usize(start..=len);
    start..end
}

/// A pure predicate selecting values with a given residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Residue {
    pub modulus: u32,
    pub residue: u32,
}

impl Residue {
    pub fn new(modulus: u32, residue: u32) -> Self {
        assert_ne!(modulus, 0);
        Residue {
            modulus,
            residue: residue % modulus,
        }
    }

    /// Generates a predicate with a modulus in `1..=max_modulus`.
    ///
    /// Small moduli give dense matches; large ones give sparse matches, often
    /// with non-matching runs at both ends of the sequence.
    pub fn random(rng: &mut fastrand::Rng, max_modulus: u32) -> Self {
        let modulus = rng.u32(1..=max_modulus);
        Residue::new(modulus, rng.u32(0..modulus))
    }

    pub fn test(&self, value: u32) -> bool {
        value % self.modulus == self.residue
    }
}
