//! # Seeded Sequence Generator
//!
//! A 64-bit linear congruential generator whose only contract is bit-exact
//! reproducibility: the same seed and the same ordered sequence of calls
//! always yield the same values.
//!
//! The generator is owned by a single simulation run and passed by `&mut`
//! to whatever consumes draws. Never share one instance between runs.

use rand::{RngCore, SeedableRng};

/// LCG multiplier
pub const LCG_MULTIPLIER: u64 = 6364136223846793005;
/// LCG increment
pub const LCG_INCREMENT: u64 = 1;

/// 2^53, the resolution of a unit draw
const UNIT_SCALE: f64 = (1u64 << 53) as f64;

/// Source of unit-interval draws consumed by the profile synthesizer.
///
/// Implemented by [`SeededLcg`]; tests substitute fixed sequences.
pub trait UnitDraw {
    /// Next value in `[0, 1)`
    fn next_unit_f64(&mut self) -> f64;
}

/// Linear congruential generator with a single `u64` of state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededLcg {
    state: u64,
}

impl SeededLcg {
    /// Create a generator from a 64-bit seed. The seed is used verbatim as the initial state.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Current internal state (the value last returned by [`SeededLcg::next_u64`], or the seed)
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance the state and return it: `state * A + C (mod 2^64)`
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }
}

impl UnitDraw for SeededLcg {
    fn next_unit_f64(&mut self) -> f64 {
        // Top 53 bits
        (self.next_u64() >> 11) as f64 / UNIT_SCALE
    }
}

impl RngCore for SeededLcg {
    fn next_u32(&mut self) -> u32 {
        (SeededLcg::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        SeededLcg::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = SeededLcg::next_u64(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SeededLcg {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    // The default implementation scrambles the seed; keep it verbatim instead.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
