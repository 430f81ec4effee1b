//! Injectable randomness for ball splitting
//!
//! The simulation only ever asks for uniform draws in `[0, 1)`, so tests can
//! force or suppress splits without touching a real generator.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seeded generator for a play session
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
