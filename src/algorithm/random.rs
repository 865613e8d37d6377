//! Injected randomness for the evolver
//!
//! The evolver never reaches for a global generator. Callers hand in a
//! [`RandomSource`], which makes runs reproducible under a fixed seed and lets
//! tests script individual draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform draws consumed during initialization and rule rolls
pub trait RandomSource {
    /// Uniform draw from `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..upper`
    ///
    /// Callers guarantee `upper > 0`.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}

/// Adapts any `rand` generator into a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R> RngSource<R> {
    /// Wrap an existing generator
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Recover the wrapped generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for reproducible generation
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}
