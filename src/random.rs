use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the values returned by the `rand` function
pub trait RandomSource {
    /// Draw a value in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

/// Reseeds from the system clock on every draw, so two draws within the same
/// clock tick return the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockRandom;

impl RandomSource for ClockRandom {
    fn next_unit(&mut self) -> f64 {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        ChaCha8Rng::seed_from_u64(seed).gen()
    }
}

/// A deterministic source, for reproducible evaluations
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Create a source from a fixed seed
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen()
    }
}
