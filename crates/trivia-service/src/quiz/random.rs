//! Randomness providers for quiz draws.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices.
pub trait RandomSource: Send + Sync + fmt::Debug + 'static {
    /// Return an index in `[0, upper)`. `upper` is never zero.
    fn index(&self, upper: usize) -> usize;
}

/// [`RandomSource`] backed by a `StdRng`, optionally seeded.
pub struct StdRandom {
    rng: Mutex<StdRng>,
    seed: Option<u64>,
}

impl StdRandom {
    /// A source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            seed: None,
        }
    }

    /// A deterministic source. The same seed yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            seed: Some(seed),
        }
    }

    /// Seeded when `seed` is set, from entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl RandomSource for StdRandom {
    fn index(&self, upper: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..upper)
    }
}

impl fmt::Debug for StdRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdRandom").field("seed", &self.seed).finish()
    }
}
