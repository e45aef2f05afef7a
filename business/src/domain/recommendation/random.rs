use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Source of the random choices made when picking among top-ranked courses.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick(&self, len: usize) -> usize;

    /// `amount` distinct indices in `0..len`, in the order they were drawn.
    /// Callers never pass `amount > len`.
    fn sample(&self, len: usize, amount: usize) -> Vec<usize>;
}

fn pick_with<R: Rng>(rng: &mut R, len: usize) -> usize {
    rng.random_range(0..len)
}

fn sample_with<R: Rng>(rng: &mut R, len: usize, amount: usize) -> Vec<usize> {
    index::sample(rng, len, amount).into_vec()
}

/// Draws from the calling thread's generator, so concurrent requests never
/// share state.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        pick_with(&mut rand::rng(), len)
    }

    fn sample(&self, len: usize, amount: usize) -> Vec<usize> {
        sample_with(&mut rand::rng(), len, amount)
    }
}

/// Reproducible generator shared behind a lock.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        pick_with(&mut *rng, len)
    }

    fn sample(&self, len: usize, amount: usize) -> Vec<usize> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        sample_with(&mut *rng, len, amount)
    }
}
