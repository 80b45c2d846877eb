//! Uniform sampling helpers over a seedable RNG
//!
//! Every random decision in the garden goes through one `Sampler`, so a fixed
//! seed reproduces a whole session.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::Span;

#[derive(Debug, Clone)]
pub struct Sampler {
    rng: ChaCha8Rng,
}

impl Sampler {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform value in `[min, max)`. Reversed bounds are allowed and sample
    /// `(max, min]`, which some drift speeds rely on.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen::<f64>() * (max - min) + min
    }

    pub fn span(&mut self, span: Span) -> f64 {
        self.range(span.min, span.max)
    }

    /// `floor(range(min, max))`, i.e. an integer in `[min, max)`
    pub fn range_int(&mut self, min: usize, max: usize) -> usize {
        self.range(min as f64, max as f64).floor() as usize
    }

    /// Pick one element uniformly, `None` for an empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Coin flip with probability `p` of `true`
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }
}
