//! Palette choice with light repeat avoidance
//!
//! A standard pick is resampled while it would make a third identical pick in
//! a row, up to a fixed number of attempts; on exhaustion the repeat is
//! accepted. Every n-th call returns the red rose and forgets the history.

use std::collections::VecDeque;

use super::color::{Palette, PETAL_PALETTES, RED_ROSE};
use crate::math::Sampler;

const HISTORY_LEN: usize = 3;
/// Every n-th selection is the red rose
pub const DISTINGUISHED_EVERY: u32 = 7;
/// Resample budget when avoiding a third identical pick in a row
pub const MAX_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone)]
pub struct PaletteSelector {
    /// Total selections since creation or last reset
    counter: u32,
    /// Most recent standard indices, newest first
    history: VecDeque<usize>,
    distinguished_every: u32,
    max_attempts: u32,
}

impl Default for PaletteSelector {
    fn default() -> Self {
        Self::with_limits(DISTINGUISHED_EVERY, MAX_ATTEMPTS)
    }
}

impl PaletteSelector {
    fn with_limits(distinguished_every: u32, max_attempts: u32) -> Self {
        Self {
            counter: 0,
            history: VecDeque::with_capacity(HISTORY_LEN + 1),
            distinguished_every: distinguished_every.max(1),
            max_attempts: max_attempts.max(1),
        }
    }

    /// Choose the palette for the next flower
    pub fn select(&mut self, sampler: &mut Sampler) -> Palette {
        self.select_indexed(sampler).1
    }

    /// Like `select`, also returning the catalog index (`None` for the rose)
    fn select_indexed(&mut self, sampler: &mut Sampler) -> (Option<usize>, Palette) {
        self.counter += 1;

        if self.counter % self.distinguished_every == 0 {
            self.history.clear();
            return (None, RED_ROSE);
        }

        let mut index;
        let mut attempts = 0;
        loop {
            index = sampler.range_int(0, PETAL_PALETTES.len());
            attempts += 1;
            if attempts >= self.max_attempts || !self.would_triple(index) {
                break;
            }
        }

        self.history.push_front(index);
        self.history.truncate(HISTORY_LEN);

        (Some(index), PETAL_PALETTES[index])
    }

    fn would_triple(&self, index: usize) -> bool {
        matches!(
            (self.history.front(), self.history.get(1)),
            (Some(&a), Some(&b)) if a == index && b == index
        )
    }

    /// Forget the cadence and history (clear button)
    pub fn reset(&mut self) {
        self.counter = 0;
        self.history.clear();
    }

    #[cfg(test)]
    pub fn counter(&self) -> u32 {
        self.counter
    }

    #[cfg(test)]
    fn history(&self) -> impl Iterator<Item = usize> + '_ {
        self.history.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_seventh_is_rose() {
        let mut sampler = Sampler::from_seed(7);
        let mut selector = PaletteSelector::default();

        for k in 1..=70u32 {
            let palette = selector.select(&mut sampler);
            assert_eq!(palette.distinguished, k % 7 == 0, "call {}", k);
            if k % 7 == 0 {
                assert_eq!(palette, RED_ROSE);
            } else {
                assert!(PETAL_PALETTES.contains(&palette));
            }
        }
    }

    #[test]
    fn test_rose_clears_history() {
        let mut sampler = Sampler::from_seed(11);
        let mut selector = PaletteSelector::default();

        for _ in 0..6 {
            selector.select(&mut sampler);
        }
        assert_eq!(selector.history().count(), 3);

        selector.select(&mut sampler);
        assert_eq!(selector.history().count(), 0);
    }

    #[test]
    fn test_history_is_newest_first_and_bounded() {
        let mut sampler = Sampler::from_seed(12);
        let mut selector = PaletteSelector::default();

        let mut picked = Vec::new();
        for _ in 0..5 {
            let (index, _) = selector.select_indexed(&mut sampler);
            picked.push(index.unwrap());
        }
        let history: Vec<usize> = selector.history().collect();
        assert_eq!(history, vec![picked[4], picked[3], picked[2]]);
    }

    #[test]
    fn test_three_in_a_row_is_rare() {
        let mut sampler = Sampler::from_seed(13);
        // Cadence never triggers, so every pick is a standard one
        let mut selector = PaletteSelector::with_limits(u32::MAX, MAX_ATTEMPTS);

        let picks: Vec<usize> = (0..20_000)
            .map(|_| selector.select_indexed(&mut sampler).0.unwrap())
            .collect();
        let triples = picks
            .windows(3)
            .filter(|w| w[0] == w[1] && w[1] == w[2])
            .count();

        // Unconstrained sampling would give about 1% triples; with ten
        // attempts the residual chance is (1/10)^10 per window.
        assert!(triples <= 1, "found {} triples", triples);
    }

    #[test]
    fn test_single_attempt_accepts_repeats() {
        let mut sampler = Sampler::from_seed(14);
        let mut selector = PaletteSelector::with_limits(u32::MAX, 1);

        let picks: Vec<usize> = (0..20_000)
            .map(|_| selector.select_indexed(&mut sampler).0.unwrap())
            .collect();
        let triples = picks
            .windows(3)
            .filter(|w| w[0] == w[1] && w[1] == w[2])
            .count();

        assert!(triples > 50, "expected unconstrained repeats, found {}", triples);
    }

    #[test]
    fn test_reset_restarts_cadence() {
        let mut sampler = Sampler::from_seed(15);
        let mut selector = PaletteSelector::default();

        for _ in 0..5 {
            selector.select(&mut sampler);
        }
        selector.reset();
        assert_eq!(selector.counter(), 0);
        assert_eq!(selector.history().count(), 0);

        for k in 1..=7 {
            let palette = selector.select(&mut sampler);
            assert_eq!(palette.distinguished, k == 7);
        }
    }
}
