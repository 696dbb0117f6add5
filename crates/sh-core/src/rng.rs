//! The simulation's source of randomness.
//!
//! # Determinism strategy
//!
//! Each world owns exactly one [`SimRng`], seeded when the world is built and
//! never re-seeded afterwards.  Behaviours never reach for a global
//! generator: every sensing, wandering and combat roll receives the RNG by
//! reference through the [`Dice`] trait.  Given the same seed, map and
//! inputs, a run is reproducible tick for tick.
//!
//! `Dice` is also the seam tests use to script rolls (see the `sh-behavior`
//! tests).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── Dice ──────────────────────────────────────────────────────────────────────

/// The random draws the simulation needs.
///
/// Percentages follow the convention of the property schema: a probability
/// `p` in `0..=100` succeeds when `p > percent()`, so `0` never succeeds and
/// `100` always does.
pub trait Dice {
    /// Uniform float in `[0, 100)`.
    fn percent(&mut self) -> f64;

    /// Fair coin.
    fn coin(&mut self) -> bool;

    /// Uniform integer in `lo..=hi`.  Returns `lo` when `hi < lo`.
    fn int_in(&mut self, lo: i32, hi: i32) -> i32;

    /// Uniform index in `0..n`.  `n` must be non-zero.
    fn below(&mut self, n: usize) -> usize;

    /// `true` with probability `p` percent.
    #[inline]
    fn roll(&mut self, p: f64) -> bool {
        p > self.percent()
    }

    /// Choose a random element, or `None` for an empty slice.
    fn pick<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if slice.is_empty() {
            None
        } else {
            slice.get(self.below(slice.len()))
        }
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// World-level deterministic RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl Dice for SimRng {
    #[inline]
    fn percent(&mut self) -> f64 {
        self.0.gen_range(0.0..100.0)
    }

    #[inline]
    fn coin(&mut self) -> bool {
        self.0.r#gen()
    }

    #[inline]
    fn int_in(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo { lo } else { self.0.gen_range(lo..=hi) }
    }

    #[inline]
    fn below(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }
}

impl std::fmt::Debug for SimRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SimRng")
    }
}
