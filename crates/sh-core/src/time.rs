//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One world tick moves
//! every entity one step through its action state machine.  A *turn* is the
//! span of ticks the interactive front end advances per input
//! (`SimConfig::turn_ticks`, 10 by default), long enough for a default
//! 10-tick move to complete.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// `true` if this tick is a whole multiple of `every` (never for `0`).
    #[inline]
    pub fn is_multiple_of(self, every: u64) -> bool {
        every != 0 && self.0 % every == 0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Counts elapsed ticks and turns.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick, advanced by `SimClock::advance()` after each world tick.
    pub current_tick: Tick,
    /// Ticks per turn.
    pub turn_ticks:   u64,
}

impl SimClock {
    pub fn new(turn_ticks: u64) -> Self {
        Self { current_tick: Tick::ZERO, turn_ticks }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Completed turns so far.
    #[inline]
    pub fn turns(&self) -> u64 {
        if self.turn_ticks == 0 { 0 } else { self.current_tick.0 / self.turn_ticks }
    }

    /// `true` when the clock sits exactly on a turn boundary.
    #[inline]
    pub fn at_turn_boundary(&self) -> bool {
        self.current_tick.is_multiple_of(self.turn_ticks)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (turn {})", self.current_tick, self.turns())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built in code or loaded from a JSON/TOML file by the application
/// (enable the `serde` feature) and handed to the simulation runner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// World ticks per interactive turn.  Default: 10.
    pub turn_ticks: u64,

    /// Ticks `Sim::run` advances before stopping.
    pub total_ticks: u64,
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.turn_ticks)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 0, turn_ticks: 10, total_ticks: 1_000 }
    }
}
