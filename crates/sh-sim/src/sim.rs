//! The `Sim` struct and its tick and turn loops.

use sh_core::{Point, SimClock, SimConfig, Tick};
use sh_world::World;

use crate::{SimObserver, SimResult};

/// The simulation runner.
///
/// Owns the world and a clock that mirrors the world's tick count.  Every
/// entry point goes through [`step`](Self::step), so observers see every
/// tick no matter how the simulation is driven.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Seed, turn length and run length.
    pub config: SimConfig,

    /// Current tick and turn count.
    pub clock: SimClock,

    /// The grid and everything on it.
    pub world: World,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Tick the world once.  Returns the tick that was processed.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Tick> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        self.world.tick()?;
        observer.on_tick_end(now, &self.world);
        self.clock.advance();
        Ok(now)
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`
    /// and turn boundaries).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Advance to the next turn boundary, ticking at least once.
    ///
    /// Returns the messages the world logged during the turn; they have
    /// already been passed to `observer.on_turn_end`.
    pub fn turn<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Vec<String>> {
        self.step(observer)?;
        while !self.clock.at_turn_boundary() {
            self.step(observer)?;
        }
        Ok(self.end_turn(observer))
    }

    /// Point the player along `delta`, commit it to a step, and play a turn.
    ///
    /// Without a player (or one that cannot move) the turn still runs.
    pub fn player_turn<O: SimObserver>(
        &mut self,
        delta:    Point,
        observer: &mut O,
    ) -> SimResult<Vec<String>> {
        if !self.world.move_player(delta) {
            tracing::debug!(delta = %delta, "no movable player; turn runs without input");
        }
        self.turn(observer)
    }

    /// Run from the current tick to `config.end_tick()`, reporting each turn
    /// boundary on the way.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
            if self.clock.at_turn_boundary() {
                self.end_turn(observer);
            }
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn end_turn<O: SimObserver>(&mut self, observer: &mut O) -> Vec<String> {
        let messages = self.world.flush_messages();
        tracing::trace!(clock = %self.clock, messages = messages.len(), "turn end");
        observer.on_turn_end(self.clock.current_tick, &messages);
        messages
    }
}
