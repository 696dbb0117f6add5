//! Simulation observer trait for progress reporting and front ends.

use sh_core::Tick;
use sh_world::World;

/// Callbacks invoked by [`Sim`][crate::Sim] around every tick and turn.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: message printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_turn_end(&mut self, tick: Tick, messages: &[String]) {
///         for m in messages {
///             println!("{tick}: {m}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the world ticks.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the world ticked, with read access to its new state.
    fn on_tick_end(&mut self, _tick: Tick, _world: &World) {}

    /// Called when the clock lands on a turn boundary, with the messages the
    /// world logged since the previous turn.
    fn on_turn_end(&mut self, _tick: Tick, _messages: &[String]) {}

    /// Called once after [`Sim::run`][crate::Sim::run] reaches its end tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
