//! Delayed actions: the per-entity scheduling primitive.
//!
//! An entity commits to one [`Action`] at a time.  The action counts ticks
//! and, on the tick its delay is reached, runs its [`Effect`] exactly once
//! through an [`Executor`] and charges the returned energy cost to the
//! actor.  Nothing touches the world while the delay accumulates.
//!
//! Effects are plain data; the world-facing execution of each variant lives
//! in `sh-behavior`, which implements `Executor` over a world.

use sh_core::{EntityId, Point, WorldResult};

use crate::Entity;

/// What a matured action does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Nothing; costs nothing.
    Idle,
    /// Step one cell along the mover's heading.
    Step,
    /// Randomised step (auto-move).
    Wander,
    /// Swing at `target`, expected at `dest`.
    Strike { dest: Point, target: EntityId },
}

impl Effect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Idle          => "idle",
            Effect::Step          => "step",
            Effect::Wander        => "wander",
            Effect::Strike { .. } => "strike",
        }
    }
}

/// Runs matured effects against some world.
pub trait Executor {
    /// Execute `effect` for `actor` standing at `origin` and return its
    /// energy cost.  Soft failures return `Ok(0)`; only spatial invariant
    /// violations are errors.
    fn execute(&mut self, effect: &Effect, origin: Point, actor: &mut Entity) -> WorldResult<u32>;
}

/// A delay-counted, single-shot effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    delay:  u32,
    effect: Effect,
    ticks:  u32,
    fired:  bool,
}

impl Action {
    pub fn new(delay: u32, effect: Effect) -> Self {
        Self { delay, effect, ticks: 0, fired: false }
    }

    /// Zero-delay, zero-cost no-op.
    pub fn empty() -> Self {
        Self::new(0, Effect::Idle)
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    /// Ticks counted so far.
    pub fn elapsed(&self) -> u32 {
        self.ticks
    }

    /// `true` once the effect has run.
    pub fn is_done(&self) -> bool {
        self.fired
    }

    /// Advance by one tick.
    ///
    /// Returns `Ok(false)` while the delay is still accumulating.  On the
    /// tick the counter reaches `delay` the effect runs, its cost is debited
    /// via `actor.mod_energy(-cost)`, and `Ok(true)` is returned; every later
    /// call also returns `Ok(true)` without running the effect again.
    pub fn tick<X: Executor + ?Sized>(
        &mut self,
        origin: Point,
        actor:  &mut Entity,
        exec:   &mut X,
    ) -> WorldResult<bool> {
        if self.fired {
            return Ok(true);
        }

        self.ticks += 1;
        if self.ticks < self.delay {
            return Ok(false);
        }

        self.fired = true;
        let cost = exec.execute(&self.effect, origin, actor)?;
        actor.mod_energy(-f64::from(cost));
        Ok(true)
    }
}
