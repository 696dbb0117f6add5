//! Per-kind decision making and the per-entity tick.

use sh_core::{Point, WorldResult};
use sh_entity::{Action, Effect, Entity, Executor, Kit, Routine};

use crate::{combat, movement, sensing, SurroundingsMut};

/// Scan for prey; strike it if it is adjacent, otherwise roam toward it.
///
/// The remembered target is re-located before deciding.  One that has left
/// the world, broken, or moved beyond `sensitivity` is forgotten.
pub fn hunt<W: SurroundingsMut + ?Sized>(kit: &mut Kit, origin: Point, world: &mut W) -> Action {
    let Kit { mover: Some(mover), senser: Some(senser), attacker: Some(attacker) } = kit else {
        return Action::empty();
    };

    sensing::scan(senser, Routine::HUNT_TASK, origin, world);

    if let Some((_, id)) = senser.memory().focus() {
        let range = senser.props().sensitivity;
        let tracked = world
            .entity(id)
            .filter(|e| e.is_intact())
            .and_then(|_| world.locate(id))
            .filter(|&point| origin.chebyshev(point) <= range);
        match tracked {
            Some(point) => {
                let priority = senser.memory().priority;
                senser.remember(point, id, priority);
            }
            None => senser.forget(),
        }
    }

    match senser.memory().focus() {
        Some((point, target)) if origin.is_adjacent(point) => combat::attack(attacker, point, target),
        Some((point, _)) => {
            mover.change_dir(point - origin);
            movement::auto_move(mover)
        }
        None => movement::auto_move(mover),
    }
}

/// Decide what `actor` does next.  Reads the world and rolls dice but does
/// not move or damage anything.
pub fn next_action<W: SurroundingsMut + ?Sized>(
    actor:  &mut Entity,
    origin: Point,
    world:  &mut W,
) -> Action {
    if !actor.is_active() {
        return Action::empty();
    }

    match actor.kind().routine() {
        Routine::Idle => Action::empty(),
        Routine::Wander => actor.kit().mover.as_ref().map_or_else(Action::empty, movement::auto_move),
        Routine::Seek(task) => {
            let kit = actor.kit_mut();
            match (kit.senser.as_mut(), kit.mover.as_mut()) {
                (Some(senser), Some(mover)) => sensing::seek(senser, mover, task, origin, world),
                _ => Action::empty(),
            }
        }
        Routine::Hunt => hunt(actor.kit_mut(), origin, world),
    }
}

/// Executes matured effects against a world.
pub struct Resolver<'w, W: ?Sized> {
    world: &'w mut W,
}

impl<'w, W: SurroundingsMut + ?Sized> Resolver<'w, W> {
    pub fn new(world: &'w mut W) -> Self {
        Self { world }
    }
}

impl<W: SurroundingsMut + ?Sized> Executor for Resolver<'_, W> {
    /// Broken or unconscious actors do nothing and pay nothing.
    fn execute(&mut self, effect: &Effect, origin: Point, actor: &mut Entity) -> WorldResult<u32> {
        if !actor.is_active() {
            return Ok(0);
        }
        match effect {
            Effect::Idle => Ok(0),
            Effect::Step => movement::execute_step(actor, origin, self.world),
            Effect::Wander => movement::execute_wander(actor, origin, self.world),
            Effect::Strike { dest, target } => {
                combat::execute_strike(actor, *dest, *target, self.world)
            }
        }
    }
}

/// Advance `actor`, standing at `origin`, by one tick.
///
/// Requests a new action when none is pending, ticks it, keeps it if it has
/// not matured, then applies upkeep.
pub fn tick_entity<W: SurroundingsMut + ?Sized>(
    actor:  &mut Entity,
    origin: Point,
    world:  &mut W,
) -> WorldResult<()> {
    let tick = actor.begin_tick();

    let mut action = match actor.take_action() {
        Some(action) => action,
        None => next_action(actor, origin, world),
    };

    let done = action.tick(origin, actor, &mut Resolver::new(world))?;
    if !done {
        actor.set_action(action);
    }

    if actor.apply_upkeep() {
        tracing::trace!(entity = %actor.id(), tick, "upkeep");
    }
    Ok(())
}
