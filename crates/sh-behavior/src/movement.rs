//! Move and AutoMove.
//!
//! A `Step` goes exactly one cell along the mover's heading and gives up
//! (cost 0) if that cell is blocked.  A `Wander` first rolls `move_prob`,
//! then picks a destination with [`choose_dest`] and adopts the step it took
//! as its new heading.

use sh_core::{Point, WorldResult};
use sh_entity::{Action, Effect, Entity, Mover, WanderProps};

use crate::{as_ticks, SurroundingsMut};

/// A directed one-cell move after `move_delay` ticks.
pub fn step(mover: &Mover) -> Action {
    Action::new(as_ticks(mover.props().move_delay), Effect::Step)
}

/// A randomised move after `move_delay` ticks.
pub fn auto_move(mover: &Mover) -> Action {
    Action::new(as_ticks(mover.props().move_delay), Effect::Wander)
}

/// Pick a traversable neighbour of `origin`.
///
/// With `pivot_prob` percent chance the pick is uniform; otherwise the mover
/// keeps going straight when it can and falls back to a uniform pick when it
/// can't.  `None` when every neighbour is blocked.
pub fn choose_dest<W: SurroundingsMut + ?Sized>(
    mover:  &Mover,
    wander: &WanderProps,
    origin: Point,
    world:  &mut W,
) -> Option<Point> {
    let candidates = world.view_traversable(origin, 1);
    if candidates.is_empty() {
        return None;
    }

    let dice = world.dice();
    let straight = origin + mover.heading();
    if dice.roll(f64::from(wander.pivot_prob)) || !candidates.contains(&straight) {
        return candidates.get(dice.below(candidates.len())).copied();
    }
    Some(straight)
}

pub(crate) fn execute_step<W: SurroundingsMut + ?Sized>(
    actor:  &mut Entity,
    origin: Point,
    world:  &mut W,
) -> WorldResult<u32> {
    let Some(mover) = actor.kit().mover.as_ref() else {
        return Ok(0);
    };
    let dest = origin + mover.heading();
    let cost = as_ticks(mover.props().move_cost);

    if dest == origin || !world.is_traversable(dest) {
        tracing::debug!(entity = %actor.id(), name = actor.name(), %dest, "step blocked");
        return Ok(0);
    }
    world.relocate(actor.id(), origin, dest)?;
    Ok(cost)
}

pub(crate) fn execute_wander<W: SurroundingsMut + ?Sized>(
    actor:  &mut Entity,
    origin: Point,
    world:  &mut W,
) -> WorldResult<u32> {
    let id = actor.id();
    let name = actor.name();
    let Some(mover) = actor.kit_mut().mover.as_mut() else {
        return Ok(0);
    };
    let wander = mover.wander().cloned().unwrap_or_default();

    if !world.dice().roll(f64::from(wander.move_prob)) {
        return Ok(0);
    }

    let Some(dest) = choose_dest(mover, &wander, origin, world) else {
        tracing::debug!(entity = %id, name, "no adjacent cell is traversable");
        return Ok(0);
    };

    mover.change_dir(dest - origin);
    world.relocate(id, origin, dest)?;
    Ok(as_ticks(mover.props().move_cost))
}
