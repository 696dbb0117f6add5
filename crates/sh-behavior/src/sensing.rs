//! Sense and Seek.
//!
//! A scan rates every intact entity within `sensitivity` by how many of its
//! categories match the task's target categories.  A rating of zero is never
//! a target.  A strictly better rating replaces the remembered target; an
//! equal one replaces it on a coin flip.

use sh_core::{EntityId, Point};
use sh_entity::{Action, Mover, Senser};

use crate::{movement, Surroundings, SurroundingsMut};

/// `(point, id, priority)` for every intact entity near `origin` that shares
/// at least one category with `task`'s targets, in scan order.
pub fn candidates<W: Surroundings + ?Sized>(
    senser: &Senser,
    task:   &str,
    origin: Point,
    world:  &W,
) -> Vec<(Point, EntityId, usize)> {
    let Some(wanted) = senser.props().tracking.task(task) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    for point in world.view(origin, senser.props().sensitivity) {
        for id in world.entities_at(point) {
            let Some(entity) = world.entity(id) else {
                continue;
            };
            if !entity.is_intact() {
                continue;
            }
            let priority = entity.categories().matching(wanted);
            if priority > 0 {
                found.push((point, id, priority));
            }
        }
    }
    found
}

/// Full scan for `task`.  Returns `true` if the remembered target changed.
pub fn scan<W: SurroundingsMut + ?Sized>(
    senser: &mut Senser,
    task:   &str,
    origin: Point,
    world:  &mut W,
) -> bool {
    let found = candidates(senser, task, origin, world);
    let dice = world.dice();

    let mut changed = false;
    for (point, id, priority) in found {
        let best = senser.memory().priority;
        if priority > best || (priority == best && dice.coin()) {
            senser.remember(point, id, priority);
            changed = true;
        }
    }
    changed
}

/// Scan with probability `rescan_prob` percent; otherwise keep the stale
/// memory and report no change.
pub fn sense<W: SurroundingsMut + ?Sized>(
    senser: &mut Senser,
    task:   &str,
    origin: Point,
    world:  &mut W,
) -> bool {
    let rescan = f64::from(senser.props().rescan_prob);
    if !world.dice().roll(rescan) {
        return false;
    }
    scan(senser, task, origin, world)
}

/// Sense, and step toward the target if the memory changed.
///
/// An unchanged memory yields an empty action: the seeker idles instead of
/// continuing toward the last known point.
pub fn seek<W: SurroundingsMut + ?Sized>(
    senser: &mut Senser,
    mover:  &mut Mover,
    task:   &str,
    origin: Point,
    world:  &mut W,
) -> Action {
    if !sense(senser, task, origin, world) {
        return Action::empty();
    }
    if let Some(point) = senser.memory().point {
        mover.change_dir(point - origin);
    }
    movement::step(mover)
}
