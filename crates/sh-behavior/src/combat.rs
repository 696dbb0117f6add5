//! Attack.
//!
//! ```text
//! hit_chance = min(0, (target.agility - attack_skill) * 3) + uniform(0..=5)
//! hit        = percent roll < hit_chance
//! maxv       = floor(attack_strength / 8)
//! minv       = maxv - ceil(maxv / 2)
//! power      = max(1, attack_strength + uniform(-minv..=maxv))
//! damage     = power * (100 - target.resistance) / 100
//! ```
//!
//! The damage is then handed to `target.mod_health(-damage)`, which applies
//! the target's resistance once more.

use sh_core::{Dice, EntityId, Point, WorldResult};
use sh_entity::{Action, Attacker, Effect, Entity, VitalChange};

use crate::{as_ticks, SurroundingsMut};

/// Swing at `target`, expected at `dest`, after `attack_delay` ticks.
pub fn attack(attacker: &Attacker, dest: Point, target: EntityId) -> Action {
    Action::new(as_ticks(attacker.props().attack_delay), Effect::Strike { dest, target })
}

pub fn hit_chance(attack_skill: i32, target_agility: i32, dice: &mut dyn Dice) -> f64 {
    let evasion = (target_agility - attack_skill).saturating_mul(3).min(0);
    f64::from(evasion + dice.int_in(0, 5))
}

pub fn power(attack_strength: i32, dice: &mut dyn Dice) -> i32 {
    let maxv = attack_strength.div_euclid(8);
    let minv = maxv - (maxv + 1).div_euclid(2);
    (attack_strength + dice.int_in(-minv, maxv)).max(1)
}

pub fn damage(power: i32, target_resistance: i32) -> f64 {
    f64::from(power) * f64::from(100 - target_resistance) / 100.0
}

pub(crate) fn execute_strike<W: SurroundingsMut + ?Sized>(
    actor:  &Entity,
    dest:   Point,
    target: EntityId,
    world:  &mut W,
) -> WorldResult<u32> {
    let Some(props) = actor.kit().attacker.as_ref().map(Attacker::props) else {
        return Ok(0);
    };
    let cost = as_ticks(props.attack_cost);

    let Some(victim) = world.entity(target).filter(|e| e.is_intact()) else {
        tracing::debug!(entity = %actor.id(), %target, "strike target is gone");
        return Ok(0);
    };
    let (agility, resistance, victim_name) =
        (victim.body().agility, victim.body().resistance, victim.name());

    if world.locate(target) != Some(dest) {
        tracing::debug!(entity = %actor.id(), %target, %dest, "strike target moved away");
        world.log(format!("The {} {}s at empty air.", actor.name(), props.attack_name));
        return Ok(cost);
    }

    let dice = world.dice();
    let chance = hit_chance(props.attack_skill, agility, dice);
    if !dice.roll(chance) {
        tracing::debug!(entity = %actor.id(), %target, chance, "miss");
        world.log(format!("The {}'s {} misses the {victim_name}.", actor.name(), props.attack_name));
        return Ok(cost);
    }

    let dealt = damage(power(props.attack_strength, dice), resistance);
    let change = world.entity_mut(target).map(|victim| victim.mod_health(-dealt));

    world.log(format!(
        "The {}'s {} hits the {victim_name} for {dealt:.1}.",
        actor.name(),
        props.attack_name,
    ));
    if change == Some(VitalChange::Depleted) {
        tracing::debug!(entity = %actor.id(), %target, "target broken");
        world.log(format!("The {victim_name} is destroyed."));
    }
    Ok(cost)
}
