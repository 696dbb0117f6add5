//! Unit tests for sh-behavior.

use std::collections::BTreeMap;

use sh_core::{Dice, EntityId, Point, WorldError, WorldResult};
use sh_entity::{Entity, Kind};

use crate::{tick_entity, Surroundings, SurroundingsMut};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Dice that always land the same way.
///
/// `int_in` clamps `int` into the requested range and `below` clamps
/// `index`, so one value can script every draw of a test.
#[derive(Clone, Debug)]
struct Loaded {
    percent: f64,
    int:     i32,
    coin:    bool,
    index:   usize,
}

impl Loaded {
    fn rolling(percent: f64) -> Self {
        Self { percent, int: 0, coin: false, index: 0 }
    }
}

impl Dice for Loaded {
    fn percent(&mut self) -> f64 {
        self.percent
    }

    fn coin(&mut self) -> bool {
        self.coin
    }

    fn int_in(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo { lo } else { self.int.clamp(lo, hi) }
    }

    fn below(&mut self, n: usize) -> usize {
        self.index.min(n - 1)
    }
}

/// A minimal bounded grid implementing the behaviour-facing traits.
struct Arena {
    width:    i32,
    height:   i32,
    cells:    BTreeMap<Point, Vec<EntityId>>,
    placed:   BTreeMap<EntityId, (Point, bool)>,
    store:    BTreeMap<EntityId, Entity>,
    dice:     Loaded,
    messages: Vec<String>,
}

impl Arena {
    fn new(width: i32, height: i32, dice: Loaded) -> Self {
        Self {
            width,
            height,
            cells: BTreeMap::new(),
            placed: BTreeMap::new(),
            store: BTreeMap::new(),
            dice,
            messages: Vec::new(),
        }
    }

    fn place(&mut self, point: Point, entity: Entity) -> EntityId {
        let id = entity.id();
        self.placed.insert(id, (point, entity.traversable()));
        self.cells.entry(point).or_default().push(id);
        self.store.insert(id, entity);
        id
    }

    fn spawn(&mut self, point: Point, kind: Kind) -> EntityId {
        let entity = kind.spawn(&mut self.dice).unwrap();
        self.place(point, entity)
    }

    fn at(&self, id: EntityId) -> Point {
        self.placed[&id].0
    }

    fn get(&self, id: EntityId) -> &Entity {
        &self.store[&id]
    }

    /// Tick `id` `n` times, checking it out of the store each time.
    fn run(&mut self, id: EntityId, n: usize) {
        for _ in 0..n {
            let origin = self.at(id);
            let mut actor = self.store.remove(&id).unwrap();
            tick_entity(&mut actor, origin, self).unwrap();
            self.store.insert(id, actor);
        }
    }
}

impl Surroundings for Arena {
    fn in_bounds(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    fn is_traversable(&self, p: Point) -> bool {
        self.in_bounds(p)
            && self
                .cells
                .get(&p)
                .is_none_or(|ids| ids.iter().all(|id| self.placed[id].1))
    }

    fn entities_at(&self, p: Point) -> Vec<EntityId> {
        self.cells.get(&p).cloned().unwrap_or_default()
    }

    fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.store.get(&id)
    }

    fn locate(&self, id: EntityId) -> Option<Point> {
        self.placed.get(&id).map(|(p, _)| *p)
    }
}

impl SurroundingsMut for Arena {
    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.store.get_mut(&id)
    }

    fn relocate(&mut self, id: EntityId, src: Point, dest: Point) -> WorldResult<()> {
        let ids = self.cells.entry(src).or_default();
        let Some(i) = ids.iter().position(|&x| x == id) else {
            return Err(WorldError::EntityNotFound { point: src, id });
        };
        ids.remove(i);
        self.cells.entry(dest).or_default().push(id);
        if let Some(slot) = self.placed.get_mut(&id) {
            slot.0 = dest;
        }
        Ok(())
    }

    fn dice(&mut self) -> &mut dyn Dice {
        &mut self.dice
    }

    fn log(&mut self, message: String) {
        self.messages.push(message);
    }
}

fn with_heading(kind: Kind, heading: Point) -> Entity {
    Entity::new(kind, kind.blueprint().heading(heading)).unwrap()
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement_tests {
    use sh_entity::{Blueprint, WanderProps};

    use super::*;
    use crate::{choose_dest, step, Resolver};

    fn straight_shrub(heading: Point) -> Entity {
        let bp: Blueprint = Kind::WanderingShrub
            .blueprint()
            .wander(WanderProps::STRAIGHT)
            .heading(heading);
        Entity::new(Kind::WanderingShrub, bp).unwrap()
    }

    #[test]
    fn auto_move_straight_keeps_heading() {
        let mut arena = Arena::new(5, 5, Loaded::rolling(50.0));
        let id = arena.place(Point::new(2, 2), straight_shrub(Point::new(1, 0)));

        arena.run(id, 9);
        assert_eq!(arena.at(id), Point::new(2, 2));

        arena.run(id, 1);
        assert_eq!(arena.at(id), Point::new(3, 2));
        let heading = arena.get(id).kit().mover.as_ref().unwrap().heading();
        assert_eq!(heading, Point::new(1, 0));
    }

    #[test]
    fn auto_move_straight_for_any_roll() {
        for percent in [0.0, 33.3, 99.9] {
            let mut arena = Arena::new(5, 5, Loaded { index: 4, ..Loaded::rolling(percent) });
            let id = arena.place(Point::new(2, 2), straight_shrub(Point::new(1, 0)));
            arena.run(id, 10);
            assert_eq!(arena.at(id), Point::new(3, 2), "roll {percent}");
        }
    }

    #[test]
    fn zero_move_prob_stays_put() {
        let mut arena = Arena::new(5, 5, Loaded::rolling(50.0));
        let bp = Kind::WanderingShrub
            .blueprint()
            .wander(WanderProps { move_prob: 0, pivot_prob: 0 })
            .heading(Point::new(1, 0));
        let id = arena.place(Point::new(2, 2), Entity::new(Kind::WanderingShrub, bp).unwrap());
        arena.run(id, 10);
        assert_eq!(arena.at(id), Point::new(2, 2));
        assert_eq!(arena.get(id).energy(), Some(100.0));
    }

    #[test]
    fn boxed_in_wanderer_pays_nothing() {
        let mut arena = Arena::new(3, 3, Loaded::rolling(0.0));
        for p in Point::new(1, 1).in_radius(1) {
            arena.spawn(p, Kind::StonePillar);
        }
        let id = arena.place(Point::new(1, 1), straight_shrub(Point::new(1, 0)));
        arena.run(id, 10);
        assert_eq!(arena.at(id), Point::new(1, 1));
        assert_eq!(arena.get(id).energy(), Some(100.0));
    }

    #[test]
    fn pivot_picks_uniformly() {
        let mut arena = Arena::new(5, 5, Loaded { index: 0, ..Loaded::rolling(10.0) });
        let bp = Kind::WanderingShrub
            .blueprint()
            .wander(WanderProps { move_prob: 100, pivot_prob: 100 })
            .heading(Point::new(1, 0));
        let shrub = Entity::new(Kind::WanderingShrub, bp).unwrap();
        let mover = shrub.kit().mover.as_ref().unwrap();
        let wander = mover.wander().unwrap().clone();
        // Index 0 is the first traversable neighbour in row-major order.
        let dest = choose_dest(mover, &wander, Point::new(2, 2), &mut arena);
        assert_eq!(dest, Some(Point::new(1, 1)));
    }

    #[test]
    fn blocked_straight_falls_back() {
        let mut arena = Arena::new(5, 5, Loaded { index: 2, ..Loaded::rolling(10.0) });
        arena.spawn(Point::new(3, 2), Kind::StonePillar);
        let shrub = straight_shrub(Point::new(1, 0));
        let mover = shrub.kit().mover.as_ref().unwrap();
        let dest = choose_dest(mover, &WanderProps::STRAIGHT, Point::new(2, 2), &mut arena);
        // Candidates: (1,1) (2,1) (3,1) (1,2) (1,3) (2,3) (3,3).
        assert_eq!(dest, Some(Point::new(3, 1)));
    }

    #[test]
    fn step_moves_and_charges() {
        let mut arena = Arena::new(5, 5, Loaded::rolling(50.0));
        let mut player = with_heading(Kind::Player, Point::new(0, 1));
        let id = player.id();
        arena.placed.insert(id, (Point::new(2, 2), false));
        arena.cells.entry(Point::new(2, 2)).or_default().push(id);

        let mut action = step(player.kit().mover.as_ref().unwrap());
        assert_eq!(action.delay(), 10);
        for _ in 0..10 {
            action.tick(Point::new(2, 2), &mut player, &mut Resolver::new(&mut arena)).unwrap();
        }
        assert_eq!(arena.at(id), Point::new(2, 3));
        assert_eq!(player.energy(), Some(90.0));
    }

    #[test]
    fn step_into_occupant_aborts() {
        let mut arena = Arena::new(5, 5, Loaded::rolling(50.0));
        arena.spawn(Point::new(3, 2), Kind::StonePillar);
        let mut player = with_heading(Kind::Player, Point::new(1, 0));
        let id = player.id();
        arena.placed.insert(id, (Point::new(2, 2), false));
        arena.cells.entry(Point::new(2, 2)).or_default().push(id);

        let mut action = step(player.kit().mover.as_ref().unwrap());
        for _ in 0..10 {
            action.tick(Point::new(2, 2), &mut player, &mut Resolver::new(&mut arena)).unwrap();
        }
        assert!(action.is_done());
        assert_eq!(arena.at(id), Point::new(2, 2));
        assert_eq!(player.energy(), Some(100.0));
    }

    #[test]
    fn step_onto_grass_is_allowed() {
        let mut arena = Arena::new(5, 5, Loaded::rolling(50.0));
        arena.spawn(Point::new(3, 2), Kind::Grass);
        let mut player = with_heading(Kind::Player, Point::new(1, 0));
        let id = player.id();
        arena.placed.insert(id, (Point::new(2, 2), false));
        arena.cells.entry(Point::new(2, 2)).or_default().push(id);

        let mut action = step(player.kit().mover.as_ref().unwrap());
        for _ in 0..10 {
            action.tick(Point::new(2, 2), &mut player, &mut Resolver::new(&mut arena)).unwrap();
        }
        assert_eq!(arena.at(id), Point::new(3, 2));
        assert_eq!(arena.entities_at(Point::new(3, 2)).len(), 2);
    }

    #[test]
    fn step_off_the_edge_aborts() {
        let mut arena = Arena::new(3, 3, Loaded::rolling(50.0));
        let mut player = with_heading(Kind::Player, Point::new(-1, 0));
        let id = player.id();
        arena.placed.insert(id, (Point::new(0, 1), false));
        arena.cells.entry(Point::new(0, 1)).or_default().push(id);

        let mut action = step(player.kit().mover.as_ref().unwrap());
        for _ in 0..10 {
            action.tick(Point::new(0, 1), &mut player, &mut Resolver::new(&mut arena)).unwrap();
        }
        assert_eq!(arena.at(id), Point::new(0, 1));
    }
}

// ── Sensing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sensing_tests {
    use sh_entity::{Effect, Routine};

    use super::*;
    use crate::{scan, seek, sense};

    #[test]
    fn scan_prefers_more_matching_categories() {
        let mut arena = Arena::new(10, 10, Loaded::rolling(50.0));
        arena.spawn(Point::new(1, 0), Kind::Grass);
        arena.spawn(Point::new(2, 0), Kind::Player);
        arena.spawn(Point::new(3, 0), Kind::StonePillar);
        let prey = arena.spawn(Point::new(4, 4), Kind::GluttonousShambler);

        let mut hunter = Kind::GluttonousShambler.spawn(&mut Loaded::rolling(0.0)).unwrap();
        let senser = hunter.kit_mut().senser.as_mut().unwrap();
        assert!(scan(senser, Routine::HUNT_TASK, Point::ZERO, &mut arena));

        let memory = senser.memory();
        assert_eq!(memory.focus(), Some((Point::new(4, 4), prey)));
        assert_eq!(memory.priority, 2);
    }

    #[test]
    fn ties_follow_the_coin() {
        for (coin, expected) in [(false, Point::new(1, 0)), (true, Point::new(2, 0))] {
            let mut arena = Arena::new(5, 5, Loaded { coin, ..Loaded::rolling(50.0) });
            arena.spawn(Point::new(1, 0), Kind::Grass);
            arena.spawn(Point::new(2, 0), Kind::Grass);

            let mut hunter = Kind::GluttonousShambler.spawn(&mut Loaded::rolling(0.0)).unwrap();
            let senser = hunter.kit_mut().senser.as_mut().unwrap();
            scan(senser, Routine::HUNT_TASK, Point::ZERO, &mut arena);
            assert_eq!(senser.memory().point, Some(expected), "coin {coin}");
        }
    }

    #[test]
    fn scan_ignores_out_of_range_and_broken() {
        let mut arena = Arena::new(20, 20, Loaded::rolling(50.0));
        arena.spawn(Point::new(9, 9), Kind::Player);
        let corpse = arena.spawn(Point::new(1, 1), Kind::Player);
        arena.store.get_mut(&corpse).unwrap().mod_health(-1_000.0);

        let mut hunter = Kind::GluttonousShambler.spawn(&mut Loaded::rolling(0.0)).unwrap();
        let senser = hunter.kit_mut().senser.as_mut().unwrap();
        assert!(!scan(senser, Routine::HUNT_TASK, Point::ZERO, &mut arena));
        assert_eq!(senser.memory().focus(), None);
        assert_eq!(senser.memory().priority, 0);
    }

    #[test]
    fn sense_is_gated_by_rescan_prob() {
        // rescan_prob 5: a roll of 50 skips the scan, a roll of 1 performs it.
        let mut arena = Arena::new(5, 5, Loaded::rolling(50.0));
        arena.spawn(Point::new(1, 1), Kind::Player);
        let mut hunter = Kind::GluttonousShambler.spawn(&mut Loaded::rolling(0.0)).unwrap();
        let senser = hunter.kit_mut().senser.as_mut().unwrap();

        assert!(!sense(senser, Routine::HUNT_TASK, Point::ZERO, &mut arena));
        assert_eq!(senser.memory().focus(), None);

        arena.dice.percent = 1.0;
        assert!(sense(senser, Routine::HUNT_TASK, Point::ZERO, &mut arena));
        assert_eq!(senser.memory().point, Some(Point::new(1, 1)));
    }

    #[test]
    fn seek_steps_toward_new_target() {
        let mut arena = Arena::new(10, 10, Loaded::rolling(1.0));
        arena.spawn(Point::new(5, 0), Kind::Player);
        let mut hunter = with_heading(Kind::GluttonousShambler, Point::new(0, 1));
        let kit = hunter.kit_mut();
        let (senser, mover) = (kit.senser.as_mut().unwrap(), kit.mover.as_mut().unwrap());

        let action = seek(senser, mover, Routine::HUNT_TASK, Point::new(2, 3), &mut arena);
        assert_eq!(action.effect(), &Effect::Step);
        assert_eq!(action.delay(), 10);
        assert_eq!(mover.heading(), Point::new(1, -1));
    }

    #[test]
    fn seek_idles_when_memory_is_unchanged() {
        let mut arena = Arena::new(10, 10, Loaded::rolling(1.0));
        arena.spawn(Point::new(5, 0), Kind::Player);
        let mut hunter = with_heading(Kind::GluttonousShambler, Point::new(0, 1));
        let kit = hunter.kit_mut();
        let (senser, mover) = (kit.senser.as_mut().unwrap(), kit.mover.as_mut().unwrap());

        seek(senser, mover, Routine::HUNT_TASK, Point::new(2, 3), &mut arena);
        // Same single target, coin says keep: nothing changed.
        let again = seek(senser, mover, Routine::HUNT_TASK, Point::new(2, 3), &mut arena);
        assert_eq!(again.effect(), &Effect::Idle);
        assert_eq!(again.delay(), 0);
    }
}

// ── Combat ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod combat_tests {
    use sh_entity::{Action, Effect};

    use super::*;
    use crate::{attack, damage, hit_chance, power, Resolver};

    /// Shambler at (1,1) striking another shambler at (2,1).
    fn duel(dice: Loaded) -> (Arena, Entity, EntityId, Action) {
        let mut arena = Arena::new(4, 4, dice);
        let target = arena.spawn(Point::new(2, 1), Kind::GluttonousShambler);
        let attacker = Kind::GluttonousShambler.spawn(&mut Loaded::rolling(0.0)).unwrap();
        let action = attack(attacker.kit().attacker.as_ref().unwrap(), Point::new(2, 1), target);
        (arena, attacker, target, action)
    }

    fn resolve(arena: &mut Arena, attacker: &mut Entity, action: &mut Action) {
        while !action.tick(Point::new(1, 1), attacker, &mut Resolver::new(arena)).unwrap() {}
    }

    #[test]
    fn hit_chance_formula() {
        let mut top = Loaded { int: 5, ..Loaded::rolling(0.0) };
        assert_eq!(hit_chance(10, 10, &mut top), 5.0);
        // Evasion above skill is clamped to zero.
        assert_eq!(hit_chance(1, 30, &mut top), 5.0);
        assert_eq!(hit_chance(10, 0, &mut top), -25.0);
        let mut bottom = Loaded { int: 0, ..Loaded::rolling(0.0) };
        assert_eq!(hit_chance(10, 10, &mut bottom), 0.0);
    }

    #[test]
    fn power_spread() {
        // strength 18: maxv 2, minv 1, so power is in 17..=20.
        let mut high = Loaded { int: 99, ..Loaded::rolling(0.0) };
        let mut low = Loaded { int: -99, ..Loaded::rolling(0.0) };
        assert_eq!(power(18, &mut high), 20);
        assert_eq!(power(18, &mut low), 17);
        // Weak attacks have no spread and never drop below 1.
        assert_eq!(power(1, &mut low), 1);
        assert_eq!(power(7, &mut high), 7);
    }

    #[test]
    fn damage_formula() {
        assert_eq!(damage(20, 35), 13.0);
        assert_eq!(damage(20, 100), 0.0);
        assert_eq!(damage(18, 0), 18.0);
    }

    #[test]
    fn strike_has_attack_delay() {
        let (_, _, target, action) = duel(Loaded::rolling(0.0));
        assert_eq!(action.delay(), 15);
        assert_eq!(action.effect(), &Effect::Strike { dest: Point::new(2, 1), target });
    }

    #[test]
    fn roll_below_chance_always_hits() {
        for roll in [0.0, 1.5, 3.0, 4.99] {
            let (mut arena, mut attacker, target, mut action) =
                duel(Loaded { int: 5, ..Loaded::rolling(roll) });
            resolve(&mut arena, &mut attacker, &mut action);
            // power 20, damage 13, softened again by resistance 35 in mod_health.
            let health = arena.get(target).health();
            assert!((health - (85.0 - 8.45)).abs() < 1e-9, "roll {roll}: {health}");
            assert_eq!(attacker.energy(), Some(95.0));
            assert!(arena.messages[0].contains("hits"));
        }
    }

    #[test]
    fn roll_above_chance_always_misses() {
        for roll in [5.0, 7.5, 50.0, 99.9] {
            let (mut arena, mut attacker, target, mut action) =
                duel(Loaded { int: 5, ..Loaded::rolling(roll) });
            resolve(&mut arena, &mut attacker, &mut action);
            assert_eq!(arena.get(target).health(), 85.0, "roll {roll}");
            assert_eq!(attacker.energy(), Some(95.0));
            assert!(arena.messages[0].contains("misses"));
        }
    }

    #[test]
    fn target_that_moved_is_a_whiff() {
        let (mut arena, mut attacker, target, mut action) =
            duel(Loaded { int: 5, ..Loaded::rolling(0.0) });
        arena.relocate(target, Point::new(2, 1), Point::new(3, 3)).unwrap();
        resolve(&mut arena, &mut attacker, &mut action);
        assert_eq!(arena.get(target).health(), 85.0);
        assert_eq!(attacker.energy(), Some(95.0));
        assert_eq!(arena.messages, vec!["The gluttonous shambler slams at empty air.".to_string()]);
    }

    #[test]
    fn broken_target_costs_nothing() {
        let (mut arena, mut attacker, target, mut action) =
            duel(Loaded { int: 5, ..Loaded::rolling(0.0) });
        arena.store.get_mut(&target).unwrap().mod_health(-10_000.0);
        resolve(&mut arena, &mut attacker, &mut action);
        assert_eq!(attacker.energy(), Some(100.0));
        assert!(arena.messages.is_empty());
    }

    #[test]
    fn broken_attacker_is_inert() {
        let (mut arena, mut attacker, target, mut action) =
            duel(Loaded { int: 5, ..Loaded::rolling(0.0) });
        attacker.mod_health(-10_000.0);
        resolve(&mut arena, &mut attacker, &mut action);
        assert_eq!(arena.get(target).health(), 85.0);
    }

    #[test]
    fn killing_blow_is_logged() {
        let mut arena = Arena::new(4, 4, Loaded { int: 5, ..Loaded::rolling(0.0) });
        let victim = arena.spawn(Point::new(2, 1), Kind::Player);
        // 105 damage at resistance 10 leaves 5.5 health.
        arena.store.get_mut(&victim).unwrap().mod_health(-105.0);
        let mut attacker = Kind::GluttonousShambler.spawn(&mut Loaded::rolling(0.0)).unwrap();
        let mut action = attack(attacker.kit().attacker.as_ref().unwrap(), Point::new(2, 1), victim);
        resolve(&mut arena, &mut attacker, &mut action);
        assert!(!arena.get(victim).is_intact());
        assert_eq!(arena.messages.last().map(String::as_str), Some("The shepherd is destroyed."));
    }
}

// ── Routines ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routine_tests {
    use sh_entity::{Effect, Routine};

    use super::*;
    use crate::{hunt, next_action};

    #[test]
    fn hunter_strikes_adjacent_prey() {
        let mut arena = Arena::new(6, 6, Loaded::rolling(50.0));
        let prey = arena.spawn(Point::new(3, 2), Kind::Player);
        let mut hunter = Kind::GluttonousShambler.spawn(&mut Loaded::rolling(0.0)).unwrap();
        let action = hunt(hunter.kit_mut(), Point::new(2, 2), &mut arena);
        assert_eq!(action.effect(), &Effect::Strike { dest: Point::new(3, 2), target: prey });
    }

    #[test]
    fn hunter_roams_toward_distant_prey() {
        let mut arena = Arena::new(10, 10, Loaded::rolling(50.0));
        arena.spawn(Point::new(6, 2), Kind::Player);
        let mut hunter = with_heading(Kind::GluttonousShambler, Point::new(-1, 0));
        let action = hunt(hunter.kit_mut(), Point::new(2, 5), &mut arena);
        assert_eq!(action.effect(), &Effect::Wander);
        let heading = hunter.kit().mover.as_ref().unwrap().heading();
        assert_eq!(heading, Point::new(1, -1));
    }

    #[test]
    fn hunter_forgets_broken_prey() {
        let mut arena = Arena::new(6, 6, Loaded::rolling(50.0));
        let prey = arena.spawn(Point::new(3, 2), Kind::Player);
        let mut hunter = Kind::GluttonousShambler.spawn(&mut Loaded::rolling(0.0)).unwrap();
        hunt(hunter.kit_mut(), Point::new(2, 2), &mut arena);

        arena.store.get_mut(&prey).unwrap().mod_health(-10_000.0);
        let action = hunt(hunter.kit_mut(), Point::new(2, 2), &mut arena);
        assert_eq!(action.effect(), &Effect::Wander);
        let senser = hunter.kit().senser.as_ref().unwrap();
        assert_eq!(senser.memory().focus(), None);
    }

    #[test]
    fn hunter_follows_prey_that_moved() {
        let mut arena = Arena::new(10, 10, Loaded::rolling(50.0));
        let prey = arena.spawn(Point::new(3, 2), Kind::Player);
        let mut hunter = Kind::GluttonousShambler.spawn(&mut Loaded::rolling(0.0)).unwrap();
        hunt(hunter.kit_mut(), Point::new(2, 2), &mut arena);

        // Equal priority and a losing coin: the scan alone keeps the old point.
        arena.relocate(prey, Point::new(3, 2), Point::new(5, 2)).unwrap();
        let action = hunt(hunter.kit_mut(), Point::new(2, 2), &mut arena);

        assert_eq!(action.effect(), &Effect::Wander);
        let kit = hunter.kit();
        assert_eq!(kit.senser.as_ref().unwrap().memory().focus(), Some((Point::new(5, 2), prey)));
        assert_eq!(kit.mover.as_ref().unwrap().heading(), Point::new(1, 0));
    }

    #[test]
    fn hunter_drops_prey_out_of_range() {
        let mut arena = Arena::new(20, 5, Loaded::rolling(50.0));
        let prey = arena.spawn(Point::new(3, 2), Kind::Player);
        let mut hunter = Kind::GluttonousShambler.spawn(&mut Loaded::rolling(0.0)).unwrap();
        hunt(hunter.kit_mut(), Point::new(2, 2), &mut arena);

        arena.relocate(prey, Point::new(3, 2), Point::new(15, 2)).unwrap();
        let action = hunt(hunter.kit_mut(), Point::new(2, 2), &mut arena);

        assert_eq!(action.effect(), &Effect::Wander);
        assert_eq!(hunter.kit().senser.as_ref().unwrap().memory().focus(), None);
    }

    #[test]
    fn routines_pick_their_effects() {
        let mut arena = Arena::new(4, 4, Loaded::rolling(50.0));
        let mut rng = Loaded::rolling(0.0);

        let mut grass = Kind::Grass.spawn(&mut rng).unwrap();
        assert_eq!(next_action(&mut grass, Point::ZERO, &mut arena).effect(), &Effect::Idle);

        let mut shrub = Kind::WanderingShrub.spawn(&mut rng).unwrap();
        let action = next_action(&mut shrub, Point::ZERO, &mut arena);
        assert_eq!((action.effect(), action.delay()), (&Effect::Wander, 10));

        let mut player = Kind::Player.spawn(&mut rng).unwrap();
        assert_eq!(next_action(&mut player, Point::ZERO, &mut arena).effect(), &Effect::Idle);
        assert_eq!(Kind::GluttonousShambler.routine(), Routine::Hunt);
    }

    #[test]
    fn broken_actor_requests_nothing() {
        let mut arena = Arena::new(4, 4, Loaded::rolling(50.0));
        let mut shrub = Kind::WanderingShrub.spawn(&mut Loaded::rolling(0.0)).unwrap();
        shrub.mod_health(-10_000.0);
        let action = next_action(&mut shrub, Point::ZERO, &mut arena);
        assert_eq!(action.effect(), &Effect::Idle);
    }

    #[test]
    fn pending_action_survives_between_ticks() {
        let mut arena = Arena::new(5, 5, Loaded::rolling(50.0));
        let id = arena.spawn(Point::new(2, 2), Kind::WanderingShrub);
        arena.run(id, 4);
        let pending = arena.get(id).state().action.unwrap();
        assert_eq!((pending.effect, pending.elapsed, pending.delay), ("wander", 4, 10));
    }

    #[test]
    fn organisms_pay_upkeep_every_ten_ticks() {
        let mut arena = Arena::new(5, 5, Loaded::rolling(50.0));
        let id = arena.spawn(Point::new(2, 2), Kind::Player);
        arena.run(id, 9);
        assert_eq!(arena.get(id).energy(), Some(100.0));
        arena.run(id, 1);
        assert_eq!(arena.get(id).energy(), Some(99.0));
        assert_eq!(arena.get(id).ticks(), 10);
    }
}
