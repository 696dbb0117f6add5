//! The grid, its indices and the world tick.

use std::collections::BTreeSet;

use sh_behavior::{Surroundings, SurroundingsMut};
use sh_core::{Dice, EntityId, Point, SimRng, WorldError, WorldResult};
use sh_entity::Entity;

use crate::Cell;

#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = std::collections::HashMap<K, V>;

/// Where an entity is, plus the facts the grid needs about it while the
/// entity itself is checked out for its tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub point:       Point,
    pub name:        &'static str,
    pub traversable: bool,
}

/// A fixed `width × height` grid of [`Cell`]s and the entities in them.
///
/// # Invariants
///
/// - Every id in a cell has exactly one [`Placement`] whose point is that
///   cell, and vice versa.
/// - No cell holds more than one blocking entity.
/// - The name index lists every placed non-player entity under its name.
#[derive(Debug)]
pub struct World {
    width:      i32,
    height:     i32,
    cells:      Vec<Cell>,
    index:      Map<EntityId, Placement>,
    names:      Map<&'static str, BTreeSet<EntityId>>,
    entities:   Map<EntityId, Entity>,
    player:     Option<EntityId>,
    rng:        SimRng,
    messages:   Vec<String>,
    ticks:      u64,
}

/// Cells in a `width` by `height` grid, multiplied in `usize` so large
/// grids cannot wrap.  Negative dimensions count as zero.
pub(crate) fn cell_count(width: i32, height: i32) -> usize {
    width.max(0) as usize * height.max(0) as usize
}

impl World {
    /// Drawn for cells with nothing in them.
    pub const EMPTY_GLYPH: char = ' ';

    /// An empty world whose single RNG is seeded with `seed`.  Negative
    /// dimensions are treated as zero.
    pub fn new(width: i32, height: i32, seed: u64) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        let mut cells = Vec::with_capacity(cell_count(width, height));
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(Point::new(x, y)));
            }
        }
        Self {
            width,
            height,
            cells,
            index: Map::default(),
            names: Map::default(),
            entities: Map::default(),
            player: None,
            rng: SimRng::new(seed),
            messages: Vec::new(),
            ticks: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// World ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn rng(&mut self) -> &mut SimRng {
        &mut self.rng
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn in_bounds(&self, point: Point) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }

    fn cell_index(&self, point: Point) -> WorldResult<usize> {
        if !self.in_bounds(point) {
            return Err(WorldError::OutOfBounds(point));
        }
        Ok(point.y as usize * self.width as usize + point.x as usize)
    }

    /// `true` if `point` is in bounds and has no blocking occupant.
    pub fn traversable(&self, point: Point) -> bool {
        self.cell_index(point)
            .is_ok_and(|i| self.cells[i].occupant().is_none())
    }

    pub fn get_cell(&self, point: Point) -> WorldResult<&Cell> {
        let i = self.cell_index(point)?;
        Ok(&self.cells[i])
    }

    /// The topmost entity at `point`, if any.
    pub fn get_entity(&self, point: Point) -> WorldResult<Option<&Entity>> {
        let cell = self.get_cell(point)?;
        Ok(cell.top().and_then(|id| self.entities.get(&id)))
    }

    /// The `z`th entity at `point`, floor first.
    pub fn get_entity_at(&self, point: Point, z: usize) -> WorldResult<&Entity> {
        let id = self.get_cell(point)?.get(z)?;
        self.entities
            .get(&id)
            .ok_or(WorldError::EntityNotFound { point, id })
    }

    /// Every cell with its point, row-major.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.cells.iter().map(|c| (c.point(), c))
    }

    /// In-bounds points within `radius` of `origin`, row-major.
    pub fn view(&self, origin: Point, radius: i32) -> Vec<Point> {
        Surroundings::view(self, origin, radius)
    }

    /// Traversable points within `radius` of `origin`, row-major.
    pub fn view_traversable(&self, origin: Point, radius: i32) -> Vec<Point> {
        Surroundings::view_traversable(self, origin, radius)
    }

    pub fn get_entity_by_id(&self, id: EntityId) -> Option<(Point, &Entity)> {
        let placement = self.index.get(&id)?;
        Some((placement.point, self.entities.get(&id)?))
    }

    /// All non-player entities called `name`, in id order.
    pub fn get_entities_by_name(&self, name: &str) -> Vec<(Point, &Entity)> {
        self.names
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|&id| self.get_entity_by_id(id))
            .collect()
    }

    pub fn player(&self) -> Option<&Entity> {
        self.player.and_then(|id| self.entities.get(&id))
    }

    pub fn player_id(&self) -> Option<EntityId> {
        self.player
    }

    pub fn player_pos(&self) -> Option<Point> {
        self.player
            .and_then(|id| self.index.get(&id))
            .map(|p| p.point)
    }

    // ── Updates ───────────────────────────────────────────────────────────

    /// Place `entity` at `point`.
    ///
    /// Fails without changing anything if `point` is out of bounds, the
    /// entity is already placed, or a blocking entity would join another.
    pub fn add(&mut self, point: Point, entity: Entity) -> WorldResult<EntityId> {
        let i = self.cell_index(point)?;
        let id = entity.id();
        if let Some(existing) = self.index.get(&id) {
            return Err(WorldError::AlreadyPlaced { point: existing.point, id });
        }

        let placement = Placement { point, name: entity.name(), traversable: entity.traversable() };
        self.cells[i].add(id, placement.name, placement.traversable)?;

        if entity.is_player() {
            self.player = Some(id);
        } else {
            self.names.entry(placement.name).or_default().insert(id);
        }
        self.index.insert(id, placement);
        self.entities.insert(id, entity);
        Ok(id)
    }

    /// Take `id` out of the world.
    pub fn remove(&mut self, point: Point, id: EntityId) -> WorldResult<Entity> {
        let i = self.cell_index(point)?;
        let not_found = WorldError::EntityNotFound { point, id };
        if !self.cells[i].contains(id) || !self.entities.contains_key(&id) {
            return Err(not_found);
        }

        self.cells[i].pop(id)?;
        if let Some(placement) = self.index.remove(&id) {
            if let Some(ids) = self.names.get_mut(placement.name) {
                ids.remove(&id);
            }
        }
        if self.player == Some(id) {
            self.player = None;
        }
        self.entities.remove(&id).ok_or(not_found)
    }

    /// Move `id` from `src` to `dest`.
    ///
    /// Fails without changing anything if either point is out of bounds,
    /// `id` is not at `src`, or `dest` cannot take it.
    pub fn move_entity(&mut self, id: EntityId, src: Point, dest: Point) -> WorldResult<()> {
        let from = self.cell_index(src)?;
        let to = self.cell_index(dest)?;
        let placement = match self.index.get(&id) {
            Some(p) if p.point == src && self.cells[from].contains(id) => *p,
            _ => return Err(WorldError::EntityNotFound { point: src, id }),
        };
        if src == dest {
            return Ok(());
        }
        if !self.cells[to].admits(placement.traversable) {
            return Err(WorldError::CellIsOccupied { point: dest, entity: id, name: placement.name });
        }

        self.cells[from].pop(id)?;
        self.cells[to].add(id, placement.name, placement.traversable)?;
        if let Some(p) = self.index.get_mut(&id) {
            p.point = dest;
        }
        Ok(())
    }

    /// Point the player along `delta` and commit it to a step, replacing
    /// whatever it had pending.  Returns `false` if there is no player or
    /// it cannot move.
    pub fn move_player(&mut self, delta: Point) -> bool {
        let Some(player) = self.player.and_then(|id| self.entities.get_mut(&id)) else {
            return false;
        };
        let Some(mover) = player.kit_mut().mover.as_mut() else {
            return false;
        };
        mover.change_dir(delta);
        let step = sh_behavior::step(mover);
        player.set_action(step);
        true
    }

    /// Advance every entity by one tick.
    ///
    /// Entities are visited in the raster order they had when the tick
    /// began (cells row-major, floor then occupant).  Each entity still in
    /// the world is ticked exactly once, at wherever it is by then.
    pub fn tick(&mut self) -> WorldResult<()> {
        let order: Vec<EntityId> = self.cells.iter().flat_map(Cell::iter).collect();
        for id in order {
            let Some(origin) = self.index.get(&id).map(|p| p.point) else {
                continue;
            };
            let Some(mut actor) = self.entities.remove(&id) else {
                continue;
            };
            let result = sh_behavior::tick_entity(&mut actor, origin, self);
            self.entities.insert(id, actor);
            result?;
        }
        self.ticks += 1;
        tracing::trace!(tick = self.ticks, entities = self.entities.len(), "world tick");
        Ok(())
    }

    // ── Messages and display ──────────────────────────────────────────────

    pub fn log(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Drain the message log.
    pub fn flush_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    /// One string per row: the topmost entity's glyph per cell, or
    /// [`EMPTY_GLYPH`](Self::EMPTY_GLYPH).
    pub fn display_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        cell.top()
                            .and_then(|id| self.entities.get(&id))
                            .map_or(Self::EMPTY_GLYPH, Entity::glyph)
                    })
                    .collect()
            })
            .collect()
    }
}

impl Surroundings for World {
    fn in_bounds(&self, point: Point) -> bool {
        World::in_bounds(self, point)
    }

    fn is_traversable(&self, point: Point) -> bool {
        self.traversable(point)
    }

    fn entities_at(&self, point: Point) -> Vec<EntityId> {
        self.get_cell(point)
            .map(|cell| cell.iter().collect())
            .unwrap_or_default()
    }

    fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    fn locate(&self, id: EntityId) -> Option<Point> {
        self.index.get(&id).map(|p| p.point)
    }
}

impl SurroundingsMut for World {
    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    fn relocate(&mut self, id: EntityId, src: Point, dest: Point) -> WorldResult<()> {
        self.move_entity(id, src, dest)
    }

    fn dice(&mut self) -> &mut dyn Dice {
        &mut self.rng
    }

    fn log(&mut self, message: String) {
        self.messages.push(message);
    }
}
