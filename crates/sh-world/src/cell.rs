//! The contents of one grid point.

use sh_core::{EntityId, Point, WorldError, WorldResult};

/// Zero or more traversable entities (in insertion order) plus at most one
/// blocking occupant.
///
/// Cells hold ids only; the entities themselves live in the
/// [`World`](crate::World)'s store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    point:    Point,
    floor:    Vec<EntityId>,
    occupant: Option<EntityId>,
}

impl Cell {
    pub fn new(point: Point) -> Self {
        Self { point, floor: Vec::new(), occupant: None }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    /// Floor entities plus the occupant, if any.
    pub fn len(&self) -> usize {
        self.floor.len() + usize::from(self.occupant.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn occupant(&self) -> Option<EntityId> {
        self.occupant
    }

    pub fn floor(&self) -> &[EntityId] {
        &self.floor
    }

    /// Floor entities first, then the occupant.
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.floor.iter().copied().chain(self.occupant)
    }

    /// The `z`th entity in [`iter`](Self::iter) order.
    pub fn get(&self, z: usize) -> WorldResult<EntityId> {
        self.iter()
            .nth(z)
            .ok_or(WorldError::CellIndex { point: self.point, z })
    }

    /// The entity drawn on top: the occupant, else the newest floor entity.
    pub fn top(&self) -> Option<EntityId> {
        self.occupant.or_else(|| self.floor.last().copied())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.occupant == Some(id) || self.floor.contains(&id)
    }

    /// `true` if an entity with the given traversability could be added.
    pub fn admits(&self, traversable: bool) -> bool {
        traversable || self.occupant.is_none()
    }

    pub(crate) fn add(&mut self, id: EntityId, name: &'static str, traversable: bool) -> WorldResult<()> {
        if traversable {
            self.floor.push(id);
        } else if self.occupant.is_some() {
            return Err(WorldError::CellIsOccupied { point: self.point, entity: id, name });
        } else {
            self.occupant = Some(id);
        }
        Ok(())
    }

    pub(crate) fn pop(&mut self, id: EntityId) -> WorldResult<()> {
        if self.occupant == Some(id) {
            self.occupant = None;
            return Ok(());
        }
        let Some(i) = self.floor.iter().position(|&x| x == id) else {
            return Err(WorldError::EntityNotFound { point: self.point, id });
        };
        self.floor.remove(i);
        Ok(())
    }
}
