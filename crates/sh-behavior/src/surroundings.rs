//! The world as seen from inside a behaviour.

use sh_core::{Dice, EntityId, Point, WorldResult};
use sh_entity::Entity;

/// Read-only spatial queries.
///
/// The entity currently being ticked is checked out of the world, so
/// [`entity`](Self::entity) returns `None` for it even though its id still
/// appears in [`entities_at`](Self::entities_at).
pub trait Surroundings {
    fn in_bounds(&self, point: Point) -> bool;

    /// `true` if `point` is in bounds and holds no blocking occupant.
    fn is_traversable(&self, point: Point) -> bool;

    /// Ids at `point`, floor entities first, then the occupant.  Empty when
    /// out of bounds.
    fn entities_at(&self, point: Point) -> Vec<EntityId>;

    fn entity(&self, id: EntityId) -> Option<&Entity>;

    /// Current position of `id`, including a checked-out entity.
    fn locate(&self, id: EntityId) -> Option<Point>;

    /// In-bounds points within `radius` of `origin`, row-major.
    fn view(&self, origin: Point, radius: i32) -> Vec<Point> {
        origin
            .in_radius(radius)
            .into_iter()
            .filter(|&p| self.in_bounds(p))
            .collect()
    }

    /// Traversable points within `radius` of `origin`, row-major.
    fn view_traversable(&self, origin: Point, radius: i32) -> Vec<Point> {
        origin
            .in_radius(radius)
            .into_iter()
            .filter(|&p| self.is_traversable(p))
            .collect()
    }
}

/// The mutations an executing action may perform.
pub trait SurroundingsMut: Surroundings {
    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity>;

    /// Move `id` from `src` to `dest`.  Errors on spatial invariant
    /// violations only; callers check traversability first.
    fn relocate(&mut self, id: EntityId, src: Point, dest: Point) -> WorldResult<()>;

    /// The world's random source.
    fn dice(&mut self) -> &mut dyn Dice;

    /// Append a player-facing message.
    fn log(&mut self, message: String);
}
