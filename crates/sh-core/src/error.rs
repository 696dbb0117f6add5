//! Spatial invariant errors shared by every crate that touches the grid.
//!
//! These are fatal to the call that raised them and always surface to the
//! caller; behaviours never produce them for ordinary failures such as a
//! blocked path or a missed swing.

use thiserror::Error;

use crate::{EntityId, Point};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("{0} is out of bounds")]
    OutOfBounds(Point),

    #[error("entity {id} not found at {point}")]
    EntityNotFound { point: Point, id: EntityId },

    #[error("cannot add {name} ({entity}): cell {} is already occupied", .point.fmt_xy())]
    CellIsOccupied {
        point:  Point,
        entity: EntityId,
        name:   &'static str,
    },

    #[error("cell {} has no index {z}", .point.fmt_xy())]
    CellIndex { point: Point, z: usize },

    #[error("entity {id} is already placed at {}", .point.fmt_xy())]
    AlreadyPlaced { point: Point, id: EntityId },
}

impl WorldError {
    /// The grid point the error refers to.
    pub fn point(&self) -> Point {
        match self {
            WorldError::OutOfBounds(p)                  => *p,
            WorldError::EntityNotFound { point, .. }    => *point,
            WorldError::CellIsOccupied { point, .. }    => *point,
            WorldError::CellIndex { point, .. }         => *point,
            WorldError::AlreadyPlaced { point, .. }     => *point,
        }
    }
}

/// Shorthand result type for grid operations.
pub type WorldResult<T> = Result<T, WorldError>;
