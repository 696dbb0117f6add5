use sh_core::{Point, WorldError};
use sh_entity::PropertyValidationError;
use thiserror::Error;

/// Building a world from character layers failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LegendError {
    #[error("a world needs at least one layer")]
    NoLayers,

    #[error("layer {layer} has no cells")]
    EmptyLayer { layer: usize },

    #[error("layer {layer} has {got} rows, expected {expected}")]
    LayerHeight {
        layer:    usize,
        expected: usize,
        got:      usize,
    },

    #[error("layer {layer} row {row} is {got} cells wide, expected {expected}")]
    RaggedLayer {
        layer:    usize,
        row:      usize,
        expected: usize,
        got:      usize,
    },

    #[error("glyph {glyph:?} at {} is missing from the legend", .point.fmt_xy())]
    MissingGlyph { glyph: char, point: Point },

    #[error(transparent)]
    Property(#[from] PropertyValidationError),

    #[error(transparent)]
    World(#[from] WorldError),
}

pub type LegendResult<T> = Result<T, LegendError>;
