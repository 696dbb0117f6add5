//! Building worlds from layered character maps.
//!
//! Every layer is a list of equal-width rows; all layers share the first
//! layer's dimensions.  For each cell (row-major) the layers are read in
//! order and every non-blank glyph spawns the entity kind the legend maps it
//! to.  Shape and glyph checks run before anything is spawned.

use std::collections::BTreeMap;

use sh_core::Point;
use sh_entity::Kind;

use crate::{LegendError, LegendResult, World};

/// Glyph → entity kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Legend(BTreeMap<char, Kind>);

impl Legend {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, glyph: char, kind: Kind) -> Self {
        self.0.insert(glyph, kind);
        self
    }

    pub fn get(&self, glyph: char) -> Option<Kind> {
        self.0.get(&glyph).copied()
    }
}

impl FromIterator<(char, Kind)> for Legend {
    fn from_iter<I: IntoIterator<Item = (char, Kind)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl World {
    /// Build a world from `layers` using `legend`, seeding its RNG with
    /// `seed`.
    ///
    /// ```rust
    /// use sh_entity::Kind;
    /// use sh_world::{Legend, World};
    ///
    /// const GROUND: &[&str] = &["I\"", " I"];
    ///
    /// let legend = Legend::new().with('I', Kind::StonePillar).with('"', Kind::Grass);
    /// let world = World::from_legend(&legend, &[GROUND], 7).unwrap();
    /// assert_eq!(world.display_rows(), vec!["I\"", " I"]);
    /// ```
    pub fn from_legend(legend: &Legend, layers: &[&[&str]], seed: u64) -> LegendResult<World> {
        let grids = parse_layers(layers)?;
        let (width, height) = (grids[0][0].len(), grids[0].len());

        let mut placements = Vec::new();
        for y in 0..height {
            for x in 0..width {
                for grid in &grids {
                    let glyph = grid[y][x];
                    if glyph == World::EMPTY_GLYPH {
                        continue;
                    }
                    let point = Point::new(x as i32, y as i32);
                    let kind = legend
                        .get(glyph)
                        .ok_or(LegendError::MissingGlyph { glyph, point })?;
                    placements.push((point, kind));
                }
            }
        }

        let mut world = World::new(width as i32, height as i32, seed);
        for (point, kind) in placements {
            let entity = kind.spawn(world.rng())?;
            world.add(point, entity)?;
        }
        tracing::debug!(width, height, entities = world.len(), "world built from legend");
        Ok(world)
    }
}

/// Split every layer into a rectangular char grid matching the first one.
fn parse_layers(layers: &[&[&str]]) -> LegendResult<Vec<Vec<Vec<char>>>> {
    let Some(first) = layers.first() else {
        return Err(LegendError::NoLayers);
    };
    let height = first.len();
    let width = first.first().map_or(0, |row| row.chars().count());

    let mut grids = Vec::with_capacity(layers.len());
    for (layer, rows) in layers.iter().enumerate() {
        if rows.is_empty() || width == 0 {
            return Err(LegendError::EmptyLayer { layer });
        }
        if rows.len() != height {
            return Err(LegendError::LayerHeight { layer, expected: height, got: rows.len() });
        }
        let grid: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
        if let Some((row, cells)) = grid.iter().enumerate().find(|(_, cells)| cells.len() != width) {
            return Err(LegendError::RaggedLayer { layer, row, expected: width, got: cells.len() });
        }
        grids.push(grid);
    }
    Ok(grids)
}
