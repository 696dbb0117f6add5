//! Integer grid coordinates and the spatial helpers built on them.
//!
//! All distances are Chebyshev (king-move) distances: the eight cells around
//! a point are all at distance 1.  Enumeration order is always row-major
//! (`y` outer, `x` inner) so that anything iterating a neighbourhood is
//! deterministic for a given seed.

use std::fmt;
use std::ops::{Add, Sub};
use std::ops::RangeInclusive;

use crate::Dice;

/// A point (or offset) on the simulation grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// A point with coordinates drawn uniformly from the given inclusive ranges.
    pub fn random<D: Dice + ?Sized>(
        dice: &mut D,
        xs:   RangeInclusive<i32>,
        ys:   RangeInclusive<i32>,
    ) -> Self {
        Self {
            x: dice.int_in(*xs.start(), *xs.end()),
            y: dice.int_in(*ys.start(), *ys.end()),
        }
    }

    /// Chebyshev distance to `other`.
    #[inline]
    pub fn chebyshev(self, other: Point) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Every point within `radius` of `self`, excluding `self`, row-major.
    ///
    /// Returns `(2r + 1)^2 - 1` points; a negative radius yields none.
    pub fn in_radius(self, radius: i32) -> Vec<Point> {
        if radius < 0 {
            return Vec::new();
        }
        let side = (2 * radius + 1) as usize;
        let mut points = Vec::with_capacity(side * side - 1);
        for y in (self.y - radius)..=(self.y + radius) {
            for x in (self.x - radius)..=(self.x + radius) {
                let p = Point::new(x, y);
                if p != self {
                    points.push(p);
                }
            }
        }
        points
    }

    /// Normalise an offset to a single step: each component becomes its sign.
    #[inline]
    pub fn to_dir(self) -> Point {
        Point::new(self.x.signum(), self.y.signum())
    }

    /// `true` if `other` is one of the eight neighbours of `self`.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self != other && self.chebyshev(other) <= 1
    }

    /// The point as a bare `(x, y)` pair, for cell labels in messages.
    pub fn fmt_xy(self) -> String {
        format!("({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}
