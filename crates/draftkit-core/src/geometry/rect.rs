//! Unanchored and anchored axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use super::Point;

/// An unanchored size, e.g. the viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Centre of a rectangle of this size anchored at the origin.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A [`Rect`] anchored at its minimum corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionedRect {
    /// Minimum corner `(min x, min y)`.
    pub point: Point,
    pub width: f64,
    pub height: f64,
}

impl PositionedRect {
    /// Creates a rectangle from its minimum corner and size.
    pub const fn new(point: Point, width: f64, height: f64) -> Self {
        Self {
            point,
            width,
            height,
        }
    }

    /// Creates a rectangle spanning two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let min = Point::new(a.x.min(b.x), a.y.min(b.y));
        let max = Point::new(a.x.max(b.x), a.y.max(b.y));
        Self::new(min, max.x - min.x, max.y - min.y)
    }

    /// Maximum corner.
    pub fn upper_corner(&self) -> Point {
        Point::new(self.point.x + self.width, self.point.y + self.height)
    }

    /// Strict containment: points on the boundary are outside.
    ///
    /// Box selection relies on this; an object whose endpoint lies exactly
    /// on the selection edge is not enclosed.
    pub fn contains_point(&self, point: &Point) -> bool {
        let upper = self.upper_corner();
        let x_contained = point.x > self.point.x && point.x < upper.x;
        let y_contained = point.y > self.point.y && point.y < upper.y;
        x_contained && y_contained
    }

    /// Unanchored size of the rectangle.
    pub fn size(&self) -> Rect {
        Rect::new(self.width, self.height)
    }
}

/// Strict point-in-rectangle test, see [`PositionedRect::contains_point`].
pub fn contains_point(rect: &PositionedRect, point: &Point) -> bool {
    rect.contains_point(point)
}
