//! Point and vector value types.
//!
//! Both are plain `{x, y}` pairs. A [`Point`] is a location (world or screen),
//! a [`Vector`] is a displacement between two locations. Neither carries an
//! identity; persisted points live in [`crate::PointEntity`].

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A real-valued 2D location.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A real-valued 2D displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Moves the point by `vector`.
    pub fn translate(self, vector: Vector) -> Point {
        Point::new(self.x + vector.x, self.y + vector.y)
    }

    /// Scales both coordinates uniformly about the origin.
    pub fn scale(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }

    /// Returns the vector that moves this point onto the origin.
    pub fn invert(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }

    /// Exact coordinate equality.
    ///
    /// Used for gesture bookkeeping (`position == last_position`) and for
    /// matching draft endpoints to stored points, both of which compare values
    /// that were copied rather than recomputed.
    #[allow(clippy::float_cmp)]
    pub fn is_same_point(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Interprets the point as a displacement from the origin.
    pub fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

impl Vector {
    /// The zero displacement.
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    /// Creates a new vector.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector pointing from `from` to `to`.
    pub fn between(from: Point, to: Point) -> Vector {
        Vector::new(to.x - from.x, to.y - from.y)
    }

    /// 2D cross product (z component of the 3D cross product).
    pub fn cross(self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Dot product.
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Length of the vector.
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        self.translate(rhs)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::between(rhs, self)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl From<Vector> for Point {
    fn from(v: Vector) -> Self {
        Point::new(v.x, v.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Moves `point` by `vector`.
pub fn translate(point: Point, vector: Vector) -> Point {
    point.translate(vector)
}

/// Scales `point` uniformly by `factor`.
pub fn scale(point: Point, factor: f64) -> Point {
    point.scale(factor)
}
