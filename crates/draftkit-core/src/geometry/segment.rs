//! Line segments and the predicates selection is built on.

use serde::{Deserialize, Serialize};

use super::{Point, PositionedRect, Vector};

/// An ordered pair of points.
///
/// Order matters for rendering (angle, endcap direction) but not for any of
/// the intersection or containment predicates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Creates a new segment.
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// A zero-length segment anchored at `point`.
    pub const fn degenerate(point: Point) -> Self {
        Self::new(point, point)
    }

    /// Returns a copy with the end point replaced.
    pub fn with_end(self, end: Point) -> Self {
        Self::new(self.start, end)
    }

    /// Endpoints as an array, in order.
    pub fn points(&self) -> [Point; 2] {
        [self.start, self.end]
    }

    /// Δy/Δx in endpoint order. Vertical segments give ±∞ (or NaN when the
    /// segment is a single point).
    pub fn slope(&self) -> f64 {
        (self.end.y - self.start.y) / (self.end.x - self.start.x)
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Per-axis minimum of the endpoints.
    pub fn lower_corner(&self) -> Point {
        Point::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y))
    }

    /// Per-axis maximum of the endpoints.
    pub fn upper_corner(&self) -> Point {
        Point::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y))
    }

    /// Axis-aligned bounding rectangle, independent of endpoint order.
    pub fn to_rect(&self) -> PositionedRect {
        let lower = self.lower_corner();
        let upper = self.upper_corner();
        PositionedRect::new(lower, upper.x - lower.x, upper.y - lower.y)
    }

    /// The four edges of the bounding rectangle: bottom, right, top, left.
    pub fn bounding_edges(&self) -> [Segment; 4] {
        let lower = self.lower_corner();
        let upper = self.upper_corner();
        let lower_right = Point::new(upper.x, lower.y);
        let upper_left = Point::new(lower.x, upper.y);
        [
            Segment::new(lower, lower_right),
            Segment::new(lower_right, upper),
            Segment::new(upper, upper_left),
            Segment::new(upper_left, lower),
        ]
    }

    /// Moves both endpoints by `vector`.
    pub fn translate(&self, vector: Vector) -> Segment {
        Segment::new(self.start.translate(vector), self.end.translate(vector))
    }

    /// Scales both endpoints about the origin.
    pub fn scale(&self, factor: f64) -> Segment {
        Segment::new(self.start.scale(factor), self.end.scale(factor))
    }

    /// See [`segments_intersect`].
    pub fn intersects(&self, other: &Segment) -> bool {
        segments_intersect(self, other)
    }

    /// Shortest distance from `point` to any point of the segment.
    pub fn distance_to_point(&self, point: &Point) -> f64 {
        let along = self.end - self.start;
        let len_sq = along.dot(along);
        if len_sq == 0.0 {
            return self.start.distance_to(point);
        }
        let t = ((*point - self.start).dot(along) / len_sq).clamp(0.0, 1.0);
        let closest = self.start.translate(along * t);
        closest.distance_to(point)
    }
}

/// Converts a slope to an angle in degrees.
///
/// `atan` saturates at ±90° for vertical segments, which is accepted as the
/// rendering angle rather than treated as an error.
pub fn angle_from_slope(slope: f64) -> f64 {
    slope.atan().to_degrees()
}

/// Euclidean length of `segment`.
pub fn segment_length(segment: &Segment) -> f64 {
    segment.length()
}

/// Axis-aligned bounding rectangle of `segment`.
pub fn segment_to_rect(segment: &Segment) -> PositionedRect {
    segment.to_rect()
}

/// The four edges of the bounding rectangle of `segment`.
pub fn bounding_edges(segment: &Segment) -> [Segment; 4] {
    segment.bounding_edges()
}

/// Moves both endpoints of `segment` by `vector`.
pub fn translate_segment(segment: &Segment, vector: Vector) -> Segment {
    segment.translate(vector)
}

/// Scales both endpoints of `segment` about the origin.
pub fn scale_segment(segment: &Segment, factor: f64) -> Segment {
    segment.scale(factor)
}

/// Shortest distance from `point` to `segment`.
pub fn distance_to_segment(point: &Point, segment: &Segment) -> f64 {
    segment.distance_to_point(point)
}

/// Closed bounding-box test used by the collinear cases of
/// [`segments_intersect`].
fn within_bounds(segment: &Segment, point: &Point) -> bool {
    let lower = segment.lower_corner();
    let upper = segment.upper_corner();
    point.x >= lower.x && point.x <= upper.x && point.y >= lower.y && point.y <= upper.y
}

/// Orientation predicate for two segments `AB` and `CD`.
///
/// With `d1 = AB×AC`, `d2 = AB×AD`, `d3 = CD×CA`, `d4 = CD×CB`, the segments
/// intersect when they properly cross (`d1*d2 < 0` and `d3*d4 < 0`) or when
/// any `dk` is zero and its point lies within the other segment's bounding box
/// (collinear overlap and endpoint touching).
pub fn segments_intersect(ab: &Segment, cd: &Segment) -> bool {
    let (a, b) = (ab.start, ab.end);
    let (c, d) = (cd.start, cd.end);
    let ab_dir = b - a;
    let cd_dir = d - c;

    let d1 = ab_dir.cross(c - a);
    let d2 = ab_dir.cross(d - a);
    let d3 = cd_dir.cross(a - c);
    let d4 = cd_dir.cross(b - c);

    if d1 * d2 < 0.0 && d3 * d4 < 0.0 {
        return true;
    }

    (d1 == 0.0 && within_bounds(ab, &c))
        || (d2 == 0.0 && within_bounds(ab, &d))
        || (d3 == 0.0 && within_bounds(cd, &a))
        || (d4 == 0.0 && within_bounds(cd, &b))
}
