//! Geometry primitives: points, vectors, segments and rectangles.
//!
//! Everything here is pure math over `f64` values with no state. The
//! segment predicates are what box and crossing selection are built on.

mod point;
mod rect;
mod segment;

pub use point::{scale, translate, Point, Vector};
pub use rect::{contains_point, PositionedRect, Rect};
pub use segment::{
    angle_from_slope, bounding_edges, distance_to_segment, scale_segment, segment_length,
    segment_to_rect, segments_intersect, translate_segment, Segment,
};
