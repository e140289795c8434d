//! World/screen coordinate transforms and anchor-preserving zoom.
//!
//! `position` is the world point shown at the screen origin and `scale` is
//! screen pixels per world unit. These two values are the only inputs to any
//! conversion:
//!
//! ```text
//! screen = (world - position) * scale
//! world  = position + screen / scale
//! ```

use draftkit_core::{scale_segment, translate_segment, Point, Segment};

/// Converts a world point to screen space.
pub fn world_to_screen(position: Point, scale: f64, point: Point) -> Point {
    point.translate(position.invert()).scale(scale)
}

/// Converts a screen point (typically the pointer) to world space.
pub fn mouse_screen_to_real(position: Point, screen: Point, scale: f64) -> Point {
    Point::new(position.x + screen.x / scale, position.y + screen.y / scale)
}

/// Converts a world segment to screen space.
pub fn segment_to_screen(position: Point, scale: f64, segment: &Segment) -> Segment {
    scale_segment(&translate_segment(segment, position.invert()), scale)
}

/// Returns the pan position that keeps the world point under `anchor` fixed
/// when the scale changes from `scale` to `new_scale`.
pub fn handle_scale_change(position: Point, scale: f64, anchor: Point, new_scale: f64) -> Point {
    let before = mouse_screen_to_real(position, anchor, scale);
    let after = mouse_screen_to_real(position, anchor, new_scale);
    position + (before - after)
}
