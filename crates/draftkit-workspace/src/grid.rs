//! Adaptive grid-line generator.
//!
//! The step is a power of ten chosen so that no more than `max_lines` lines
//! fit across the viewport at the current scale. Line offsets are returned in
//! screen pixels relative to the viewport origin.

use draftkit_core::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Grid lines for one frame, plus the data a bar-scale widget needs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridLines {
    /// World distance between adjacent lines.
    pub step: f64,
    /// Screen distance between adjacent lines.
    pub step_width: f64,
    /// Screen x offsets of vertical lines.
    pub vertical: Vec<f64>,
    /// Screen y offsets of horizontal lines.
    pub horizontal: Vec<f64>,
}

/// Smallest power-of-ten step (at least 10) that keeps
/// `floor(viewport_width / scale / step)` within `max_lines`.
pub fn get_step(viewport_width: f64, scale: f64, max_lines: usize) -> f64 {
    let span = viewport_width / scale;
    let mut step = 1.0;
    if !span.is_finite() {
        return step * 10.0;
    }
    loop {
        step *= 10.0;
        if (span / step).floor() <= max_lines as f64 {
            return step;
        }
    }
}

/// World position of the first line at or after `position`.
fn first_line(position: f64, step: f64) -> f64 {
    if position < 0.0 {
        position - position % step
    } else if position > 0.0 {
        position + (step - position % step)
    } else {
        step
    }
}

#[allow(clippy::float_cmp)]
fn axis_lines(count: usize, position: f64, step: f64, scale: f64) -> Vec<f64> {
    let first = first_line(position, step);
    (0..count)
        .map(|i| first + step * i as f64 - position)
        // The line through the world origin is the axis, drawn separately.
        .filter(|offset| *offset != -position)
        .map(|offset| offset * scale)
        .collect()
}

/// Generates the grid for a viewport.
///
/// The step follows the viewport width; line counts on both axes are capped
/// at `max_lines`.
pub fn grid_lines(position: Point, scale: f64, viewport: Rect, max_lines: usize) -> GridLines {
    let step = get_step(viewport.width, scale, max_lines);
    let count = |dim: f64| ((dim / scale / step).ceil() as usize).min(max_lines);

    GridLines {
        step,
        step_width: step * scale,
        vertical: axis_lines(count(viewport.width), position.x, step, scale),
        horizontal: axis_lines(count(viewport.height), position.y, step, scale),
    }
}
