//! Derived, render-ready outputs.
//!
//! Everything here is a pure function of [`WorkspaceState`] and is recomputed
//! on demand. Screen coordinates of rendered objects are rounded: to one
//! decimal when zoomed in past 1:1, to whole pixels otherwise.

use draftkit_core::{angle_from_slope, Point, PositionedRect, Segment};
use serde::{Deserialize, Serialize};

use super::{Command, WorkspaceState};
use crate::grid::{grid_lines, GridLines};
use crate::viewport::{mouse_screen_to_real, segment_to_screen};

/// Display rounding for screen values at `scale`. Halves round toward +∞.
pub fn round(value: f64, scale: f64) -> f64 {
    if scale > 1.0 {
        (value * 10.0 + 0.5).floor() / 10.0
    } else {
        (value + 0.5).floor()
    }
}

pub fn round_point(point: Point, scale: f64) -> Point {
    Point::new(round(point.x, scale), round(point.y, scale))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointViewModel {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub in_proximity: bool,
}

impl PointViewModel {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentViewModel {
    pub id: String,
    pub in_proximity: bool,
    pub is_selected: bool,
    pub will_be_selected: bool,
    pub geometry: [PointViewModel; 2],
}

/// Placement of a segment drawn as a horizontal capsule rotated into place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentOrientation {
    /// Leftmost endpoint; the rotation pivot.
    pub anchor: Point,
    /// Rotation in degrees.
    pub angle: f64,
    pub length: f64,
}

impl SegmentViewModel {
    pub fn segment(&self) -> Segment {
        Segment::new(self.geometry[0].point(), self.geometry[1].point())
    }

    pub fn orientation(&self) -> SegmentOrientation {
        let segment = self.segment();
        let anchor = if segment.start.x > segment.end.x {
            segment.end
        } else {
            segment.start
        };
        SegmentOrientation {
            anchor,
            angle: angle_from_slope(segment.slope()),
            length: segment.length(),
        }
    }
}

/// Screen offsets of the world axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Axes {
    pub x: f64,
    pub y: f64,
}

/// Pointer tooltip contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorData {
    pub real: Point,
    pub screen: Point,
    pub label: String,
}

pub fn draft_segment(state: &WorkspaceState) -> Option<Segment> {
    state
        .draft_segment
        .map(|segment| segment_to_screen(state.position, state.scale, &segment))
}

pub fn selection_area(state: &WorkspaceState) -> Option<PositionedRect> {
    state
        .selection_area
        .map(|area| segment_to_screen(state.position, state.scale, &area).to_rect())
}

pub fn is_anything_selected(state: &WorkspaceState) -> bool {
    !state.selected_object_ids.is_empty()
}

pub fn segment_view_models(state: &WorkspaceState) -> Vec<SegmentViewModel> {
    let proximity = state.proximity_id.as_deref();
    state
        .objects
        .iter()
        .map(|object| {
            let screen = segment_to_screen(state.position, state.scale, &object.segment());
            let point_vm = |index: usize, point: Point| {
                let id = &object.geometry[index].id;
                let rounded = round_point(point, state.scale);
                PointViewModel {
                    id: id.clone(),
                    x: rounded.x,
                    y: rounded.y,
                    in_proximity: proximity == Some(id.as_str()),
                }
            };
            SegmentViewModel {
                id: object.id.clone(),
                in_proximity: proximity == Some(object.id.as_str()),
                is_selected: state.selected_object_ids.contains(&object.id),
                will_be_selected: state.will_be_selected_ids.contains(&object.id),
                geometry: [point_vm(0, screen.start), point_vm(1, screen.end)],
            }
        })
        .collect()
}

pub fn grid(state: &WorkspaceState, max_lines: usize) -> GridLines {
    grid_lines(state.position, state.scale, state.viewport_size, max_lines)
}

pub fn axes(state: &WorkspaceState) -> Axes {
    Axes {
        x: -state.position.x * state.scale,
        y: -state.position.y * state.scale,
    }
}

pub fn cursor(state: &WorkspaceState) -> CursorData {
    let real = mouse_screen_to_real(state.position, state.mouse_screen_position, state.scale);
    let shown = round_point(real, state.scale);
    CursorData {
        real,
        screen: state.mouse_screen_position,
        label: shown.to_string(),
    }
}

/// Every derived output for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceView {
    pub scale: f64,
    pub position: Point,
    pub command: Command,
    pub objects: Vec<SegmentViewModel>,
    pub draft_segment: Option<Segment>,
    pub selection_area: Option<PositionedRect>,
    pub is_anything_selected: bool,
    pub selected_object_ids: Vec<String>,
    pub proximity_id: Option<String>,
    pub grid: GridLines,
    pub axes: Axes,
    pub cursor: CursorData,
}

impl WorkspaceView {
    pub fn from_state(state: &WorkspaceState, max_grid_lines: usize) -> Self {
        Self {
            scale: state.scale,
            position: state.position,
            command: state.main_command,
            objects: segment_view_models(state),
            draft_segment: draft_segment(state),
            selection_area: selection_area(state),
            is_anything_selected: is_anything_selected(state),
            selected_object_ids: state.selected_object_ids.clone(),
            proximity_id: state.proximity_id.clone(),
            grid: grid(state, max_grid_lines),
            axes: axes(state),
            cursor: cursor(state),
        }
    }

    pub fn object(&self, id: &str) -> Option<&SegmentViewModel> {
        self.objects.iter().find(|object| object.id == id)
    }
}
