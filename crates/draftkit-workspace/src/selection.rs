//! Rubber-band selection.
//!
//! A selection area is stored as two opposite corners in world space, in the
//! order the user dragged them. Dragging left-to-right is a window selection
//! (full containment only); dragging right-to-left is a crossing selection,
//! which also takes objects that cut the area's boundary.

use std::collections::HashSet;

use draftkit_core::{PositionedRect, Segment, SegmentState};
use serde::{Deserialize, Serialize};

/// How a selection area picks objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Both endpoints strictly inside the area.
    Window,
    /// Window, plus anything crossing the area's edges.
    Crossing,
}

impl SelectionMode {
    /// Mode implied by the drag direction of `area`. Only the x axis decides.
    pub fn of(area: &Segment) -> Self {
        if area.start.x > area.end.x {
            SelectionMode::Crossing
        } else {
            SelectionMode::Window
        }
    }
}

fn is_contained(rect: &PositionedRect, segment: &Segment) -> bool {
    rect.contains_point(&segment.start) && rect.contains_point(&segment.end)
}

/// Ids of the objects `area` would select, in object order, without repeats.
pub fn will_be_selected(area: &Segment, objects: &[SegmentState]) -> Vec<String> {
    let mode = SelectionMode::of(area);
    let rect = area.to_rect();
    let edges = area.bounding_edges();
    let mut seen = HashSet::new();

    objects
        .iter()
        .filter(|object| {
            let segment = object.segment();
            is_contained(&rect, &segment)
                || (mode == SelectionMode::Crossing
                    && edges.iter().any(|edge| edge.intersects(&segment)))
        })
        .filter(|object| seen.insert(object.id.as_str()))
        .map(|object| object.id.clone())
        .collect()
}
