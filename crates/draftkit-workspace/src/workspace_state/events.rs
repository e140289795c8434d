//! Workspace input events.

use draftkit_core::{Point, SegmentState};
use serde::{Deserialize, Serialize};

use super::Command;
use crate::zoom::ZoomDirection;

/// Everything a host can feed into a workspace.
///
/// Coordinates are screen pixels unless stated otherwise. The JSON form is
/// tagged by `type`, e.g. `{"type": "mouse_move", "x": 10, "y": 10}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkspaceEvent {
    /// Pan by the vector from the pointer back to the press point.
    Drag { x: f64, y: f64 },
    /// The viewport was resized.
    Resize { width: f64, height: f64 },
    /// Pointer moved to `(x, y)`.
    MouseMove { x: f64, y: f64 },
    /// Pointer click (press and release).
    Click,
    /// Explicit scale change anchored at a screen point.
    ScaleChange {
        new_scale: f64,
        scaling_center: Point,
    },
    /// Wheel tick at the pointer; positive `delta_y` zooms in.
    Wheel { delta_y: f64, x: f64, y: f64 },
    /// Zoom button, anchored at the viewport centre.
    Zoom { direction: ZoomDirection },
    /// Switch the active command.
    Command { command: Command },
    /// Delete the selected objects.
    Delete,
    /// Drop the draft segment and the selection area.
    Cancel,
    /// The store's point-resolved segment list changed.
    ObjectsChanged { objects: Vec<SegmentState> },
    /// Pointer pressed; may start a pan.
    PointerDown { x: f64, y: f64 },
    /// Pointer released; ends a pan.
    PointerUp { x: f64, y: f64 },
    /// Key press, by host key name.
    KeyDown { key: String },
    /// Advance the proximity target.
    CycleProximity,
}

impl WorkspaceEvent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            WorkspaceEvent::Drag { .. } => "drag",
            WorkspaceEvent::Resize { .. } => "resize",
            WorkspaceEvent::MouseMove { .. } => "mouse_move",
            WorkspaceEvent::Click => "click",
            WorkspaceEvent::ScaleChange { .. } => "scale_change",
            WorkspaceEvent::Wheel { .. } => "wheel",
            WorkspaceEvent::Zoom { .. } => "zoom",
            WorkspaceEvent::Command { .. } => "command",
            WorkspaceEvent::Delete => "delete",
            WorkspaceEvent::Cancel => "cancel",
            WorkspaceEvent::ObjectsChanged { .. } => "objects_changed",
            WorkspaceEvent::PointerDown { .. } => "pointer_down",
            WorkspaceEvent::PointerUp { .. } => "pointer_up",
            WorkspaceEvent::KeyDown { .. } => "key_down",
            WorkspaceEvent::CycleProximity => "cycle_proximity",
        }
    }

    /// Whether the event can move rendered geometry relative to the pointer.
    pub fn moves_view(&self) -> bool {
        matches!(
            self,
            WorkspaceEvent::Drag { .. }
                | WorkspaceEvent::MouseMove { .. }
                | WorkspaceEvent::ScaleChange { .. }
                | WorkspaceEvent::Wheel { .. }
                | WorkspaceEvent::Zoom { .. }
                | WorkspaceEvent::ObjectsChanged { .. }
        )
    }
}
