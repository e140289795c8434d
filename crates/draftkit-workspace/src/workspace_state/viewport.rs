//! Pan and zoom transitions.

use draftkit_core::{Point, Rect, Vector};

use super::{StatePatch, Transition, WorkspaceState};
use crate::viewport::handle_scale_change;
use crate::zoom::{ScaleChange, ZoomController, ZoomDirection};

/// Pans relative to the gesture origin, so repeated drag vectors do not
/// compound.
pub(super) fn drag(state: &WorkspaceState, vector: Vector) -> Transition {
    let position = state.last_position + vector / state.scale;
    tracing::trace!("Drag to {}", position);
    StatePatch::default().position(position).into()
}

pub(super) fn resize(size: Rect) -> Transition {
    tracing::debug!("Viewport resized to {}x{}", size.width, size.height);
    StatePatch::default().viewport_size(size).into()
}

/// Anchor-preserving rescale. A zoom also starts a new gesture origin.
pub(super) fn scale_change(
    state: &WorkspaceState,
    new_scale: f64,
    anchor: Point,
    zoom: &ZoomController,
) -> Transition {
    let new_scale = zoom.settings().clamp(new_scale);
    let position = handle_scale_change(state.position, state.scale, anchor, new_scale);
    tracing::debug!("Scale {} -> {} about {}", state.scale, new_scale, anchor);
    StatePatch::default()
        .scale(new_scale)
        .position(position)
        .last_position(position)
        .into()
}

fn apply_change(state: &WorkspaceState, change: ScaleChange, zoom: &ZoomController) -> Transition {
    scale_change(state, change.new_scale, change.scaling_center, zoom)
}

pub(super) fn wheel(
    state: &WorkspaceState,
    delta_y: f64,
    pointer: Point,
    zoom: &ZoomController,
) -> Transition {
    apply_change(state, zoom.wheel(state.scale, delta_y, pointer), zoom)
}

pub(super) fn zoom(
    state: &WorkspaceState,
    direction: ZoomDirection,
    zoom: &ZoomController,
) -> Transition {
    apply_change(
        state,
        zoom.step(state.scale, direction, state.viewport_size),
        zoom,
    )
}
